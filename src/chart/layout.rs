use eframe::egui::{pos2, Rect};

const MARGIN_LEFT: f32 = 80.0;
const MARGIN_RIGHT: f32 = 30.0;
const MARGIN_TOP: f32 = 60.0;
// Room below the plot for tick labels and captions
const MARGIN_BOTTOM: f32 = 120.0;

/// Fraction of each slot covered by its bar
const BAR_WIDTH_RATIO: f32 = 0.8;
const TARGET_TICKS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YTick {
    pub value: usize,
    pub y: f32,
}

/// Screen geometry for one frame of the chart
#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub plot: Rect,
    pub axis_max: usize,
    pub y_ticks: Vec<YTick>,
    pub bars: Vec<Rect>,
}

pub fn compute(area: Rect, counts: &[usize]) -> ChartLayout {
    let plot = plot_rect(area);
    let max_count = counts.iter().copied().max().unwrap_or(0);
    let step = tick_step(max_count);
    let axis_max = axis_max(max_count, step);

    let y_ticks = (0..=axis_max)
        .step_by(step)
        .map(|value| YTick {
            value,
            y: value_to_y(plot, value, axis_max),
        })
        .collect();

    let bars = bar_rects(plot, counts, axis_max);

    ChartLayout {
        plot,
        axis_max,
        y_ticks,
        bars,
    }
}

fn plot_rect(area: Rect) -> Rect {
    Rect::from_min_max(
        pos2(area.left() + MARGIN_LEFT, area.top() + MARGIN_TOP),
        pos2(
            (area.right() - MARGIN_RIGHT).max(area.left() + MARGIN_LEFT + 1.0),
            (area.bottom() - MARGIN_BOTTOM).max(area.top() + MARGIN_TOP + 1.0),
        ),
    )
}

fn bar_rects(plot: Rect, counts: &[usize], axis_max: usize) -> Vec<Rect> {
    if counts.is_empty() {
        return Vec::new();
    }

    let slot = plot.width() / counts.len() as f32;
    let width = slot * BAR_WIDTH_RATIO;
    let inset = (slot - width) / 2.0;

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let left = plot.left() + i as f32 * slot + inset;
            Rect::from_min_max(
                pos2(left, value_to_y(plot, count, axis_max)),
                pos2(left + width, plot.bottom()),
            )
        })
        .collect()
}

fn value_to_y(plot: Rect, value: usize, axis_max: usize) -> f32 {
    plot.bottom() - (value as f32 / axis_max as f32) * plot.height()
}

/// Round tick spacing (1, 2 or 5 times a power of ten) giving about five ticks
/// up to `max_count` plus headroom for the percentage labels
pub fn tick_step(max_count: usize) -> usize {
    let target = with_headroom(max_count) as f64 / TARGET_TICKS;
    if target <= 1.0 {
        return 1;
    }

    let magnitude = 10f64.powf(target.log10().floor());
    let normalized = target / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    ((factor * magnitude) as usize).max(1)
}

/// Top of the y axis: the first tick at or above `max_count` plus headroom
pub fn axis_max(max_count: usize, step: usize) -> usize {
    with_headroom(max_count).div_ceil(step) * step
}

fn with_headroom(max_count: usize) -> usize {
    max_count + (max_count / 10).max(1)
}
