use std::f32::consts::FRAC_PI_2;

use anyhow::{anyhow, Result};
use eframe::egui::{
    self, epaint::TextShape, pos2, Align2, Color32, FontId, Painter, Rect, Sense, Stroke,
    StrokeKind, ViewportBuilder,
};

use super::layout::{self, ChartLayout};
use super::model::ChartModel;
use crate::config::ChartSettings;

const GRID_COLOR: Color32 = Color32::from_gray(225);
const INK: Color32 = Color32::BLACK;

/// Open the chart window and block until it is closed
pub fn show(model: ChartModel, settings: &ChartSettings) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(settings.window_title)
            .with_inner_size([settings.width, settings.height]),
        ..Default::default()
    };

    eframe::run_native(
        settings.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartApp::new(model)))),
    )
    .map_err(|e| anyhow!("Failed to open chart window: {e}"))
}

struct ChartApp {
    model: ChartModel,
    counts: Vec<usize>,
}

impl ChartApp {
    fn new(model: ChartModel) -> Self {
        let counts = model.counts();
        Self { model, counts }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(Color32::WHITE))
            .show(ctx, |ui| {
                let (area, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
                let painter = ui.painter_at(area);
                let layout = layout::compute(area, &self.counts);
                paint(&painter, area, &layout, &self.model);
            });
    }
}

fn paint(painter: &Painter, area: Rect, layout: &ChartLayout, model: &ChartModel) {
    paint_grid(painter, layout);
    paint_bars(painter, layout, model);
    paint_axes(painter, layout);
    paint_titles(painter, area, layout, model);
}

fn paint_grid(painter: &Painter, layout: &ChartLayout) {
    let plot = layout.plot;
    for tick in &layout.y_ticks {
        painter.line_segment(
            [pos2(plot.left(), tick.y), pos2(plot.right(), tick.y)],
            Stroke::new(1.0, GRID_COLOR),
        );
        painter.text(
            pos2(plot.left() - 8.0, tick.y),
            Align2::RIGHT_CENTER,
            tick.value.to_string(),
            FontId::proportional(12.0),
            INK,
        );
    }
}

fn paint_bars(painter: &Painter, layout: &ChartLayout, model: &ChartModel) {
    for (rect, bar) in layout.bars.iter().zip(&model.bars) {
        let (r, g, b) = bar.color;
        painter.rect_filled(*rect, 0.0, Color32::from_rgb(r, g, b));
        painter.rect_stroke(*rect, 0.0, Stroke::new(1.0, INK), StrokeKind::Inside);

        painter.text(
            pos2(rect.center().x, rect.top() - 3.0),
            Align2::CENTER_BOTTOM,
            bar.percentage_label(),
            FontId::proportional(13.0),
            INK,
        );
        painter.text(
            pos2(rect.center().x, layout.plot.bottom() + 8.0),
            Align2::CENTER_TOP,
            &bar.label,
            FontId::proportional(13.0),
            INK,
        );
    }
}

fn paint_axes(painter: &Painter, layout: &ChartLayout) {
    let plot = layout.plot;
    let stroke = Stroke::new(1.0, INK);
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], stroke);
    painter.line_segment([plot.left_bottom(), plot.left_top()], stroke);
}

fn paint_titles(painter: &Painter, area: Rect, layout: &ChartLayout, model: &ChartModel) {
    let plot = layout.plot;

    painter.text(
        pos2(plot.center().x, area.top() + 28.0),
        Align2::CENTER_CENTER,
        model.title,
        FontId::proportional(20.0),
        INK,
    );
    painter.text(
        pos2(plot.center().x, plot.bottom() + 52.0),
        Align2::CENTER_TOP,
        model.x_axis_title,
        FontId::proportional(15.0),
        INK,
    );

    // Rotated a quarter turn anticlockwise, anchored at the galley's top-left
    let galley = painter.layout_no_wrap(
        model.y_axis_title.to_string(),
        FontId::proportional(15.0),
        INK,
    );
    let origin = pos2(area.left() + 14.0, plot.center().y + galley.size().x / 2.0);
    painter.add(TextShape::new(origin, galley, INK).with_angle(-FRAC_PI_2));

    painter.text(
        pos2(area.left() + area.width() * 0.06, area.bottom() - area.height() * 0.05),
        Align2::LEFT_BOTTOM,
        &model.attribution,
        FontId::proportional(13.0),
        INK,
    );
}
