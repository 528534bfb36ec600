/// Ranked ladder tier, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Stone,    // 0-499
    Bronze,   // 500-699
    Silver,   // 700-899
    Gold,     // 900-1099
    Platinum, // 1100-1299
    Diamond,  // 1300-1499
    Masters,  // 1500+
}

impl Tier {
    pub const COUNT: usize = 7;

    /// Every tier in ladder (and chart axis) order
    pub const ALL: [Tier; Tier::COUNT] = [
        Tier::Stone,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Diamond,
        Tier::Masters,
    ];

    /// Classify a score. Anything not inside a lower range lands in Masters,
    /// including negative scores.
    pub fn from_score(score: i64) -> Self {
        match score {
            0..=499 => Tier::Stone,
            500..=699 => Tier::Bronze,
            700..=899 => Tier::Silver,
            900..=1099 => Tier::Gold,
            1100..=1299 => Tier::Platinum,
            1300..=1499 => Tier::Diamond,
            _ => Tier::Masters,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Stone => "Stone",
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
            Tier::Diamond => "Diamond",
            Tier::Masters => "Masters",
        }
    }

    pub fn range_label(&self) -> &'static str {
        match self {
            Tier::Stone => "0-499",
            Tier::Bronze => "500-699",
            Tier::Silver => "700-899",
            Tier::Gold => "900-1099",
            Tier::Platinum => "1100-1299",
            Tier::Diamond => "1300-1499",
            Tier::Masters => "1500+",
        }
    }

    /// Bar fill as RGB
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Tier::Stone => (0xA9, 0xA9, 0xA9),
            Tier::Bronze => (0xCD, 0x7F, 0x32),
            Tier::Silver => (0xC0, 0xC0, 0xC0),
            Tier::Gold => (0xFF, 0xD7, 0x00),
            Tier::Platinum => (0xE5, 0xE4, 0xE2),
            Tier::Diamond => (0x00, 0xBF, 0xFF),
            Tier::Masters => (0x98, 0xFB, 0x98),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
