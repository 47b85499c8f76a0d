use serde::{Deserialize, Serialize};

/// Land-cover class a synthesized feature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Category {
    Crops,
    Water,
    Forest,
    Urban,
    Generic,
}

string_enum!(Category {
    Crops => "crops",
    Water => "water",
    Forest => "forest",
    Urban => "urban",
    Generic => "generic",
});

impl Category {
    /// Every category, in colour-table order.
    pub const ALL: [Category; 5] = [
        Category::Crops,
        Category::Water,
        Category::Forest,
        Category::Urban,
        Category::Generic,
    ];

    /// Categories a query can ask for, in the order they are reported.
    pub const DETECTABLE: [Category; 4] = [
        Category::Crops,
        Category::Water,
        Category::Forest,
        Category::Urban,
    ];

    pub fn color(self) -> &'static str {
        match self {
            Category::Crops => "#e53935",
            Category::Water => "#1e88e5",
            Category::Forest => "#43a047",
            Category::Urban => "#8e24aa",
            Category::Generic => "#546e7a",
        }
    }

    /// Query words that select this category.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Crops => &["crop", "crops", "farm", "agri", "agriculture"],
            Category::Water => &["water", "lake", "river", "reservoir", "wetland"],
            Category::Forest => &["forest", "tree", "wood", "woodland"],
            Category::Urban => &["urban", "building", "city", "house", "settlement"],
            Category::Generic => &[],
        }
    }

    /// Shape size as `(base, span)` in degrees; the drawn size is `base + draw * span`.
    pub fn size_range(self) -> (f64, f64) {
        match self {
            Category::Urban => (0.015, 0.04),
            Category::Crops => (0.02, 0.05),
            Category::Water => (0.03, 0.07),
            Category::Forest => (0.03, 0.08),
            Category::Generic => (0.02, 0.06),
        }
    }

    /// Chaikin passes applied to the outline of a natural body.
    pub fn smoothing_passes(self) -> usize {
        match self {
            Category::Water => 1,
            Category::Forest => 2,
            _ => 0,
        }
    }
}
