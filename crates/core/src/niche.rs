//! Trending content niche catalog.
//!
//! Static, read-only seed data describing the RPM ranges of popular
//! content categories. Served as-is; nothing in the engine depends on it.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::Serialize;

/// A trending content niche with its typical RPM range.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Niche {
    /// Catalog identifier.
    pub id: i64,
    /// Niche name.
    pub name: &'static str,
    /// Short description shown in listings.
    pub description: &'static str,
    /// Typical low RPM for this niche.
    pub min_rpm: Decimal,
    /// Typical high RPM for this niche.
    pub max_rpm: Decimal,
    /// Market status label.
    pub status: &'static str,
    /// Presentation hint for the status badge.
    pub status_color: &'static str,
    /// Illustration URL.
    pub image_url: &'static str,
    /// Year-over-year growth, presentational.
    pub growth_rate: &'static str,
}

static CATALOG: LazyLock<Vec<Niche>> = LazyLock::new(|| {
    vec![
        Niche {
            id: 1,
            name: "Gaming",
            description: "RPM: $1.5-$3.2",
            min_rpm: Decimal::new(15, 1),
            max_rpm: Decimal::new(32, 1),
            status: "High Growth",
            status_color: "green",
            image_url: "https://images.unsplash.com/photo-1542751371-adc38448a05e?auto=format&fit=crop&w=400&h=250",
            growth_rate: "85%",
        },
        Niche {
            id: 2,
            name: "Tech Reviews",
            description: "RPM: $2.1-$4.0",
            min_rpm: Decimal::new(21, 1),
            max_rpm: Decimal::new(40, 1),
            status: "Premium CPM",
            status_color: "blue",
            image_url: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?auto=format&fit=crop&w=400&h=250",
            growth_rate: "72%",
        },
        Niche {
            id: 3,
            name: "Education",
            description: "RPM: $0.8-$2.5",
            min_rpm: Decimal::new(8, 1),
            max_rpm: Decimal::new(25, 1),
            status: "Stable",
            status_color: "purple",
            image_url: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?auto=format&fit=crop&w=400&h=250",
            growth_rate: "45%",
        },
        Niche {
            id: 4,
            name: "Finance",
            description: "RPM: $3.0-$8.0",
            min_rpm: Decimal::new(30, 1),
            max_rpm: Decimal::new(80, 1),
            status: "High Value",
            status_color: "amber",
            image_url: "https://images.unsplash.com/photo-1559526324-4b87b5e36e44?auto=format&fit=crop&w=400&h=250",
            growth_rate: "94%",
        },
    ]
});

/// Returns the full catalog in declaration order.
#[must_use]
pub fn all() -> &'static [Niche] {
    &CATALOG
}

/// Looks up a niche by id.
#[must_use]
pub fn get(id: i64) -> Option<&'static Niche> {
    CATALOG.iter().find(|n| n.id == id)
}
