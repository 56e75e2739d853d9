//! "The Solution" tab: a toggle that reveals edge servers on the world map.

#[cfg(test)]
#[path = "solution_test.rs"]
mod solution_test;

use crate::util::geometry::Point;

/// An edge point of presence drawn on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSite {
    pub name: &'static str,
    pub position: Point,
    /// Nearest site to the user; the low-latency path ends here.
    pub serves_user: bool,
}

pub const ORIGIN_POSITION: Point = Point::new(25.0, 30.0);
pub const USER_POSITION: Point = Point::new(80.0, 75.0);

/// Sites in reveal order.
pub const EDGE_SITES: [EdgeSite; 5] = [
    EdgeSite { name: "London", position: Point::new(48.0, 28.0), serves_user: false },
    EdgeSite { name: "Tokyo", position: Point::new(85.0, 35.0), serves_user: false },
    EdgeSite { name: "Singapore", position: Point::new(75.0, 55.0), serves_user: false },
    EdgeSite { name: "Frankfurt", position: Point::new(52.0, 30.0), serves_user: false },
    EdgeSite { name: "Sydney POP", position: Point::new(85.0, 80.0), serves_user: true },
];

pub const REVEAL_STAGGER_MS: u64 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CdnToggle {
    enabled: bool,
}

impl CdnToggle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn enabled(self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Edge markers currently on the map.
    #[must_use]
    pub fn visible_sites(self) -> &'static [EdgeSite] {
        if self.enabled { &EDGE_SITES[..] } else { &[] }
    }

    /// User-to-edge segment highlighted as the low latency path.
    #[must_use]
    pub fn low_latency_path(self) -> Option<(Point, Point)> {
        if !self.enabled {
            return None;
        }
        EDGE_SITES
            .iter()
            .find(|site| site.serves_user)
            .map(|site| (USER_POSITION, site.position))
    }
}

/// Cosmetic zoom-in delay for the site at `index` in reveal order.
pub fn reveal_delay_ms(index: usize) -> u64 {
    REVEAL_STAGGER_MS * (index as u64 + 1)
}
