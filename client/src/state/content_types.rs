//! "Content Types" tab: hover a route to see how static and dynamic requests
//! travel differently.

#[cfg(test)]
#[path = "content_types_test.rs"]
mod content_types_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentPath {
    Static,
    Dynamic,
}

impl ContentPath {
    pub const ALL: [ContentPath; 2] = [ContentPath::Static, ContentPath::Dynamic];

    #[must_use]
    pub fn hover_label(self) -> &'static str {
        match self {
            ContentPath::Static => "Static Path (images, css)",
            ContentPath::Dynamic => "Dynamic Path (API, User Data)",
        }
    }

    /// Nodes the request passes through after leaving the user.
    #[must_use]
    pub fn route(self) -> &'static [&'static str] {
        match self {
            ContentPath::Static => &["Edge Cache"],
            ContentPath::Dynamic => &["Edge Router", "Origin"],
        }
    }

    /// Whether the response can come straight from the edge.
    #[must_use]
    pub fn cacheable(self) -> bool {
        self == ContentPath::Static
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverPaths {
    hovered: Option<ContentPath>,
}

impl HoverPaths {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hovered(self) -> Option<ContentPath> {
        self.hovered
    }

    pub fn enter(&mut self, path: ContentPath) {
        self.hovered = Some(path);
    }

    /// Pointer left a hover zone; clears whichever path was highlighted.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    #[must_use]
    pub fn is_highlighted(self, path: ContentPath) -> bool {
        self.hovered == Some(path)
    }

    /// Lock badge on the edge cache while static content is served from it.
    #[must_use]
    pub fn edge_cache_locked(self) -> bool {
        self.is_highlighted(ContentPath::Static)
    }

    /// "Optimized Route" hint under the edge router.
    #[must_use]
    pub fn route_optimized(self) -> bool {
        self.is_highlighted(ContentPath::Dynamic)
    }
}
