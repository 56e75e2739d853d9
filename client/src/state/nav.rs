//! Tab registry for the navigation sidebar.
//!
//! The list is closed and built at compile time; every `TabId` has exactly one
//! descriptor and the sidebar renders them in `TABS` order.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One tutorial chapter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TabId {
    #[default]
    Problem,
    Solution,
    Mechanics,
    Benefits,
    Types,
    Quiz,
}

impl TabId {
    pub const ALL: [TabId; 6] = [
        TabId::Problem,
        TabId::Solution,
        TabId::Mechanics,
        TabId::Benefits,
        TabId::Types,
        TabId::Quiz,
    ];

    /// Stable identifier used for DOM ids and test hooks.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            TabId::Problem => "problem",
            TabId::Solution => "solution",
            TabId::Mechanics => "mechanics",
            TabId::Benefits => "benefits",
            TabId::Types => "types",
            TabId::Quiz => "quiz",
        }
    }

    #[must_use]
    pub fn descriptor(self) -> &'static TabDescriptor {
        // TABS is declared in ALL order.
        &TABS[self as usize]
    }
}

/// Sidebar glyph for a tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Globe,
    Network,
    Database,
    Shield,
    File,
    Zap,
}

impl Icon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Globe => "\u{1F310}",
            Icon::Network => "\u{1F5A7}",
            Icon::Database => "\u{1F5C4}",
            Icon::Shield => "\u{1F6E1}",
            Icon::File => "\u{1F4C4}",
            Icon::Zap => "\u{26A1}",
        }
    }
}

/// Static sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabDescriptor {
    pub id: TabId,
    pub label: &'static str,
    pub icon: Icon,
}

pub const TABS: [TabDescriptor; 6] = [
    TabDescriptor { id: TabId::Problem, label: "The Problem: Latency", icon: Icon::Globe },
    TabDescriptor { id: TabId::Solution, label: "The Solution: Edge", icon: Icon::Network },
    TabDescriptor { id: TabId::Mechanics, label: "How It Works", icon: Icon::Database },
    TabDescriptor { id: TabId::Benefits, label: "Benefits: Load", icon: Icon::Shield },
    TabDescriptor { id: TabId::Types, label: "Content Types", icon: Icon::File },
    TabDescriptor { id: TabId::Quiz, label: "Quiz", icon: Icon::Zap },
];
