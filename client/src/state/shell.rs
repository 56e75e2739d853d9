//! Navigation shell: the active tab and the one widget mounted for it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Widgets own their state and scheduler outright. Switching tabs drops the
//! previous widget, which discards its state and every timer it had armed;
//! returning to a tab mounts a fresh one. The browser timer driver only ever
//! talks to the shell, never to a widget directly.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use crate::state::Transition;
use crate::state::benefits::TrafficSim;
use crate::state::content_types::HoverPaths;
use crate::state::mechanics::RelaySimulation;
use crate::state::nav::TabId;
use crate::state::problem::RequestSimulation;
use crate::state::quiz::QuizState;
use crate::state::solution::CdnToggle;
use crate::util::scheduler::Sequencer;

/// The mounted tab widget and its private state.
#[derive(Clone, Debug)]
pub enum TabWidget {
    Problem(RequestSimulation),
    Solution(CdnToggle),
    Mechanics(RelaySimulation),
    Benefits(TrafficSim),
    Types(HoverPaths),
    Quiz(QuizState),
}

impl TabWidget {
    /// Fresh widget for `tab`. `seed` feeds any randomized layout.
    #[must_use]
    pub fn mount(tab: TabId, seed: u64) -> Self {
        match tab {
            TabId::Problem => TabWidget::Problem(RequestSimulation::new()),
            TabId::Solution => TabWidget::Solution(CdnToggle::new()),
            TabId::Mechanics => TabWidget::Mechanics(RelaySimulation::new()),
            TabId::Benefits => TabWidget::Benefits(TrafficSim::new(seed)),
            TabId::Types => TabWidget::Types(HoverPaths::new()),
            TabId::Quiz => TabWidget::Quiz(QuizState::new()),
        }
    }

    #[must_use]
    pub fn tab(&self) -> TabId {
        match self {
            TabWidget::Problem(_) => TabId::Problem,
            TabWidget::Solution(_) => TabId::Solution,
            TabWidget::Mechanics(_) => TabId::Mechanics,
            TabWidget::Benefits(_) => TabId::Benefits,
            TabWidget::Types(_) => TabId::Types,
            TabWidget::Quiz(_) => TabId::Quiz,
        }
    }

    /// Solution and Types have no timers.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        match self {
            TabWidget::Problem(w) => w.scheduler().next_due_ms(),
            TabWidget::Mechanics(w) => w.scheduler().next_due_ms(),
            TabWidget::Benefits(w) => w.scheduler().next_due_ms(),
            TabWidget::Quiz(w) => w.scheduler().next_due_ms(),
            TabWidget::Solution(_) | TabWidget::Types(_) => None,
        }
    }

    #[must_use]
    pub fn until_next_ms(&self) -> Option<u64> {
        match self {
            TabWidget::Problem(w) => w.scheduler().until_next_ms(),
            TabWidget::Mechanics(w) => w.scheduler().until_next_ms(),
            TabWidget::Benefits(w) => w.scheduler().until_next_ms(),
            TabWidget::Quiz(w) => w.scheduler().until_next_ms(),
            TabWidget::Solution(_) | TabWidget::Types(_) => None,
        }
    }

    pub fn advance(&mut self, ms: u64) -> usize {
        match self {
            TabWidget::Problem(w) => w.advance(ms),
            TabWidget::Mechanics(w) => w.advance(ms),
            TabWidget::Benefits(w) => w.advance(ms),
            TabWidget::Quiz(w) => w.advance(ms),
            TabWidget::Solution(_) | TabWidget::Types(_) => 0,
        }
    }
}

/// Typed access to one variant of `TabWidget`.
pub trait Widget: Sized {
    fn from_slot(slot: &TabWidget) -> Option<&Self>;

    fn from_slot_mut(slot: &mut TabWidget) -> Option<&mut Self>;
}

macro_rules! widget_slot {
    ($ty:ty, $variant:ident) => {
        impl Widget for $ty {
            fn from_slot(slot: &TabWidget) -> Option<&Self> {
                match slot {
                    TabWidget::$variant(w) => Some(w),
                    _ => None,
                }
            }

            fn from_slot_mut(slot: &mut TabWidget) -> Option<&mut Self> {
                match slot {
                    TabWidget::$variant(w) => Some(w),
                    _ => None,
                }
            }
        }
    };
}

widget_slot!(RequestSimulation, Problem);
widget_slot!(CdnToggle, Solution);
widget_slot!(RelaySimulation, Mechanics);
widget_slot!(TrafficSim, Benefits);
widget_slot!(HoverPaths, Types);
widget_slot!(QuizState, Quiz);

#[derive(Clone, Debug)]
pub struct Shell {
    widget: TabWidget,
    epoch: u64,
    seed: u64,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Shell {
    /// Start on the Problem tab. `seed` is the base for randomized layouts;
    /// each remount derives its own seed from it.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let active = TabId::default();
        Self { widget: TabWidget::mount(active, seed), epoch: 0, seed }
    }

    #[must_use]
    pub fn active(&self) -> TabId {
        self.widget.tab()
    }

    #[must_use]
    pub fn widget(&self) -> &TabWidget {
        &self.widget
    }

    /// Increments on every remount.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Show `tab`. Re-selecting the active tab keeps its widget as is.
    pub fn select_tab(&mut self, tab: TabId) -> Transition {
        if tab == self.active() {
            return Transition::Ignored;
        }
        self.epoch += 1;
        self.widget = TabWidget::mount(tab, self.seed.wrapping_add(self.epoch));
        leptos::logging::log!("tab: {} (mount #{})", tab.slug(), self.epoch);
        Transition::Applied
    }

    #[must_use]
    pub fn get<W: Widget>(&self) -> Option<&W> {
        W::from_slot(&self.widget)
    }

    pub fn get_mut<W: Widget>(&mut self) -> Option<&mut W> {
        W::from_slot_mut(&mut self.widget)
    }

    /// Identifies the next timer the driver has to wait for: which mount it
    /// belongs to and its absolute due time on that mount's clock.
    #[must_use]
    pub fn next_deadline(&self) -> Option<(u64, u64)> {
        self.widget.next_due_ms().map(|due| (self.epoch, due))
    }

    #[must_use]
    pub fn until_next_ms(&self) -> Option<u64> {
        self.widget.until_next_ms()
    }

    pub fn advance(&mut self, ms: u64) -> usize {
        self.widget.advance(ms)
    }
}
