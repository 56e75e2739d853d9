//! "The Problem" tab: one long-haul request from the origin to a distant user.
//!
//! The elapsed read-out is illustrative: it counts 10 ms per 50 ms tick, so
//! the arrival shows well under the 4 s the packet takes on screen.

#[cfg(test)]
#[path = "problem_test.rs"]
mod problem_test;

use crate::state::Transition;
use crate::util::scheduler::{Scheduler, Sequencer, TimerId};

pub const TRAVEL_MS: u64 = 4_000;
pub const TICK_MS: u64 = 50;
pub const TICK_STEP_MS: u64 = 10;

pub const ORIGIN_LABEL: &str = "Origin (NY)";
pub const USER_LABEL: &str = "User (AUS)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestPhase {
    #[default]
    Idle,
    Traveling,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProblemEvent {
    Tick,
    Arrive,
}

#[derive(Clone, Debug, Default)]
pub struct RequestSimulation {
    phase: RequestPhase,
    elapsed_ms: u64,
    tick: Option<TimerId>,
    scheduler: Scheduler<ProblemEvent>,
}

impl RequestSimulation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Send the request. Only accepted while idle.
    pub fn start(&mut self) -> Transition {
        if self.phase != RequestPhase::Idle {
            return Transition::Ignored;
        }
        self.phase = RequestPhase::Traveling;
        self.elapsed_ms = 0;
        self.scheduler.schedule(TRAVEL_MS, ProblemEvent::Arrive);
        self.tick = Some(self.scheduler.schedule(TICK_MS, ProblemEvent::Tick));
        Transition::Applied
    }

    /// Return to idle after the request has landed.
    pub fn reset(&mut self) -> Transition {
        if self.phase != RequestPhase::Done {
            return Transition::Ignored;
        }
        self.phase = RequestPhase::Idle;
        self.elapsed_ms = 0;
        Transition::Applied
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        match self.phase {
            RequestPhase::Idle => "Request File from Origin",
            RequestPhase::Traveling | RequestPhase::Done => "Requesting...",
        }
    }

    /// Packet sits at the user once it has left the origin.
    #[must_use]
    pub fn packet_departed(&self) -> bool {
        self.phase != RequestPhase::Idle
    }
}

impl Sequencer for RequestSimulation {
    type Event = ProblemEvent;

    fn scheduler(&self) -> &Scheduler<ProblemEvent> {
        &self.scheduler
    }

    fn scheduler_mut(&mut self) -> &mut Scheduler<ProblemEvent> {
        &mut self.scheduler
    }

    fn on_event(&mut self, event: ProblemEvent) {
        match event {
            ProblemEvent::Tick => {
                if self.phase != RequestPhase::Traveling {
                    self.tick = None;
                    return;
                }
                self.elapsed_ms += TICK_STEP_MS;
                self.tick = Some(self.scheduler.schedule(TICK_MS, ProblemEvent::Tick));
            }
            ProblemEvent::Arrive => {
                if self.phase != RequestPhase::Traveling {
                    return;
                }
                self.phase = RequestPhase::Done;
                if let Some(id) = self.tick.take() {
                    self.scheduler.cancel(id);
                }
            }
        }
    }
}
