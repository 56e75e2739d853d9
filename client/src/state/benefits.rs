//! "Benefits" tab: a viral traffic spike with and without a CDN.
//!
//! DESIGN
//! ======
//! Sixty request particles start on the stage perimeter. Without a CDN they
//! all converge on the origin; with one they split across five edge nodes,
//! except every twentieth request which still reaches the origin. Particle
//! timing attributes come from a seeded generator once per mount, so a given
//! seed always lays out the same spike.
//!
//! Changing scenario hides the particles and re-activates them after a short
//! settle delay, which restarts the CSS transition instead of jumping.

#[cfg(test)]
#[path = "benefits_test.rs"]
mod benefits_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::state::Transition;
use crate::util::geometry::{Point, STAGE_CENTER, polar_point, snap_angle};
use crate::util::scheduler::{Scheduler, Sequencer, TimerId};

pub const PARTICLE_COUNT: usize = 60;
pub const SETTLE_MS: u64 = 100;

pub const START_RADIUS: f64 = 48.0;
pub const EDGE_RADIUS: f64 = 35.0;
pub const EDGE_STEP_DEG: f64 = 72.0;
pub const EDGE_ANGLES: [f64; 5] = [0.0, 72.0, 144.0, 216.0, 288.0];

/// Every n-th particle (by id) bypasses the edge.
pub const ORIGIN_LEAK_EVERY: usize = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrafficScenario {
    #[default]
    NoCdn,
    WithCdn,
}

impl TrafficScenario {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TrafficScenario::NoCdn => "Without CDN",
            TrafficScenario::WithCdn => "With CDN",
        }
    }
}

/// One simulated request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: usize,
    /// Stagger factor in `[0, 2)`.
    pub delay: f64,
    /// Speed factor in `[1, 2)`.
    pub speed: f64,
    pub start_angle: f64,
}

impl Particle {
    #[must_use]
    pub fn start_position(&self) -> Point {
        polar_point(STAGE_CENTER, START_RADIUS, self.start_angle)
    }

    /// Edge heading this particle would be served from with a CDN.
    #[must_use]
    pub fn nearest_edge_angle(&self) -> f64 {
        snap_angle(self.start_angle, EDGE_STEP_DEG)
    }

    #[must_use]
    pub fn reaches_origin(&self, scenario: TrafficScenario) -> bool {
        match scenario {
            TrafficScenario::NoCdn => true,
            TrafficScenario::WithCdn => self.id % ORIGIN_LEAK_EVERY == 0,
        }
    }

    #[must_use]
    pub fn target_position(&self, scenario: TrafficScenario) -> Point {
        if self.reaches_origin(scenario) {
            STAGE_CENTER
        } else {
            polar_point(STAGE_CENTER, EDGE_RADIUS, self.nearest_edge_angle())
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn transition_ms(&self) -> u64 {
        (1_500.0 + self.speed * 500.0).round() as u64
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn transition_delay_ms(&self) -> u64 {
        (self.delay * 500.0).round() as u64
    }
}

/// Perimeter-distributed particles with seeded delay/speed jitter.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_particles(seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..PARTICLE_COUNT)
        .map(|id| Particle {
            id,
            delay: rng.random::<f64>() * 2.0,
            speed: 1.0 + rng.random::<f64>(),
            start_angle: id as f64 / PARTICLE_COUNT as f64 * 360.0,
        })
        .collect()
}

pub fn edge_positions() -> impl Iterator<Item = Point> {
    EDGE_ANGLES.iter().map(|deg| polar_point(STAGE_CENTER, EDGE_RADIUS, *deg))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activate;

#[derive(Clone, Debug)]
pub struct TrafficSim {
    scenario: TrafficScenario,
    active: bool,
    particles: Vec<Particle>,
    settle: Option<TimerId>,
    scheduler: Scheduler<Activate>,
}

impl TrafficSim {
    /// Mount in the no-CDN scenario; particles launch after the settle delay.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut sim = Self {
            scenario: TrafficScenario::NoCdn,
            active: false,
            particles: generate_particles(seed),
            settle: None,
            scheduler: Scheduler::new(),
        };
        sim.restart();
        sim
    }

    #[must_use]
    pub fn scenario(&self) -> TrafficScenario {
        self.scenario
    }

    #[must_use]
    pub fn active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn set_scenario(&mut self, scenario: TrafficScenario) -> Transition {
        if scenario == self.scenario {
            return Transition::Ignored;
        }
        self.scenario = scenario;
        self.restart();
        Transition::Applied
    }

    fn restart(&mut self) {
        if let Some(id) = self.settle.take() {
            self.scheduler.cancel(id);
        }
        self.active = false;
        self.settle = Some(self.scheduler.schedule(SETTLE_MS, Activate));
    }

    /// Where `particle` is drawn right now.
    #[must_use]
    pub fn position(&self, particle: &Particle) -> Point {
        if self.active {
            particle.target_position(self.scenario)
        } else {
            particle.start_position()
        }
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        if self.active { 1.0 } else { 0.0 }
    }

    /// Origin shakes and shows a 503 while the spike hits it directly.
    #[must_use]
    pub fn origin_overloaded(&self) -> bool {
        self.active && self.scenario == TrafficScenario::NoCdn
    }

    #[must_use]
    pub fn origin_load_percent(&self) -> u8 {
        if self.origin_overloaded() { 98 } else { 5 }
    }

    #[must_use]
    pub fn user_experience(&self) -> &'static str {
        match (self.active, self.scenario) {
            (false, _) => "Waiting...",
            (true, TrafficScenario::NoCdn) => "Timeouts & Errors",
            (true, TrafficScenario::WithCdn) => "Fast & Stable",
        }
    }

    #[must_use]
    pub fn edges_visible(&self) -> bool {
        self.scenario == TrafficScenario::WithCdn
    }
}

impl Sequencer for TrafficSim {
    type Event = Activate;

    fn scheduler(&self) -> &Scheduler<Activate> {
        &self.scheduler
    }

    fn scheduler_mut(&mut self) -> &mut Scheduler<Activate> {
        &mut self.scheduler
    }

    fn on_event(&mut self, _event: Activate) {
        self.settle = None;
        self.active = true;
    }
}
