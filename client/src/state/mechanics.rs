//! "How It Works" tab: a packet relayed through an edge cache.
//!
//! DESIGN
//! ======
//! A run is a `RelayScript`: an ordered list of hops, each held for a fixed
//! time before the next one is armed. A miss visits the origin and fills the
//! cache on the way back; a hit turns around at the edge. The reported round
//! trip is a fixed teaching number, not a measurement of the hop times.

#[cfg(test)]
#[path = "mechanics_test.rs"]
mod mechanics_test;

use crate::state::Transition;
use crate::util::scheduler::{Scheduler, Sequencer};

/// Where the packet is. `Idle` means no run is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PacketStep {
    #[default]
    Idle,
    UserToEdge,
    EdgeToOrigin,
    OriginToEdge,
    EdgeToUser,
}

impl PacketStep {
    /// Numeric step as shown in the diagram legend (0 = idle).
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            PacketStep::Idle => 0,
            PacketStep::UserToEdge => 1,
            PacketStep::EdgeToOrigin => 2,
            PacketStep::OriginToEdge => 3,
            PacketStep::EdgeToUser => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheStatus {
    #[default]
    Idle,
    Miss,
    Hit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hop {
    pub step: PacketStep,
    pub hold_ms: u64,
    /// Entering this hop stores the object at the edge.
    pub fills_cache: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelayScript {
    pub status: CacheStatus,
    pub hops: &'static [Hop],
    pub round_trip_ms: u64,
}

pub const MISS_SCRIPT: RelayScript = RelayScript {
    status: CacheStatus::Miss,
    hops: &[
        Hop { step: PacketStep::UserToEdge, hold_ms: 1_000, fills_cache: false },
        Hop { step: PacketStep::EdgeToOrigin, hold_ms: 1_500, fills_cache: false },
        Hop { step: PacketStep::OriginToEdge, hold_ms: 1_500, fills_cache: false },
        Hop { step: PacketStep::EdgeToUser, hold_ms: 1_000, fills_cache: true },
    ],
    round_trip_ms: 250,
};

pub const HIT_SCRIPT: RelayScript = RelayScript {
    status: CacheStatus::Hit,
    hops: &[
        Hop { step: PacketStep::UserToEdge, hold_ms: 500, fills_cache: false },
        Hop { step: PacketStep::EdgeToUser, hold_ms: 500, fills_cache: false },
    ],
    round_trip_ms: 20,
};

/// Round trips below this were served from the edge.
pub const CACHE_SERVED_THRESHOLD_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("Populate the cache with a 'Miss' request first!")]
    CacheEmpty,
}

/// Badge floated over the edge server while a packet is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheBadge {
    Miss,
    Hit,
}

impl CacheBadge {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CacheBadge::Miss => "MISS",
            CacheBadge::Hit => "HIT",
        }
    }
}

/// Fired when the current hop's hold time is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HopElapsed;

#[derive(Clone, Debug, Default)]
pub struct RelaySimulation {
    cache_status: CacheStatus,
    packet_step: PacketStep,
    is_cached: bool,
    last_round_trip_ms: Option<u64>,
    run: Option<(RelayScript, usize)>,
    scheduler: Scheduler<HopElapsed>,
}

impl RelaySimulation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cache_status(&self) -> CacheStatus {
        self.cache_status
    }

    #[must_use]
    pub fn packet_step(&self) -> PacketStep {
        self.packet_step
    }

    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.is_cached
    }

    #[must_use]
    pub fn last_round_trip_ms(&self) -> Option<u64> {
        self.last_round_trip_ms
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.packet_step != PacketStep::Idle
    }

    /// First request: travels to the origin and fills the edge cache.
    pub fn request_miss(&mut self) -> Transition {
        if self.is_busy() {
            return Transition::Ignored;
        }
        self.is_cached = false;
        self.begin(MISS_SCRIPT)
    }

    /// Repeat request: served by the edge. Refused until a miss has filled it.
    pub fn request_hit(&mut self) -> Result<Transition, RelayError> {
        if self.is_busy() {
            return Ok(Transition::Ignored);
        }
        if !self.is_cached {
            leptos::logging::warn!("cache hit requested before the edge holds a copy");
            return Err(RelayError::CacheEmpty);
        }
        Ok(self.begin(HIT_SCRIPT))
    }

    fn begin(&mut self, script: RelayScript) -> Transition {
        self.cache_status = script.status;
        self.last_round_trip_ms = None;
        self.enter(script, 0);
        Transition::Applied
    }

    fn enter(&mut self, script: RelayScript, index: usize) {
        let Some(hop) = script.hops.get(index) else {
            self.packet_step = PacketStep::Idle;
            self.last_round_trip_ms = Some(script.round_trip_ms);
            self.run = None;
            return;
        };
        self.packet_step = hop.step;
        if hop.fills_cache {
            self.is_cached = true;
        }
        self.run = Some((script, index));
        self.scheduler.schedule(hop.hold_ms, HopElapsed);
    }

    /// How long the packet spends on the current hop; drives the CSS animation.
    #[must_use]
    pub fn current_hold_ms(&self) -> Option<u64> {
        let (script, index) = self.run?;
        script.hops.get(index).map(|hop| hop.hold_ms)
    }

    #[must_use]
    pub fn badge(&self) -> Option<CacheBadge> {
        if !self.is_busy() {
            return None;
        }
        if self.cache_status == CacheStatus::Miss && !self.is_cached {
            Some(CacheBadge::Miss)
        } else {
            Some(CacheBadge::Hit)
        }
    }

    /// Edge node pulses while the packet is on the user side of the diagram.
    #[must_use]
    pub fn edge_active(&self) -> bool {
        matches!(self.packet_step, PacketStep::UserToEdge | PacketStep::EdgeToUser)
    }

    /// Origin node pulses while the edge is fetching from it.
    #[must_use]
    pub fn origin_active(&self) -> bool {
        matches!(self.packet_step, PacketStep::EdgeToOrigin | PacketStep::OriginToEdge)
    }

    /// "Total Time" caption, shown once a run has finished.
    #[must_use]
    pub fn result_caption(&self) -> Option<&'static str> {
        if self.is_busy() {
            return None;
        }
        self.last_round_trip_ms.map(|ms| {
            if ms < CACHE_SERVED_THRESHOLD_MS {
                "(Served from Cache)"
            } else {
                "(Fetched from Origin)"
            }
        })
    }
}

impl Sequencer for RelaySimulation {
    type Event = HopElapsed;

    fn scheduler(&self) -> &Scheduler<HopElapsed> {
        &self.scheduler
    }

    fn scheduler_mut(&mut self) -> &mut Scheduler<HopElapsed> {
        &mut self.scheduler
    }

    fn on_event(&mut self, _event: HopElapsed) {
        if let Some((script, index)) = self.run {
            self.enter(script, index + 1);
        }
    }
}
