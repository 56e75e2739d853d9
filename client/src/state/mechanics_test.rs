use super::*;

fn primed() -> RelaySimulation {
    let mut sim = RelaySimulation::new();
    sim.request_miss();
    sim.advance(5_000);
    sim
}

// =============================================================
// Miss run
// =============================================================

#[test]
fn new_simulation_is_idle_and_cold() {
    let sim = RelaySimulation::new();
    assert_eq!(sim.packet_step(), PacketStep::Idle);
    assert_eq!(sim.cache_status(), CacheStatus::Idle);
    assert!(!sim.is_cached());
    assert_eq!(sim.last_round_trip_ms(), None);
    assert_eq!(sim.badge(), None);
}

#[test]
fn miss_walks_every_hop_on_schedule() {
    let mut sim = RelaySimulation::new();
    assert_eq!(sim.request_miss(), Transition::Applied);
    assert_eq!(sim.cache_status(), CacheStatus::Miss);
    assert_eq!(sim.packet_step(), PacketStep::UserToEdge);

    sim.advance(999);
    assert_eq!(sim.packet_step(), PacketStep::UserToEdge);
    sim.advance(1);
    assert_eq!(sim.packet_step(), PacketStep::EdgeToOrigin);
    sim.advance(1_500);
    assert_eq!(sim.packet_step(), PacketStep::OriginToEdge);
    assert!(!sim.is_cached());
    sim.advance(1_500);
    assert_eq!(sim.packet_step(), PacketStep::EdgeToUser);
    assert!(sim.is_cached());
    assert_eq!(sim.last_round_trip_ms(), None);
    sim.advance(1_000);
    assert_eq!(sim.packet_step(), PacketStep::Idle);
    assert_eq!(sim.last_round_trip_ms(), Some(250));
    assert!(sim.scheduler().is_idle());
}

#[test]
fn miss_completes_after_five_seconds() {
    let mut sim = RelaySimulation::new();
    sim.request_miss();
    sim.advance(4_999);
    assert!(sim.is_busy());
    sim.advance(1);
    assert_eq!(sim.packet_step(), PacketStep::Idle);
    assert!(sim.is_cached());
    assert_eq!(sim.last_round_trip_ms(), Some(250));
    assert_eq!(sim.result_caption(), Some("(Fetched from Origin)"));
}

#[test]
fn miss_while_busy_is_ignored() {
    let mut sim = RelaySimulation::new();
    sim.request_miss();
    sim.advance(1_200);
    let step = sim.packet_step();
    let pending = sim.scheduler().pending_len();

    assert_eq!(sim.request_miss(), Transition::Ignored);
    assert_eq!(sim.packet_step(), step);
    assert_eq!(sim.scheduler().pending_len(), pending);
}

#[test]
fn miss_after_hit_empties_cache_again() {
    let mut sim = primed();
    sim.request_miss();
    assert!(!sim.is_cached());
    assert_eq!(sim.badge(), Some(CacheBadge::Miss));
}

// =============================================================
// Hit run
// =============================================================

#[test]
fn hit_on_cold_cache_is_refused_without_transition() {
    let mut sim = RelaySimulation::new();
    assert_eq!(sim.request_hit(), Err(RelayError::CacheEmpty));
    assert_eq!(sim.packet_step(), PacketStep::Idle);
    assert_eq!(sim.cache_status(), CacheStatus::Idle);
    assert!(sim.scheduler().is_idle());
}

#[test]
fn cache_empty_message_tells_user_what_to_do() {
    assert_eq!(RelayError::CacheEmpty.to_string(), "Populate the cache with a 'Miss' request first!");
}

#[test]
fn hit_skips_the_origin() {
    let mut sim = primed();
    assert_eq!(sim.request_hit(), Ok(Transition::Applied));
    assert_eq!(sim.cache_status(), CacheStatus::Hit);
    assert_eq!(sim.packet_step(), PacketStep::UserToEdge);
    assert_eq!(sim.last_round_trip_ms(), None);

    sim.advance(500);
    assert_eq!(sim.packet_step(), PacketStep::EdgeToUser);
    assert!(!sim.origin_active());
    sim.advance(500);
    assert_eq!(sim.packet_step(), PacketStep::Idle);
    assert_eq!(sim.last_round_trip_ms(), Some(20));
    assert_eq!(sim.result_caption(), Some("(Served from Cache)"));
}

#[test]
fn hit_keeps_cache_warm() {
    let mut sim = primed();
    sim.request_hit().expect("cache is warm");
    sim.advance(1_000);
    assert!(sim.is_cached());
    assert_eq!(sim.request_hit(), Ok(Transition::Applied));
}

#[test]
fn hit_while_busy_is_ignored_even_when_cold() {
    let mut sim = RelaySimulation::new();
    sim.request_miss();
    assert_eq!(sim.request_hit(), Ok(Transition::Ignored));
    assert_eq!(sim.cache_status(), CacheStatus::Miss);
}

// =============================================================
// Presentation helpers
// =============================================================

#[test]
fn badge_flips_to_hit_once_cache_fills_mid_miss() {
    let mut sim = RelaySimulation::new();
    sim.request_miss();
    assert_eq!(sim.badge(), Some(CacheBadge::Miss));
    sim.advance(4_000);
    assert_eq!(sim.packet_step(), PacketStep::EdgeToUser);
    assert_eq!(sim.badge(), Some(CacheBadge::Hit));
    assert_eq!(CacheBadge::Hit.label(), "HIT");
}

#[test]
fn node_highlights_follow_the_packet() {
    let mut sim = RelaySimulation::new();
    sim.request_miss();
    assert!(sim.edge_active() && !sim.origin_active());
    sim.advance(1_000);
    assert!(sim.origin_active() && !sim.edge_active());
}

#[test]
fn hold_time_tracks_the_script() {
    let mut sim = RelaySimulation::new();
    assert_eq!(sim.current_hold_ms(), None);
    sim.request_miss();
    assert_eq!(sim.current_hold_ms(), Some(1_000));
    sim.advance(1_000);
    assert_eq!(sim.current_hold_ms(), Some(1_500));
    sim.advance(4_000);
    assert_eq!(sim.current_hold_ms(), None);

    sim.request_hit().expect("cache is warm");
    assert_eq!(sim.current_hold_ms(), Some(500));
}

#[test]
fn caption_hidden_while_running() {
    let mut sim = primed();
    sim.request_hit().expect("cache is warm");
    assert_eq!(sim.result_caption(), None);
}

#[test]
fn step_indices_match_legend() {
    let steps = [
        PacketStep::Idle,
        PacketStep::UserToEdge,
        PacketStep::EdgeToOrigin,
        PacketStep::OriginToEdge,
        PacketStep::EdgeToUser,
    ];
    let indices: Vec<_> = steps.iter().map(|s| s.index()).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
}

#[test]
fn scripts_hold_for_their_documented_totals() {
    let total = |script: &RelayScript| script.hops.iter().map(|h| h.hold_ms).sum::<u64>();
    assert_eq!(total(&MISS_SCRIPT), 5_000);
    assert_eq!(total(&HIT_SCRIPT), 1_000);
}
