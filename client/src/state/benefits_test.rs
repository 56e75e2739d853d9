use super::*;
use crate::util::geometry::angular_delta_deg;

const SEED: u64 = 7;

fn active(scenario: TrafficScenario) -> TrafficSim {
    let mut sim = TrafficSim::new(SEED);
    sim.set_scenario(scenario);
    sim.advance(SETTLE_MS);
    assert!(sim.active());
    sim
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

// =============================================================
// Particle generation
// =============================================================

#[test]
fn generates_sixty_particles_with_bounded_jitter() {
    let particles = generate_particles(SEED);
    assert_eq!(particles.len(), PARTICLE_COUNT);
    for (i, p) in particles.iter().enumerate() {
        assert_eq!(p.id, i);
        assert!((0.0..2.0).contains(&p.delay), "delay {}", p.delay);
        assert!((1.0..2.0).contains(&p.speed), "speed {}", p.speed);
        assert!((p.start_angle - i as f64 * 6.0).abs() < 1e-9);
    }
}

#[test]
fn same_seed_same_layout() {
    assert_eq!(generate_particles(SEED), generate_particles(SEED));
    assert_ne!(generate_particles(SEED), generate_particles(SEED + 1));
}

#[test]
fn particles_survive_scenario_changes() {
    let mut sim = TrafficSim::new(SEED);
    let before = sim.particles().to_vec();
    sim.set_scenario(TrafficScenario::WithCdn);
    sim.advance(SETTLE_MS);
    sim.set_scenario(TrafficScenario::NoCdn);
    assert_eq!(sim.particles(), before.as_slice());
}

#[test]
fn transition_timing_derives_from_attributes() {
    let p = Particle { id: 3, delay: 1.5, speed: 1.2, start_angle: 18.0 };
    assert_eq!(p.transition_ms(), 2_100);
    assert_eq!(p.transition_delay_ms(), 750);
}

// =============================================================
// Activation
// =============================================================

#[test]
fn mount_activates_after_settle() {
    let mut sim = TrafficSim::new(SEED);
    assert_eq!(sim.scenario(), TrafficScenario::NoCdn);
    assert!(!sim.active());
    assert_eq!(sim.user_experience(), "Waiting...");
    sim.advance(SETTLE_MS - 1);
    assert!(!sim.active());
    sim.advance(1);
    assert!(sim.active());
}

#[test]
fn scenario_change_restarts_activation() {
    let mut sim = active(TrafficScenario::NoCdn);
    assert_eq!(sim.set_scenario(TrafficScenario::WithCdn), Transition::Applied);
    assert!(!sim.active());
    assert_eq!(sim.opacity(), 0.0);
    sim.advance(SETTLE_MS);
    assert!(sim.active());
    assert_eq!(sim.opacity(), 1.0);
}

#[test]
fn same_scenario_is_ignored() {
    let mut sim = active(TrafficScenario::NoCdn);
    assert_eq!(sim.set_scenario(TrafficScenario::NoCdn), Transition::Ignored);
    assert!(sim.active());
    assert!(sim.scheduler().is_idle());
}

#[test]
fn rapid_switching_keeps_one_pending_activation() {
    let mut sim = TrafficSim::new(SEED);
    sim.advance(50);
    sim.set_scenario(TrafficScenario::WithCdn);
    sim.advance(50);
    assert!(!sim.active());
    sim.set_scenario(TrafficScenario::NoCdn);
    assert_eq!(sim.scheduler().pending_len(), 1);
    sim.advance(99);
    assert!(!sim.active());
    sim.advance(1);
    assert!(sim.active());
}

// =============================================================
// Targets
// =============================================================

#[test]
fn no_cdn_sends_everything_to_origin() {
    let sim = active(TrafficScenario::NoCdn);
    for p in sim.particles() {
        assert!(close(sim.position(p), STAGE_CENTER), "particle {}", p.id);
    }
    assert!(sim.origin_overloaded());
    assert_eq!(sim.origin_load_percent(), 98);
    assert_eq!(sim.user_experience(), "Timeouts & Errors");
    assert!(!sim.edges_visible());
}

#[test]
fn with_cdn_spreads_to_nearest_edge() {
    let sim = active(TrafficScenario::WithCdn);
    for p in sim.particles() {
        let target = sim.position(p);
        if p.id % 20 == 0 {
            assert!(close(target, STAGE_CENTER), "particle {} should leak", p.id);
            continue;
        }
        let edge = p.nearest_edge_angle();
        assert!(EDGE_ANGLES.contains(&edge), "particle {} snapped to {edge}", p.id);
        let best = EDGE_ANGLES
            .iter()
            .map(|a| angular_delta_deg(*a, p.start_angle))
            .fold(f64::INFINITY, f64::min);
        assert!((angular_delta_deg(edge, p.start_angle) - best).abs() < 1e-9, "particle {}", p.id);
        assert!(close(target, polar_point(STAGE_CENTER, EDGE_RADIUS, edge)));
    }
    assert!(!sim.origin_overloaded());
    assert_eq!(sim.origin_load_percent(), 5);
    assert_eq!(sim.user_experience(), "Fast & Stable");
    assert!(sim.edges_visible());
}

#[test]
fn with_cdn_leaks_three_requests_to_origin() {
    let sim = active(TrafficScenario::WithCdn);
    let leaked: Vec<_> = sim
        .particles()
        .iter()
        .filter(|p| p.reaches_origin(TrafficScenario::WithCdn))
        .map(|p| p.id)
        .collect();
    assert_eq!(leaked, vec![0, 20, 40]);
}

#[test]
fn last_sector_wraps_to_zero_degrees() {
    let p = Particle { id: 59, delay: 0.0, speed: 1.0, start_angle: 354.0 };
    assert_eq!(p.nearest_edge_angle(), 0.0);
}

#[test]
fn inactive_particles_sit_on_perimeter() {
    let sim = TrafficSim::new(SEED);
    let p = sim.particles()[15];
    assert!(close(sim.position(&p), Point::new(50.0, 98.0)));
}

#[test]
fn five_edge_positions() {
    assert_eq!(edge_positions().count(), 5);
    assert_eq!(TrafficScenario::WithCdn.label(), "With CDN");
}
