use super::*;

#[test]
fn new_simulation_is_idle() {
    let sim = RequestSimulation::new();
    assert_eq!(sim.phase(), RequestPhase::Idle);
    assert_eq!(sim.elapsed_ms(), 0);
    assert!(sim.scheduler().is_idle());
    assert_eq!(sim.button_label(), "Request File from Origin");
}

#[test]
fn start_from_idle_travels() {
    let mut sim = RequestSimulation::new();
    assert_eq!(sim.start(), Transition::Applied);
    assert_eq!(sim.phase(), RequestPhase::Traveling);
    assert!(sim.packet_departed());
    assert_eq!(sim.button_label(), "Requesting...");
}

#[test]
fn start_while_traveling_is_ignored() {
    let mut sim = RequestSimulation::new();
    sim.start();
    sim.advance(1_000);
    let elapsed = sim.elapsed_ms();
    let pending = sim.scheduler().pending_len();

    assert_eq!(sim.start(), Transition::Ignored);
    assert_eq!(sim.phase(), RequestPhase::Traveling);
    assert_eq!(sim.elapsed_ms(), elapsed);
    assert_eq!(sim.scheduler().pending_len(), pending);
}

#[test]
fn elapsed_counts_ten_per_tick() {
    let mut sim = RequestSimulation::new();
    sim.start();
    sim.advance(49);
    assert_eq!(sim.elapsed_ms(), 0);
    sim.advance(1);
    assert_eq!(sim.elapsed_ms(), 10);
    sim.advance(450);
    assert_eq!(sim.elapsed_ms(), 100);
}

#[test]
fn arrives_after_travel_time() {
    let mut sim = RequestSimulation::new();
    sim.start();
    sim.advance(TRAVEL_MS - 1);
    assert_eq!(sim.phase(), RequestPhase::Traveling);
    sim.advance(1);
    assert_eq!(sim.phase(), RequestPhase::Done);
    // Arrival outranks the tick armed for the same instant.
    assert_eq!(sim.elapsed_ms(), 790);
}

#[test]
fn arrival_stops_the_tick_and_fires_once() {
    let mut sim = RequestSimulation::new();
    sim.start();
    sim.advance(TRAVEL_MS);
    assert!(sim.scheduler().is_idle());

    let elapsed = sim.elapsed_ms();
    assert_eq!(sim.advance(10_000), 0);
    assert_eq!(sim.phase(), RequestPhase::Done);
    assert_eq!(sim.elapsed_ms(), elapsed);
}

#[test]
fn start_from_done_is_ignored() {
    let mut sim = RequestSimulation::new();
    sim.start();
    sim.advance(TRAVEL_MS);
    assert_eq!(sim.start(), Transition::Ignored);
    assert_eq!(sim.phase(), RequestPhase::Done);
}

#[test]
fn reset_from_done_returns_to_idle() {
    let mut sim = RequestSimulation::new();
    sim.start();
    sim.advance(TRAVEL_MS);
    assert_eq!(sim.reset(), Transition::Applied);
    assert_eq!(sim.phase(), RequestPhase::Idle);
    assert_eq!(sim.elapsed_ms(), 0);
    assert!(!sim.packet_departed());
}

#[test]
fn reset_outside_done_is_ignored() {
    let mut sim = RequestSimulation::new();
    assert_eq!(sim.reset(), Transition::Ignored);
    sim.start();
    assert_eq!(sim.reset(), Transition::Ignored);
    assert_eq!(sim.phase(), RequestPhase::Traveling);
}

#[test]
fn second_run_restarts_elapsed() {
    let mut sim = RequestSimulation::new();
    sim.start();
    sim.advance(TRAVEL_MS);
    sim.reset();
    sim.start();
    sim.advance(100);
    assert_eq!(sim.elapsed_ms(), 20);
}
