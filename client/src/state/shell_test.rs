use super::*;
use crate::state::mechanics::PacketStep;
use crate::state::problem::RequestPhase;

#[test]
fn starts_on_problem() {
    let shell = Shell::default();
    assert_eq!(shell.active(), TabId::Problem);
    assert!(shell.get::<RequestSimulation>().is_some());
    assert_eq!(shell.epoch(), 0);
}

#[test]
fn selecting_each_tab_mounts_only_that_widget() {
    let mut shell = Shell::new(1);
    for tab in TabId::ALL {
        shell.select_tab(tab);
        assert_eq!(shell.active(), tab);
        assert_eq!(shell.widget().tab(), tab);

        let mounted = [
            shell.get::<RequestSimulation>().is_some(),
            shell.get::<CdnToggle>().is_some(),
            shell.get::<RelaySimulation>().is_some(),
            shell.get::<TrafficSim>().is_some(),
            shell.get::<HoverPaths>().is_some(),
            shell.get::<QuizState>().is_some(),
        ];
        assert_eq!(mounted.iter().filter(|m| **m).count(), 1, "tab {tab:?}");
        assert!(mounted[tab as usize], "tab {tab:?}");
    }
}

#[test]
fn reselecting_active_tab_keeps_state() {
    let mut shell = Shell::default();
    if let Some(w) = shell.get_mut::<RequestSimulation>() {
        w.start();
    }
    assert_eq!(shell.select_tab(TabId::Problem), Transition::Ignored);
    assert_eq!(shell.epoch(), 0);
    assert_eq!(
        shell.get::<RequestSimulation>().map(RequestSimulation::phase),
        Some(RequestPhase::Traveling)
    );
}

#[test]
fn leaving_a_tab_discards_its_state_and_timers() {
    let mut shell = Shell::default();
    shell.select_tab(TabId::Mechanics);
    if let Some(w) = shell.get_mut::<RelaySimulation>() {
        w.request_miss();
    }
    shell.advance(5_000);
    assert_eq!(shell.get::<RelaySimulation>().map(RelaySimulation::is_cached), Some(true));

    if let Some(w) = shell.get_mut::<RelaySimulation>() {
        w.request_miss();
    }
    assert!(shell.next_deadline().is_some());

    shell.select_tab(TabId::Solution);
    assert_eq!(shell.next_deadline(), None);
    assert_eq!(shell.advance(10_000), 0);

    shell.select_tab(TabId::Mechanics);
    let relay = shell.get::<RelaySimulation>().expect("mechanics mounted");
    assert!(!relay.is_cached());
    assert_eq!(relay.packet_step(), PacketStep::Idle);
}

#[test]
fn advance_drives_the_mounted_widget() {
    let mut shell = Shell::default();
    if let Some(w) = shell.get_mut::<RequestSimulation>() {
        w.start();
    }
    assert_eq!(shell.until_next_ms(), Some(50));
    shell.advance(4_000);
    assert_eq!(
        shell.get::<RequestSimulation>().map(RequestSimulation::phase),
        Some(RequestPhase::Done)
    );
}

#[test]
fn deadline_changes_identity_across_remounts() {
    let mut shell = Shell::default();
    shell.select_tab(TabId::Benefits);
    let first = shell.next_deadline();
    shell.select_tab(TabId::Quiz);
    shell.select_tab(TabId::Benefits);
    let second = shell.next_deadline();
    assert_eq!(first.map(|(_, due)| due), second.map(|(_, due)| due));
    assert_ne!(first, second);
}

#[test]
fn remounted_benefits_gets_a_new_layout() {
    let mut shell = Shell::new(42);
    shell.select_tab(TabId::Benefits);
    let first = shell.get::<TrafficSim>().map(|s| s.particles().to_vec());
    shell.select_tab(TabId::Types);
    shell.select_tab(TabId::Benefits);
    let second = shell.get::<TrafficSim>().map(|s| s.particles().to_vec());
    assert_ne!(first, second);
}

#[test]
fn timerless_widgets_report_no_deadline() {
    let mut shell = Shell::default();
    shell.select_tab(TabId::Solution);
    assert_eq!(shell.next_deadline(), None);
    shell.select_tab(TabId::Types);
    assert_eq!(shell.until_next_ms(), None);
}
