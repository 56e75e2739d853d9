//! "How It Works" tab: user, edge and origin in a row, with a packet relayed
//! between them for the miss and hit runs.

use leptos::prelude::*;

use crate::components::{read, write};
use crate::state::mechanics::{CACHE_SERVED_THRESHOLD_MS, CacheBadge, RelaySimulation};
use crate::state::shell::Shell;

#[component]
pub fn MechanicsTab() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();

    let busy = move || read(shell, RelaySimulation::is_busy);
    let cached = move || read(shell, RelaySimulation::is_cached);

    let on_miss = move |_| {
        write(shell, RelaySimulation::request_miss);
    };
    let on_hit = move |_| {
        let outcome = write(shell, |sim: &mut RelaySimulation| Some(sim.request_hit())).transpose();
        if let Err(err) = outcome {
            notify_user(&err.to_string());
        }
    };

    let badge = move || {
        read(shell, RelaySimulation::badge).map(|badge| {
            let class = match badge {
                CacheBadge::Miss => "badge badge--miss",
                CacheBadge::Hit => "badge badge--hit",
            };
            view! { <div class=class>{badge.label()}</div> }
        })
    };

    // Rebuilt on every hop so the CSS animation restarts from its keyframe origin.
    let packet = move || {
        let (step, hold_ms) = read(shell, |sim: &RelaySimulation| (sim.packet_step(), sim.current_hold_ms()));
        let hold_ms = hold_ms?;
        let class = format!("relay-packet relay-packet--step-{}", step.index());
        let style = format!("animation-duration: {hold_ms}ms;");
        Some(view! { <div class=class style=style></div> })
    };

    let result = move || {
        let (round_trip, caption) =
            read(shell, |sim: &RelaySimulation| (sim.last_round_trip_ms(), sim.result_caption()));
        let (ms, caption) = round_trip.zip(caption)?;
        let figure_class = if ms < CACHE_SERVED_THRESHOLD_MS {
            "relay-result__figure relay-result__figure--fast"
        } else {
            "relay-result__figure relay-result__figure--slow"
        };
        Some(view! {
            <div class="relay-result">
                <span class="relay-result__label">"Total Time:"</span>
                <span class=figure_class>{format!("{ms}ms")}</span>
                <span class="relay-result__caption">{caption}</span>
            </div>
        })
    };

    view! {
        <section class="tab tab--mechanics">
            <header class="tab__header">
                <h2>"How It Works: Cache Hit vs. Miss"</h2>
                <p>
                    "The first request is slow because it fetches from the Origin (Miss). The Edge then saves a copy. "
                    "Subsequent requests are served instantly from the Edge (Hit)."
                </p>
            </header>

            <div class="relay">
                <div class="relay__wire"></div>
                <div class="relay__nodes">
                    <div class="relay__node">
                        <span class="relay__icon">"👤"</span>
                        <span class="relay__label">"User"</span>
                    </div>
                    <div class="relay__node relay__node--edge">
                        <span
                            class="relay__icon"
                            class:relay__icon--active=move || read(shell, RelaySimulation::edge_active)
                            class:relay__icon--cached=cached
                        >
                            "🖥"
                        </span>
                        <span class="relay__label">"Edge Server"</span>
                        {badge}
                    </div>
                    <div class="relay__node">
                        <span
                            class="relay__icon"
                            class:relay__icon--active=move || read(shell, RelaySimulation::origin_active)
                        >
                            "🛢"
                        </span>
                        <span class="relay__label">"Origin Server"</span>
                    </div>
                </div>
                {packet}
                {result}
            </div>

            <div class="tab__actions">
                <button class="btn btn--secondary" disabled=busy on:click=on_miss>
                    "1. First Request (Miss)"
                </button>
                <button class="btn btn--cdn" class:btn--cold=move || !cached() disabled=busy on:click=on_hit>
                    "2. Second Request (Hit)"
                </button>
            </div>
        </section>
    }
}

/// Blocking browser alert; a log line when there is no window.
fn notify_user(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                leptos::logging::warn!("alert suppressed: {message}");
            }
            return;
        }
    }
    leptos::logging::warn!("{message}");
}
