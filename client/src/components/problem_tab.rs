//! "The Problem" tab: one request crossing the globe with a latency readout.

use leptos::prelude::*;

use crate::components::{read, write};
use crate::state::problem::{ORIGIN_LABEL, RequestPhase, RequestSimulation, TRAVEL_MS, USER_LABEL};
use crate::state::shell::Shell;
use crate::state::solution::{ORIGIN_POSITION, USER_POSITION};

#[component]
pub fn ProblemTab() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();

    let phase = move || read(shell, RequestSimulation::phase);
    let elapsed = move || read(shell, RequestSimulation::elapsed_ms);

    let packet_style = move || {
        let departed = read(shell, RequestSimulation::packet_departed);
        let at = if departed { USER_POSITION } else { ORIGIN_POSITION };
        let duration = if phase() == RequestPhase::Traveling { TRAVEL_MS } else { 0 };
        format!("{} transition-duration: {duration}ms;", at.css_position())
    };
    let packet_class = move || {
        if read(shell, RequestSimulation::packet_departed) {
            "packet packet--latency"
        } else {
            "packet packet--latency packet--hidden"
        }
    };

    let on_start = move |_| {
        write(shell, RequestSimulation::start);
    };
    let on_reset = move |_| {
        write(shell, RequestSimulation::reset);
    };

    view! {
        <section class="tab tab--problem">
            <header class="tab__header">
                <h2>"The Problem: Distance = Latency"</h2>
                <p>
                    "Light speed is finite. When a user in Australia requests data from a server in New York, "
                    "the signal has to travel thousands of miles through fiber optic cables, routers, and switches."
                </p>
            </header>

            <div class="map">
                <div class="map__node map__node--origin" style=ORIGIN_POSITION.css_position()>
                    <span class="map__icon">"🖥"</span>
                    <span class="map__label">{ORIGIN_LABEL}</span>
                </div>
                <div class="map__node map__node--user" style=USER_POSITION.css_position()>
                    <span class="map__icon">"👤"</span>
                    <span class="map__label">{USER_LABEL}</span>
                </div>

                <svg class="map__paths">
                    <line
                        x1=format!("{}%", ORIGIN_POSITION.x)
                        y1=format!("{}%", ORIGIN_POSITION.y)
                        x2=format!("{}%", USER_POSITION.x)
                        y2=format!("{}%", USER_POSITION.y)
                        class="map__path map__path--dashed"
                    />
                </svg>

                <div class=packet_class style=packet_style></div>

                <Show when=move || phase() == RequestPhase::Traveling>
                    <div class="latency-readout">{move || format!("Latency: {}ms", elapsed())}</div>
                </Show>

                <Show when=move || phase() == RequestPhase::Done>
                    <div class="overlay">
                        <div class="overlay__card overlay__card--alert">
                            <h3>"High Latency!"</h3>
                            <p class="overlay__figure">{move || format!("{}ms", elapsed())}</p>
                            <p>"That's nearly half a second delay just for the network trip."</p>
                            <button class="btn btn--secondary" on:click=on_reset>
                                "Reset"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>

            <div class="tab__actions">
                <button
                    class="btn btn--primary"
                    disabled=move || phase() != RequestPhase::Idle
                    on:click=on_start
                >
                    {move || read(shell, RequestSimulation::button_label)}
                </button>
            </div>
        </section>
    }
}
