//! "Benefits" tab: a traffic spike converging on the origin, with and without
//! edge servers absorbing it.

use leptos::prelude::*;

use crate::components::{read, write};
use crate::state::benefits::{Particle, TrafficScenario, TrafficSim, edge_positions};
use crate::state::shell::Shell;
use crate::util::geometry::STAGE_CENTER;

#[component]
pub fn BenefitsTab() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();

    let scenario = move || read(shell, TrafficSim::scenario);
    let overloaded = move || read(shell, TrafficSim::origin_overloaded);

    let scenario_button = move |target: TrafficScenario| {
        let class = move || {
            let selected = scenario() == target;
            match (selected, target) {
                (false, _) => "segmented__option",
                (true, TrafficScenario::NoCdn) => "segmented__option segmented__option--danger",
                (true, TrafficScenario::WithCdn) => "segmented__option segmented__option--ok",
            }
        };
        let on_click = move |_| {
            write(shell, |sim: &mut TrafficSim| sim.set_scenario(target));
        };
        view! {
            <button class=class on:click=on_click>
                {target.label()}
            </button>
        }
    };

    // Particle identities are fixed for the mount; only their placement is reactive.
    let particles: Vec<Particle> = shell.with_untracked(|s| {
        s.get::<TrafficSim>().map(|sim| sim.particles().to_vec()).unwrap_or_default()
    });
    let dots = particles
        .into_iter()
        .map(|particle| {
            let style = move || {
                let (at, opacity) = read(shell, |sim: &TrafficSim| (Some(sim.position(&particle)), sim.opacity()));
                let at = at.unwrap_or_else(|| particle.start_position());
                format!(
                    "{} opacity: {opacity}; transition-duration: {}ms; transition-delay: {}ms;",
                    at.css_position(),
                    particle.transition_ms(),
                    particle.transition_delay_ms(),
                )
            };
            let class = move || {
                if scenario() == TrafficScenario::NoCdn {
                    "particle particle--overload"
                } else {
                    "particle particle--served"
                }
            };
            view! { <div class=class style=style></div> }
        })
        .collect_view();

    let edges = move || {
        read(shell, TrafficSim::edges_visible).then(|| {
            edge_positions()
                .map(|at| {
                    view! {
                        <div class="spike__edge" style=at.css_position()>
                            <span class="spike__icon">"🖥"</span>
                            <span class="spike__label">"EDGE"</span>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let load_style = move || format!("width: {}%;", read(shell, TrafficSim::origin_load_percent));
    let experience_class = move || {
        match read(shell, |sim: &TrafficSim| (sim.active(), sim.scenario())) {
            (false, _) => "stat__value stat__value--muted",
            (true, TrafficScenario::NoCdn) => "stat__value stat__value--bad",
            (true, TrafficScenario::WithCdn) => "stat__value stat__value--good",
        }
    };

    view! {
        <section class="tab tab--benefits">
            <header class="tab__header tab__header--split">
                <div>
                    <h2>"Benefits: Load Reduction"</h2>
                    <p>
                        "Simulate a viral traffic spike. Without a CDN, the Origin crashes. "
                        "With a CDN, traffic is distributed."
                    </p>
                </div>
                <div class="segmented">
                    {scenario_button(TrafficScenario::NoCdn)}
                    {scenario_button(TrafficScenario::WithCdn)}
                </div>
            </header>

            <div class="spike">
                <div
                    class="spike__origin"
                    class:spike__origin--shake=overloaded
                    style=STAGE_CENTER.css_position()
                >
                    <span class="spike__icon" class:spike__icon--down=overloaded>
                        "🖥"
                    </span>
                    <Show when=overloaded>
                        <div class="spike__error">"503 ERROR"</div>
                    </Show>
                    <span class="spike__label">"ORIGIN"</span>
                </div>
                {edges}
                {dots}
            </div>

            <div class="stats">
                <div class="stat">
                    <span class="stat__title">"Origin Load"</span>
                    <div class="meter">
                        <div class="meter__fill" class:meter__fill--hot=overloaded style=load_style></div>
                    </div>
                </div>
                <div class="stat">
                    <span class="stat__title">"User Experience"</span>
                    <div class=experience_class>{move || read(shell, TrafficSim::user_experience)}</div>
                </div>
            </div>
        </section>
    }
}
