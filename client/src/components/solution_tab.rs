//! "The Solution" tab: toggling the edge network onto the map.

use leptos::prelude::*;

use crate::components::{read, write};
use crate::state::problem::{ORIGIN_LABEL, USER_LABEL};
use crate::state::shell::Shell;
use crate::state::solution::{CdnToggle, ORIGIN_POSITION, USER_POSITION, reveal_delay_ms};

#[component]
pub fn SolutionTab() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let enabled = move || read(shell, |t: &CdnToggle| t.enabled());

    let sites = move || {
        let toggle = read(shell, |t: &CdnToggle| *t);
        toggle
            .visible_sites()
            .iter()
            .enumerate()
            .map(|(index, site)| {
                let class = if site.serves_user { "edge-site edge-site--primary" } else { "edge-site" };
                let style = format!("{} animation-delay: {}ms;", site.position.css_position(), reveal_delay_ms(index));
                view! {
                    <div class=class style=style>
                        <span class="edge-site__icon">"🖥"</span>
                        <span class="edge-site__label">{site.name}</span>
                    </div>
                }
            })
            .collect_view()
    };

    let low_latency_path = move || {
        read(shell, |t: &CdnToggle| t.low_latency_path()).map(|(from, to)| {
            view! {
                <svg class="map__paths">
                    <line
                        x1=format!("{}%", from.x)
                        y1=format!("{}%", from.y)
                        x2=format!("{}%", to.x)
                        y2=format!("{}%", to.y)
                        class="map__path map__path--fast"
                    />
                </svg>
                <div class="map__tag" style=to.css_position()>
                    "Low Latency Path"
                </div>
            }
        })
    };

    let on_toggle = move |_| {
        write(shell, |t: &mut CdnToggle| t.toggle());
    };

    view! {
        <section class="tab tab--solution">
            <header class="tab__header">
                <h2>"The Solution: The Edge Network"</h2>
                <p>
                    "A CDN places \"Edge Servers\" geographically closer to users. While the Origin remains the "
                    "source of truth, Edge servers cache content nearby to reduce travel time."
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
                {sites}
                {low_latency_path}
            </div>

            <div class="tab__actions toggle-row">
                <span class="toggle-row__label" class:toggle-row__label--on=move || !enabled()>
                    "Direct Origin"
                </span>
                <button
                    class="switch"
                    class:switch--on=enabled
                    role="switch"
                    aria-checked=move || enabled().to_string()
                    on:click=on_toggle
                >
                    <span class="switch__knob"></span>
                </button>
                <span class="toggle-row__label" class:toggle-row__label--cdn=enabled>
                    "Enable CDN"
                </span>
            </div>
        </section>
    }
}
