//! "Content Types" tab: hover zones over a forked route diagram.

use leptos::prelude::*;

use crate::components::{read, write};
use crate::state::content_types::{ContentPath, HoverPaths};
use crate::state::shell::Shell;

const STATIC_PATH_D: &str = "M 120 200 C 200 200, 200 100, 350 100 L 500 100";
const DYNAMIC_PATH_D: &str = "M 120 200 C 200 200, 200 300, 350 300 L 700 300";

fn path_modifier(path: ContentPath) -> &'static str {
    match path {
        ContentPath::Static => "static",
        ContentPath::Dynamic => "dynamic",
    }
}

#[component]
pub fn TypesTab() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let highlighted = move |path: ContentPath| read(shell, |h: &HoverPaths| h.is_highlighted(path));

    let zones = ContentPath::ALL
        .into_iter()
        .map(|path| {
            let modifier = path_modifier(path);
            let class = move || {
                if highlighted(path) {
                    format!("hover-zone hover-zone--{modifier} hover-zone--hot")
                } else {
                    format!("hover-zone hover-zone--{modifier}")
                }
            };
            view! {
                <div
                    class=class
                    on:mouseenter=move |_| write(shell, |h: &mut HoverPaths| h.enter(path))
                    on:mouseleave=move |_| write(shell, |h: &mut HoverPaths| h.leave())
                >
                    <div class="hover-zone__hint">{format!("Hover: {}", path.hover_label())}</div>
                </div>
            }
        })
        .collect_view();

    let route = move |path: ContentPath, d: &'static str| {
        let modifier = path_modifier(path);
        let class = move || {
            if highlighted(path) {
                format!("route route--{modifier} route--hot")
            } else {
                format!("route route--{modifier}")
            }
        };
        view! { <path d=d class=class fill="none" /> }
    };

    let locked = move || read(shell, |h: &HoverPaths| h.edge_cache_locked());
    let optimized = move || read(shell, |h: &HoverPaths| h.route_optimized());

    view! {
        <section class="tab tab--types">
            <header class="tab__header">
                <h2>"Static vs. Dynamic Content"</h2>
                <p>
                    "Not everything is cached. Static assets (images, CSS) live at the edge. Dynamic requests "
                    "(API calls) must go to the Origin, but CDNs still optimize this route."
                </p>
            </header>

            <div class="fork">
                {zones}

                <div class="fork__node fork__node--user">
                    <span class="fork__icon">"👤"</span>
                    <span class="fork__label">"User"</span>
                </div>

                <svg class="fork__paths">
                    {route(ContentPath::Static, STATIC_PATH_D)}
                    {route(ContentPath::Dynamic, DYNAMIC_PATH_D)}
                </svg>

                <div class="fork__node fork__node--edge" class:fork__node--hot=locked>
                    <span class="fork__icon">"🖥"</span>
                    <span class="fork__label">"Edge Cache"</span>
                    <Show when=locked>
                        <div class="fork__lock">"🔒"</div>
                    </Show>
                </div>

                <div class="fork__node fork__node--router">
                    <span class="fork__router">"Edge Router"</span>
                    <Show when=optimized>
                        <div class="fork__hint">"⚡ Optimized Route"</div>
                    </Show>
                </div>

                <div class="fork__node fork__node--origin" class:fork__node--hot=optimized>
                    <span class="fork__icon">"🛢"</span>
                    <span class="fork__label">"Origin"</span>
                </div>

                <Show when=locked>
                    <div class="fork__traveler fork__traveler--static">"📄"</div>
                </Show>
                <Show when=optimized>
                    <div class="fork__traveler fork__traveler--dynamic">"API"</div>
                </Show>
            </div>
        </section>
    }
}
