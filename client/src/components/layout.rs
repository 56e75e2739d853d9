//! Sidebar navigation plus the main stage the active tab renders into.

use leptos::prelude::*;

use crate::state::nav::{Icon, TABS};
use crate::state::shell::Shell;

/// Fixed left-hand tab list and content area.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();

    let tabs = TABS
        .iter()
        .map(|tab| {
            let id = tab.id;
            let is_active = move || shell.with(|s| s.active() == id);
            let class = move || {
                if is_active() {
                    "sidebar__tab sidebar__tab--active"
                } else {
                    "sidebar__tab"
                }
            };
            let on_click = move |_| {
                shell.update(|s| {
                    s.select_tab(id);
                });
            };
            view! {
                <li>
                    <button id=format!("tab-{}", id.slug()) class=class on:click=on_click>
                        <span class="sidebar__icon">{tab.icon.glyph()}</span>
                        {tab.label}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="layout">
            <nav class="sidebar">
                <div class="sidebar__brand">
                    <span class="sidebar__logo">{Icon::Network.glyph()}</span>
                    <h1 class="sidebar__title">"CDN Explorer"</h1>
                </div>
                <ul class="sidebar__tabs">{tabs}</ul>
                <div class="sidebar__footer">"Interactive Educational Demo"</div>
            </nav>
            <main class="stage">
                <div class="stage__grid"></div>
                <div class="stage__content">{children()}</div>
            </main>
        </div>
    }
}
