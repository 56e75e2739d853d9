//! Root application component and the SSR document shell.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::{
    benefits_tab::BenefitsTab, layout::Layout, mechanics_tab::MechanicsTab, problem_tab::ProblemTab,
    quiz_tab::QuizTab, solution_tab::SolutionTab, types_tab::TypesTab,
};
use crate::state::nav::TabId;
use crate::state::shell::Shell;
use crate::util::timer::{drive_shell, layout_seed};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the navigation shell, hands it to every tab through context, and
/// keeps a browser timer armed for whatever the mounted tab is waiting on.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let shell = RwSignal::new(Shell::new(layout_seed()));
    provide_context(shell);
    drive_shell(shell);

    // Keyed on the mount epoch so a tab is rebuilt exactly when its widget is.
    let mounted = Memo::new(move |_| shell.with(|s| (s.active(), s.epoch())));

    let content = move || match mounted.get().0 {
        TabId::Problem => view! { <ProblemTab/> }.into_any(),
        TabId::Solution => view! { <SolutionTab/> }.into_any(),
        TabId::Mechanics => view! { <MechanicsTab/> }.into_any(),
        TabId::Benefits => view! { <BenefitsTab/> }.into_any(),
        TabId::Types => view! { <TypesTab/> }.into_any(),
        TabId::Quiz => view! { <QuizTab/> }.into_any(),
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/cdn-explorer.css"/>
        <Title text="CDN Explorer"/>

        <Layout>{content}</Layout>
    }
}
