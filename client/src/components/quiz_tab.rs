//! "Quiz" tab: question card with delayed feedback, then a results card.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::{read, write};
use crate::state::nav::Icon;
use crate::state::quiz::{OptionFeedback, QuizState};
use crate::state::shell::Shell;

fn option_class(feedback: OptionFeedback) -> &'static str {
    match feedback {
        OptionFeedback::Neutral => "quiz__option",
        OptionFeedback::Correct => "quiz__option quiz__option--correct",
        OptionFeedback::Wrong => "quiz__option quiz__option--wrong",
        OptionFeedback::Dimmed => "quiz__option quiz__option--dimmed",
    }
}

#[component]
pub fn QuizTab() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();

    // Options are rebuilt only when the question changes, not on every pick.
    let question = Memo::new(move |_| read(shell, QuizState::question));
    let answered = move || read(shell, |q: &QuizState| q.selected().is_some());

    let card = move || match question.get() {
        Some(current) => {
            let options = current
                .options
                .iter()
                .enumerate()
                .map(|(index, text)| {
                    let class = move || option_class(read(shell, |q: &QuizState| q.option_feedback(index)));
                    let on_pick = move |_| {
                        write(shell, |q: &mut QuizState| q.select(index));
                    };
                    view! {
                        <button class=class disabled=answered on:click=on_pick>
                            {*text}
                        </button>
                    }
                })
                .collect_view();
            view! {
                <div class="quiz__card">
                    <div class="quiz__meta">
                        <span>{move || read(shell, QuizState::progress_label)}</span>
                        <span>{move || format!("Score: {}", read(shell, QuizState::score))}</span>
                    </div>
                    <h3 class="quiz__prompt">{current.prompt}</h3>
                    <div class="quiz__options">{options}</div>
                </div>
            }
            .into_any()
        }
        None => {
            let perfect = read(shell, QuizState::is_perfect);
            let (emblem_class, glyph) = if perfect {
                ("quiz__emblem quiz__emblem--perfect", Icon::Shield.glyph())
            } else {
                ("quiz__emblem", Icon::Globe.glyph())
            };
            let on_restart = move |_| {
                write(shell, QuizState::restart);
            };
            view! {
                <div class="quiz__card quiz__card--results">
                    <div class=emblem_class>{glyph}</div>
                    <h3>{move || read(shell, QuizState::headline)}</h3>
                    <p>{move || read(shell, QuizState::summary)}</p>
                    <button class="btn btn--secondary" on:click=on_restart>
                        "Restart Quiz"
                    </button>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <section class="tab tab--quiz">
            <div class="quiz">
                <h2 class="quiz__title">"Knowledge Check"</h2>
                {card}
            </div>
        </section>
    }
}
