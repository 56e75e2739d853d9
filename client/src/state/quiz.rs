//! Closing quiz: a fixed list of questions answered in order.
//!
//! DESIGN
//! ======
//! Picking an option shows feedback immediately and commits the answer after
//! `FEEDBACK_MS`. Only one pick per question is accepted; later clicks in the
//! feedback window are dropped. `restart` cancels any uncommitted answer so a
//! stale commit cannot land in the fresh run.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use crate::state::Transition;
use crate::util::scheduler::{Scheduler, Sequencer, TimerId};

pub const FEEDBACK_MS: u64 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
}

pub const QUESTIONS: &[Question] = &[
    Question {
        prompt: "What is the primary goal of a CDN?",
        options: &[
            "To host the database of the application",
            "To reduce latency by serving content from closer locations",
            "To replace the need for an Origin server completely",
            "To generate dynamic API responses faster",
        ],
        correct: 1,
    },
    Question {
        prompt: "If an Edge server does not have the requested file, what is it called?",
        options: &["Cache Hit", "Cache Miss", "Server Timeout", "404 Error"],
        correct: 1,
    },
    Question {
        prompt: "Does a CDN increase or decrease the load on the Origin server?",
        options: &[
            "It increases load significantly",
            "It has no effect on load",
            "It decreases load significantly (Offloading)",
            "It only decreases load for databases",
        ],
        correct: 2,
    },
];

/// How an option button is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OptionFeedback {
    /// Nothing picked yet; clickable.
    #[default]
    Neutral,
    Correct,
    Wrong,
    Dimmed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commit;

#[derive(Clone, Debug)]
pub struct QuizState {
    questions: &'static [Question],
    current: usize,
    score: usize,
    selected: Option<usize>,
    show_results: bool,
    pending: Option<TimerId>,
    scheduler: Scheduler<Commit>,
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizState {
    #[must_use]
    pub fn new() -> Self {
        Self::with_questions(QUESTIONS)
    }

    #[must_use]
    pub fn with_questions(questions: &'static [Question]) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
            selected: None,
            show_results: questions.is_empty(),
            pending: None,
            scheduler: Scheduler::new(),
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn show_results(&self) -> bool {
        self.show_results
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Question being answered, or `None` once results are showing.
    #[must_use]
    pub fn question(&self) -> Option<&'static Question> {
        if self.show_results {
            return None;
        }
        self.questions.get(self.current)
    }

    pub fn select(&mut self, option: usize) -> Transition {
        if self.selected.is_some() {
            return Transition::Ignored;
        }
        let Some(question) = self.question() else {
            return Transition::Ignored;
        };
        if option >= question.options.len() {
            return Transition::Ignored;
        }
        self.selected = Some(option);
        self.pending = Some(self.scheduler.schedule(FEEDBACK_MS, Commit));
        Transition::Applied
    }

    pub fn restart(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
        self.current = 0;
        self.score = 0;
        self.selected = None;
        self.show_results = self.questions.is_empty();
    }

    #[must_use]
    pub fn option_feedback(&self, option: usize) -> OptionFeedback {
        let (Some(selected), Some(question)) = (self.selected, self.question()) else {
            return OptionFeedback::Neutral;
        };
        if option == question.correct {
            OptionFeedback::Correct
        } else if option == selected {
            OptionFeedback::Wrong
        } else {
            OptionFeedback::Dimmed
        }
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score == self.questions.len()
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("Question {} of {}", self.current + 1, self.questions.len())
    }

    #[must_use]
    pub fn headline(&self) -> &'static str {
        if self.is_perfect() { "Perfect Score!" } else { "Quiz Complete" }
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!("You scored {} out of {}.", self.score, self.questions.len())
    }

    fn commit(&mut self) {
        self.pending = None;
        let (Some(selected), Some(question)) = (self.selected, self.question()) else {
            return;
        };
        if selected == question.correct {
            self.score += 1;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.show_results = true;
        }
        self.selected = None;
    }
}

impl Sequencer for QuizState {
    type Event = Commit;

    fn scheduler(&self) -> &Scheduler<Commit> {
        &self.scheduler
    }

    fn scheduler_mut(&mut self) -> &mut Scheduler<Commit> {
        &mut self.scheduler
    }

    fn on_event(&mut self, _event: Commit) {
        self.commit();
    }
}
