//! Tutorial view components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every tab reads and writes its widget through the shared
//! `RwSignal<Shell>` context. `read`/`write` fall back to defaults when the
//! requested widget is not the mounted one, which only happens for the frame
//! in which a tab is being torn down.

pub mod benefits_tab;
pub mod layout;
pub mod mechanics_tab;
pub mod problem_tab;
pub mod quiz_tab;
pub mod solution_tab;
pub mod types_tab;

use leptos::prelude::*;

use crate::state::shell::{Shell, Widget};

/// Project a value out of the mounted widget of type `W` (tracked).
pub(crate) fn read<W: Widget, T: Default>(shell: RwSignal<Shell>, f: impl FnOnce(&W) -> T) -> T {
    shell.with(|s| s.get::<W>().map(f).unwrap_or_default())
}

/// Mutate the mounted widget of type `W` and notify subscribers.
pub(crate) fn write<W: Widget, T: Default>(shell: RwSignal<Shell>, f: impl FnOnce(&mut W) -> T) -> T {
    let mut out = T::default();
    shell.update(|s| {
        if let Some(widget) = s.get_mut::<W>() {
            out = f(widget);
        }
    });
    out
}
