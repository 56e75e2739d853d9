//! Browser timer driver for the navigation shell.
//!
//! ARCHITECTURE
//! ============
//! Widgets only know simulated time. This driver keeps exactly one browser
//! `Timeout` armed for the shell's earliest pending event and, when it fires,
//! advances the shell by the same amount. The armed timeout is keyed by
//! `(mount epoch, due time)`: any state change that produces a different key
//! replaces (and thereby cancels) it, and a tab switch always does.

use leptos::prelude::*;

use crate::state::shell::Shell;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// Arm browser timeouts for whatever the mounted widget is waiting on.
/// Server rendering never runs timers, so this is inert outside `hydrate`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn drive_shell(shell: RwSignal<Shell>) {
    #[cfg(feature = "hydrate")]
    {
        type Armed = Option<((u64, u64), Timeout)>;
        let armed: Rc<RefCell<Armed>> = Rc::new(RefCell::new(None));

        Effect::new(move || {
            let next = shell.with(|s| s.next_deadline().zip(s.until_next_ms()));
            let mut slot = armed.borrow_mut();
            let Some((key, wait_ms)) = next else {
                slot.take();
                return;
            };
            if slot.as_ref().is_some_and(|(armed_key, _)| *armed_key == key) {
                return;
            }
            let delay = u32::try_from(wait_ms).unwrap_or(u32::MAX);
            let timeout = Timeout::new(delay, move || {
                shell.update(|s| {
                    s.advance(wait_ms);
                });
            });
            *slot = Some((key, timeout));
        });
    }
}

/// Seed for randomized widget layouts: wall-clock in the browser, fixed on
/// the server where nothing randomized is rendered.
#[must_use]
pub fn layout_seed() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
