//! Tutorial state models.
//!
//! DESIGN
//! ======
//! Each tab widget is a plain value type with its own scheduler, so every
//! sequence can be exercised by fast-forwarding simulated time without a
//! browser. `shell` owns whichever widget is mounted.

pub mod benefits;
pub mod content_types;
pub mod mechanics;
pub mod nav;
pub mod problem;
pub mod quiz;
pub mod shell;
pub mod solution;

/// Result of a user trigger on a widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transition {
    /// State changed and any follow-up steps are armed.
    Applied,
    /// The widget was busy or the input did not apply; nothing changed.
    #[default]
    Ignored,
}
