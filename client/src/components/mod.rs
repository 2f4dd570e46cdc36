//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components draw the form and the three outcome states. They read the
//! session record from the `RwSignal<PrimesState>` context provided by `App`.

pub mod error_banner;
pub mod limit_form;
pub mod results_panel;
