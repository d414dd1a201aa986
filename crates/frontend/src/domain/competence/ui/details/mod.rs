//! Competence Details UI Module
//!
//! The competence editor is the one screen with relationship pickers: the
//! category and employee dropdowns are filled from their own resources and
//! reconciled with the reference the record currently holds.
//!
//! Simplified MVVM pattern implementation:
//! - ../../api.rs: HTTP resource client
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CompetenceDetails;
pub use view_model::{CompetenceForm, CompetenceUpdateViewModel};
