//! Category Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - ../../api.rs: HTTP resource client
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::{CategoryForm, CategoryUpdateViewModel};
