//! Employee Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - ../../api.rs: HTTP resource client
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::EmployeeDetails;
pub use view_model::{EmployeeForm, EmployeeUpdateViewModel};
