//! Create-organization dialog
//!
//! - view_model.rs: dialog state and the submit command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CreateOrganizationDialog;
pub use view_model::OrganizationDialogViewModel;
