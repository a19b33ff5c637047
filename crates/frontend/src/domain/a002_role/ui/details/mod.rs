mod view;
mod view_model;

pub use view::CreateRoleDialog;
pub use view_model::RoleDialogViewModel;
