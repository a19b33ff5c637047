mod view;
mod view_model;

pub use view::CreateUserDialog;
pub use view_model::UserDialogViewModel;
