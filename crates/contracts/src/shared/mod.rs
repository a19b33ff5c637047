pub mod server_message;
pub mod validation;
