pub mod api_utils;
pub mod components;
pub mod config;
pub mod crud;
pub mod error;
pub mod icons;
pub mod modal;
pub mod page_frame;
