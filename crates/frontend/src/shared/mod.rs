pub mod api_utils;
pub mod components;
pub mod config;
pub mod form;
pub mod icons;
pub mod lifetime;
pub mod list_utils;
pub mod list_view_model;
pub mod page_frame;
pub mod page_standard;
pub mod service;
pub mod toast;
