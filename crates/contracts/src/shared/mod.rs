pub mod api;
pub mod lenient;
