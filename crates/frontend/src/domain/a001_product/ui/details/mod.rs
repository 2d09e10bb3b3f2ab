//! Product create/edit pages
//!
//! - model.rs: form fields of `ProductDto`
//! - view.rs: route components over the shared `RecordForm`

mod model;
mod view;

pub use view::{ProductCreate, ProductDetails, ProductEdit};
