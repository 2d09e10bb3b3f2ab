//! Product variant create/edit pages
//!
//! - model.rs: form fields of `ProductVariantDto`
//! - view.rs: route components over the shared `RecordForm`

mod model;
mod view;

pub use view::{ProductVariantCreate, ProductVariantDetails, ProductVariantEdit};
