//! Product category create/edit pages

mod model;
mod view;

pub use view::{ProductCategoryCreate, ProductCategoryDetails, ProductCategoryEdit};
