pub mod a001_product;
pub mod a002_product_category;
pub mod a003_product_variant;
