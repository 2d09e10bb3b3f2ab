//! Common types shared by all catalog records

pub mod entity_metadata;
pub mod record_id;

pub use entity_metadata::EntityMetadata;
pub use record_id::RecordId;
