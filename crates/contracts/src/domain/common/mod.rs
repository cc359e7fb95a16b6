//! Common types shared by all aggregates

pub mod entity_metadata;

pub use entity_metadata::EntityMetadata;
