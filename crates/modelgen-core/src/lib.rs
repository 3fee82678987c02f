//! Schema-to-model derivation.
//!
//! Reads `CREATE TABLE` text and derives one [`ClassModel`] per table: names,
//! typed properties, imports and base-shape classification. Emitters consume
//! the finished models and never mutate them.

pub mod classify;
pub mod error;
pub mod infer;
pub mod model;
pub mod scanner;

pub use classify::classify;
pub use error::ModelError;
pub use infer::{ENTITY_MARKER, Import, InferredProperty, infer_property};
pub use model::{
    BackendImport, BaseType, ClassModel, FrontendImport, NameVariants, Property, PropertyKind,
    ScalarType,
};
pub use scanner::{FINALIZE_MARKER, ScanState, Scanner, scan_schema};
