pub mod base;
pub mod class;
pub mod property;
pub mod types;

pub use base::BaseType;
pub use class::{ClassModel, NameVariants};
pub use property::{Property, PropertyKind};
pub use types::{BackendImport, FrontendImport, ScalarType};
