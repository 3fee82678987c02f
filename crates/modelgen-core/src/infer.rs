//! Column-to-property inference.
//!
//! Turns one column declaration into a [`Property`] plus at most one import
//! the generated code will need. The functions here are pure; recording the
//! result on a [`ClassModel`](crate::ClassModel) is the caller's job.

use modelgen_naming::{reference_target, to_camel_case, to_kebab_case, to_pascal_case};

use crate::model::property::{Property, PropertyKind};
use crate::model::types::{BackendImport, FrontendImport, ScalarType};

/// Suffix appended to a referenced class name to form its entity type.
pub const ENTITY_MARKER: &str = "Entity";

/// Column prefix whose boolean accessors drop the leading `Is`.
pub const BOOLEAN_PREFIX: &str = "is_";

/// PascalCase form of [`BOOLEAN_PREFIX`] as it appears in a type name.
const BOOLEAN_ACCESSOR_PREFIX: &str = "Is";

/// Import contributed by a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Import {
    Backend(BackendImport),
    Frontend(FrontendImport),
}

/// Result of inferring one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredProperty {
    pub property: Property,
    pub import: Option<Import>,
}

/// Infer a property from a column name and its raw SQL type token.
///
/// A column whose PascalCase form ends in `Id` (and is longer than `Id`)
/// is a reference: the type token is ignored and the referenced class name
/// drives every resolved type. Any other column is mapped through
/// [`ScalarType::from_token`].
pub fn infer_property(column_name: &str, sql_type: &str) -> InferredProperty {
    let pascal = to_pascal_case(column_name);

    let (type_name, kind, entity_type, interchange_type, ui_type, import) =
        match reference_target(&pascal) {
            Some(target) => (
                target.to_string(),
                PropertyKind::Reference,
                format!("{}{}", target, ENTITY_MARKER),
                target.to_string(),
                target.to_string(),
                Some(Import::Frontend(FrontendImport::new(
                    target,
                    to_kebab_case(target),
                ))),
            ),
            None => {
                let scalar = ScalarType::from_token(sql_type);
                (
                    pascal.clone(),
                    PropertyKind::Scalar(scalar),
                    scalar.backend_type().to_string(),
                    scalar.backend_type().to_string(),
                    scalar.ui_type().to_string(),
                    scalar.backend_import().map(Import::Backend),
                )
            }
        };

    let accessor_name = accessor_name(column_name, &type_name, kind);

    InferredProperty {
        property: Property {
            column_name: column_name.to_string(),
            property_name: to_camel_case(&type_name),
            type_name,
            accessor_name,
            sql_type: sql_type.to_string(),
            kind,
            entity_type,
            interchange_type,
            ui_type,
        },
        import,
    }
}

/// `is_active boolean` is read through `getActive()`, not `getIsActive()`.
fn accessor_name(column_name: &str, type_name: &str, kind: PropertyKind) -> String {
    let is_prefixed_boolean = matches!(kind, PropertyKind::Scalar(ScalarType::Boolean))
        && column_name.starts_with(BOOLEAN_PREFIX);
    let stripped = type_name
        .strip_prefix(BOOLEAN_ACCESSOR_PREFIX)
        .filter(|rest| is_prefixed_boolean && !rest.is_empty());
    stripped.unwrap_or(type_name).to_string()
}
