#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::Serialize;

use crate::model::types::ScalarType;

/// How a property's type was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    /// Mapped from the column's SQL type token.
    Scalar(ScalarType),
    /// Foreign key recognized by the `<name>_id` column convention.
    Reference,
}

/// One column of a table, normalized for code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Raw snake_case column name.
    pub column_name: String,
    /// camelCase field name; reference columns lose their `Id` suffix.
    pub property_name: String,
    /// PascalCase name; for reference columns, the referenced class.
    pub type_name: String,
    /// Fragment used for `get`/`set` accessor names.
    pub accessor_name: String,
    /// Raw SQL type token as written in the schema.
    pub sql_type: String,
    pub kind: PropertyKind,
    /// Type of the persistence entity field.
    pub entity_type: String,
    /// Type of the data-transfer object field.
    pub interchange_type: String,
    /// Type of the front-end model field.
    pub ui_type: String,
}

impl Property {
    pub fn is_reference(&self) -> bool {
        matches!(self.kind, PropertyKind::Reference)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self.kind, PropertyKind::Scalar(ScalarType::Boolean))
    }
}
