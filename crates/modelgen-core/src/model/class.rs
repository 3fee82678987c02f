use std::collections::BTreeSet;

use modelgen_naming::{pluralize, to_camel_case, to_kebab_case, to_pascal_case};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::Serialize;

use crate::error::ModelError;
use crate::infer::{Import, infer_property};
use crate::model::base::BaseType;
use crate::model::property::Property;
use crate::model::types::{BackendImport, FrontendImport, ScalarType};

/// Casing and plural forms of a class name, computed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct NameVariants {
    pub pascal: String,
    pub camel: String,
    pub kebab: String,
    pub pascal_plural: String,
    pub camel_plural: String,
    pub kebab_plural: String,
}

impl NameVariants {
    pub fn from_class_name(pascal: &str) -> Self {
        let pascal_plural = pluralize(pascal);
        Self {
            pascal: pascal.to_string(),
            camel: to_camel_case(pascal),
            kebab: to_kebab_case(pascal),
            camel_plural: to_camel_case(&pascal_plural),
            kebab_plural: to_kebab_case(&pascal_plural),
            pascal_plural,
        }
    }
}

/// Normalized, emitter-agnostic model of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ClassModel {
    table_name: String,
    names: NameVariants,
    base_type: Option<BaseType>,
    properties: Vec<Property>,
    backend_imports: BTreeSet<BackendImport>,
    frontend_imports: BTreeSet<FrontendImport>,
}

impl ClassModel {
    /// Start an empty model for a snake_case table name.
    pub fn new(table_name: impl Into<String>) -> Self {
        let table_name = table_name.into();
        let names = NameVariants::from_class_name(&to_pascal_case(&table_name));
        Self {
            table_name,
            names,
            base_type: None,
            properties: Vec::new(),
            backend_imports: BTreeSet::new(),
            frontend_imports: BTreeSet::new(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// PascalCase class name.
    pub fn class_name(&self) -> &str {
        &self.names.pascal
    }

    pub fn names(&self) -> &NameVariants {
        &self.names
    }

    pub fn base_type(&self) -> Option<BaseType> {
        self.base_type
    }

    /// Properties in column declaration order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, property_name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.property_name == property_name)
    }

    pub fn has_property(&self, property_name: &str) -> bool {
        self.property(property_name).is_some()
    }

    pub fn backend_imports(&self) -> &BTreeSet<BackendImport> {
        &self.backend_imports
    }

    pub fn frontend_imports(&self) -> &BTreeSet<FrontendImport> {
        &self.frontend_imports
    }

    /// Infer a property from a column declaration and append it.
    ///
    /// The column's import is recorded only when the property is accepted.
    pub fn add_column(&mut self, column_name: &str, sql_type: &str) -> Result<&Property, ModelError> {
        let inferred = infer_property(column_name, sql_type);
        let index = self.properties.len();
        self.add_property(inferred.property)?;
        match inferred.import {
            Some(Import::Backend(import)) => {
                self.add_backend_import(import);
            }
            Some(Import::Frontend(import)) => {
                self.add_frontend_import(import);
            }
            None => {}
        }
        Ok(&self.properties[index])
    }

    /// Append a property, keeping property names unique.
    pub fn add_property(&mut self, property: Property) -> Result<(), ModelError> {
        if self.has_property(&property.property_name) {
            return Err(ModelError::DuplicateProperty {
                table: self.table_name.clone(),
                property: property.property_name,
                column: property.column_name,
            });
        }
        self.properties.push(property);
        Ok(())
    }

    pub fn add_backend_import(&mut self, import: BackendImport) -> bool {
        self.backend_imports.insert(import)
    }

    pub fn add_frontend_import(&mut self, import: FrontendImport) -> bool {
        self.frontend_imports.insert(import)
    }

    /// Remove a property by name. Later properties keep their relative order.
    pub(crate) fn remove_property(&mut self, property_name: &str) -> Option<Property> {
        let idx = self
            .properties
            .iter()
            .position(|p| p.property_name == property_name)?;
        Some(self.properties.remove(idx))
    }

    /// Move the base type upward. Re-setting or downgrading is rejected.
    pub(crate) fn upgrade_base_type(&mut self, base: BaseType) -> Result<(), ModelError> {
        if let Some(current) = self.base_type
            && current >= base
        {
            return Err(ModelError::BaseTypeDowngrade {
                table: self.table_name.clone(),
                from: current,
                to: base,
            });
        }
        self.base_type = Some(base);
        Ok(())
    }

    /// Entity type of the primary key.
    ///
    /// Classified models inherit an integer key from their base. Otherwise the
    /// first declared property is the key.
    pub fn primary_key_type(&self) -> &str {
        match (self.base_type, self.properties.first()) {
            (None, Some(first)) => &first.entity_type,
            _ => ScalarType::Fallback.backend_type(),
        }
    }
}
