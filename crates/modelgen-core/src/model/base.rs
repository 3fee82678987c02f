use modelgen_naming::to_kebab_case;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::Serialize;

/// Shared ancestor a table's generated types extend.
///
/// Variants are ordered by how many properties they absorb, so a later
/// classification step can only move a model upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum BaseType {
    /// Absorbs `id`.
    Base,
    /// Absorbs `id` and `name`.
    BaseWithName,
    /// Absorbs `id`, `name` and `label`.
    BaseEnum,
}

impl BaseType {
    /// Property absorbed by the step that produces this variant.
    pub fn absorbed_property(self) -> &'static str {
        match self {
            BaseType::Base => "id",
            BaseType::BaseWithName => "name",
            BaseType::BaseEnum => "label",
        }
    }

    /// All properties a model of this base type no longer declares itself.
    pub fn absorbed_properties(self) -> &'static [&'static str] {
        match self {
            BaseType::Base => &["id"],
            BaseType::BaseWithName => &["id", "name"],
            BaseType::BaseEnum => &["id", "name", "label"],
        }
    }

    /// Superclass of the persistence entity.
    pub fn entity_class(self) -> &'static str {
        match self {
            BaseType::Base => "BaseEntity",
            BaseType::BaseWithName => "BaseEntityWithName",
            BaseType::BaseEnum => "BaseEnumEntity",
        }
    }

    /// Superclass of the data-transfer object.
    pub fn interchange_class(self) -> &'static str {
        match self {
            BaseType::Base => "BaseDto",
            BaseType::BaseWithName => "BaseDtoWithName",
            BaseType::BaseEnum => "BaseEnumDto",
        }
    }

    /// Interface the front-end model extends.
    pub fn ui_interface(self) -> &'static str {
        self.interchange_class()
    }

    /// Module file stem that exports [`BaseType::ui_interface`].
    pub fn ui_module(self) -> String {
        to_kebab_case(self.ui_interface())
    }
}
