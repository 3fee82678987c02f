#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::Serialize;

/// Scalar column type recognized from a raw SQL type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    Serial,
    Text,
    Boolean,
    Date,
    Timestamp,
    Numeric,
    /// Any token not listed above. Maps to a boxed integer.
    Fallback,
}

impl ScalarType {
    /// Resolve a raw type token. Matching is case-sensitive and never fails.
    pub fn from_token(token: &str) -> Self {
        match token {
            "SERIAL" => ScalarType::Serial,
            "text" => ScalarType::Text,
            "boolean" => ScalarType::Boolean,
            "date" => ScalarType::Date,
            "timestamp" => ScalarType::Timestamp,
            "numeric" => ScalarType::Numeric,
            _ => ScalarType::Fallback,
        }
    }

    /// Java type used for both the entity and the DTO field.
    pub fn backend_type(self) -> &'static str {
        match self {
            ScalarType::Serial => "int",
            ScalarType::Text => "String",
            ScalarType::Boolean => "Boolean",
            ScalarType::Date => "LocalDate",
            ScalarType::Timestamp => "LocalDateTime",
            ScalarType::Numeric => "BigDecimal",
            ScalarType::Fallback => "Integer",
        }
    }

    /// TypeScript type used by front-end models.
    pub fn ui_type(self) -> &'static str {
        match self {
            ScalarType::Serial | ScalarType::Numeric | ScalarType::Fallback => "number",
            ScalarType::Text => "string",
            ScalarType::Boolean => "boolean",
            ScalarType::Date | ScalarType::Timestamp => "Date",
        }
    }

    /// Import the backend type needs, if it is not in scope by default.
    pub fn backend_import(self) -> Option<BackendImport> {
        match self {
            ScalarType::Date => Some(BackendImport::LocalDate),
            ScalarType::Timestamp => Some(BackendImport::LocalDateTime),
            ScalarType::Numeric => Some(BackendImport::BigDecimal),
            _ => None,
        }
    }
}

/// Java import required by a property type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum BackendImport {
    LocalDate,
    LocalDateTime,
    BigDecimal,
}

impl BackendImport {
    /// Fully qualified class path.
    pub fn path(self) -> &'static str {
        match self {
            BackendImport::LocalDate => "java.time.LocalDate",
            BackendImport::LocalDateTime => "java.time.LocalDateTime",
            BackendImport::BigDecimal => "java.math.BigDecimal",
        }
    }
}

/// TypeScript import of a sibling model module.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct FrontendImport {
    /// Imported symbol, e.g. `Room`.
    pub symbol: String,
    /// Module file stem in kebab-case, e.g. `room-type`.
    pub module: String,
}

impl FrontendImport {
    pub fn new(symbol: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            module: module.into(),
        }
    }
}
