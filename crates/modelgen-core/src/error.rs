use thiserror::Error;

use crate::model::BaseType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("duplicate property '{property}' in table '{table}' (from column '{column}')")]
    DuplicateProperty {
        table: String,
        property: String,
        column: String,
    },
    #[error("base type of table '{table}' cannot move from {from:?} to {to:?}")]
    BaseTypeDowngrade {
        table: String,
        from: BaseType,
        to: BaseType,
    },
}
