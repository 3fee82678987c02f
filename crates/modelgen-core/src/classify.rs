//! Base-shape classification.
//!
//! A table with an `id` column extends a common base; one that also has
//! `name` extends the named base; one that further has `label` is enum-like.
//! Each step only runs when the previous one matched, and the matched
//! properties move into the base type.

use tracing::{debug, warn};

use crate::model::{BaseType, ClassModel};

const STEPS: [BaseType; 3] = [BaseType::Base, BaseType::BaseWithName, BaseType::BaseEnum];

/// Classify a finished model in place and return its base type.
pub fn classify(model: &mut ClassModel) -> Option<BaseType> {
    for step in STEPS {
        let absorbed = step.absorbed_property();
        if !model.has_property(absorbed) {
            break;
        }
        if let Err(err) = model.upgrade_base_type(step) {
            warn!("{}", err);
            break;
        }
        model.remove_property(absorbed);
    }
    debug!(
        table = model.table_name(),
        base_type = ?model.base_type(),
        "classified"
    );
    model.base_type()
}
