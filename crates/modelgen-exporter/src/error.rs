use thiserror::Error;

use crate::artifact::{Artifact, Side};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("anchor line `{anchor}` not found in {fragment} document")]
    AnchorNotFound {
        fragment: &'static str,
        anchor: &'static str,
    },
    #[error("{artifact:?} is not rendered by the {side:?} exporter")]
    UnsupportedArtifact { artifact: Artifact, side: Side },
}
