//! Render finished class models into source files.
//!
//! Backend artifacts target Spring (JPA, MapStruct, REST), front-end artifacts
//! target Angular. The [`ngrx`] appenders edit existing store documents instead
//! of producing new files.

pub mod angular;
pub mod artifact;
pub mod error;
pub mod ngrx;
pub mod spring;

pub use angular::AngularExporter;
pub use artifact::{Artifact, ArtifactEmitter, Side, render_artifact};
pub use error::ExportError;
pub use ngrx::{
    ActionFragment, EffectsFragment, ReducerFragment, StateFragmentAppender, StoreNames,
    store_fragments,
};
pub use spring::SpringExporter;
