use std::path::PathBuf;

use modelgen_config::GeneratorConfig;
use modelgen_core::ClassModel;

use crate::angular::AngularExporter;
use crate::error::ExportError;
use crate::spring::SpringExporter;

/// Which output root an artifact is written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Backend,
    Frontend,
}

/// One kind of generated file per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Entity,
    Dto,
    Repository,
    Mapper,
    Service,
    Controller,
    UiModel,
    UiService,
}

impl Artifact {
    /// Every artifact, in emission order.
    pub const ALL: [Artifact; 8] = [
        Artifact::Entity,
        Artifact::Dto,
        Artifact::Repository,
        Artifact::Mapper,
        Artifact::Service,
        Artifact::Controller,
        Artifact::UiModel,
        Artifact::UiService,
    ];

    pub fn side(self) -> Side {
        match self {
            Artifact::UiModel | Artifact::UiService => Side::Frontend,
            _ => Side::Backend,
        }
    }

    /// Dotted sub-package for backend artifacts, directory for frontend ones.
    pub fn location(self) -> &'static str {
        match self {
            Artifact::Entity => "entity",
            Artifact::Dto => "rest.dto",
            Artifact::Repository => "repository",
            Artifact::Mapper => "mapper",
            Artifact::Service => "rest.service",
            Artifact::Controller => "rest.controller",
            Artifact::UiModel => "models",
            Artifact::UiService => "services",
        }
    }

    pub fn file_name(self, model: &ClassModel) -> String {
        let class = model.class_name();
        let kebab = &model.names().kebab;
        match self {
            Artifact::Entity => format!("{class}Entity.java"),
            Artifact::Dto => format!("{class}.java"),
            Artifact::Repository => format!("{class}Repository.java"),
            Artifact::Mapper => format!("{class}Mapper.java"),
            Artifact::Service => format!("{class}Service.java"),
            Artifact::Controller => format!("{class}Controller.java"),
            Artifact::UiModel => format!("{kebab}.ts"),
            Artifact::UiService => format!("{kebab}.service.ts"),
        }
    }

    /// Path relative to the artifact's side root.
    pub fn relative_path(self, model: &ClassModel) -> PathBuf {
        let mut path: PathBuf = self.location().split('.').collect();
        path.push(self.file_name(model));
        path
    }

    /// Path under the configured backend or frontend directory.
    pub fn output_path(self, model: &ClassModel, config: &GeneratorConfig) -> PathBuf {
        let root = match self.side() {
            Side::Backend => config.backend_dir(),
            Side::Frontend => config.frontend_dir(),
        };
        root.join(self.relative_path(model))
    }
}

/// Standardized interface of the per-side exporters.
///
/// Emitters are pure: they read a finished model and never change it.
pub trait ArtifactEmitter {
    fn side(&self) -> Side;

    fn render(&self, artifact: Artifact, model: &ClassModel) -> Result<String, ExportError>;
}

/// Render one artifact of a model with the exporter for its side.
pub fn render_artifact(
    artifact: Artifact,
    model: &ClassModel,
    config: &GeneratorConfig,
) -> Result<String, ExportError> {
    match artifact.side() {
        Side::Backend => SpringExporter::new(config).render(artifact, model),
        Side::Frontend => AngularExporter::new(config).render(artifact, model),
    }
}
