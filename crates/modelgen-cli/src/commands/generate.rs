use std::fs;
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::ValueEnum;
use colored::Colorize;
use modelgen_config::GeneratorConfig;
use modelgen_core::{ClassModel, scan_schema};
use modelgen_exporter::{Artifact, render_artifact, store_fragments};
use tracing::{error, info};

use crate::utils::{load_config, read_schema, write_file};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ArtifactArg {
    Entity,
    Dto,
    Repository,
    Mapper,
    Service,
    Controller,
    UiModel,
    UiService,
}

impl From<ArtifactArg> for Artifact {
    fn from(value: ArtifactArg) -> Self {
        match value {
            ArtifactArg::Entity => Artifact::Entity,
            ArtifactArg::Dto => Artifact::Dto,
            ArtifactArg::Repository => Artifact::Repository,
            ArtifactArg::Mapper => Artifact::Mapper,
            ArtifactArg::Service => Artifact::Service,
            ArtifactArg::Controller => Artifact::Controller,
            ArtifactArg::UiModel => Artifact::UiModel,
            ArtifactArg::UiService => Artifact::UiService,
        }
    }
}

pub fn cmd_generate(
    schema: PathBuf,
    backend_dir: Option<PathBuf>,
    frontend_dir: Option<PathBuf>,
    only: Vec<ArtifactArg>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path.as_deref())?.with_output_dirs(backend_dir, frontend_dir);
    let text = read_schema(&schema)?;
    let models = scan_schema(&text);
    info!(tables = models.len(), schema = %schema.display(), "schema scanned");

    let artifacts = select_artifacts(&only);
    let mut failures = 0usize;
    for model in &models {
        failures += emit_model(model, &artifacts, &config);
    }
    failures += append_store_fragments(&models, &config);

    if failures > 0 {
        bail!("{failures} output(s) could not be written");
    }
    println!(
        "{} {} table(s)",
        "Generated".bright_green().bold(),
        models.len()
    );
    Ok(())
}

fn select_artifacts(only: &[ArtifactArg]) -> Vec<Artifact> {
    if only.is_empty() {
        return Artifact::ALL.to_vec();
    }
    Artifact::ALL
        .into_iter()
        .filter(|artifact| only.iter().any(|arg| Artifact::from(*arg) == *artifact))
        .collect()
}

/// Render and write every selected artifact of one model.
///
/// Returns the number of artifacts that failed.
fn emit_model(model: &ClassModel, artifacts: &[Artifact], config: &GeneratorConfig) -> usize {
    let mut failures = 0;
    for &artifact in artifacts {
        let path = artifact.output_path(model, config);
        let written = render_artifact(artifact, model, config)
            .map_err(anyhow::Error::from)
            .and_then(|source| write_file(&path, &source));
        match written {
            Ok(()) => println!("  {} {}", "+".bright_green(), path.display()),
            Err(err) => {
                error!(table = model.table_name(), ?artifact, "{err:#}");
                failures += 1;
            }
        }
    }
    failures
}

/// Splice every model into the configured store documents.
///
/// A document that cannot be read or edited is left untouched.
fn append_store_fragments(models: &[ClassModel], config: &GeneratorConfig) -> usize {
    let Some(store) = config.store() else {
        return 0;
    };
    if models.is_empty() {
        return 0;
    }

    let mut failures = 0;
    for (file, appender) in store_fragments(store) {
        let path = config.frontend_dir().join(file);
        let result = fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|document| {
                let edited = models.iter().try_fold(document, |doc, model| {
                    appender.append(model, &doc)
                })?;
                write_file(&path, &edited)
            });
        match result {
            Ok(()) => println!("  {} {}", "~".bright_yellow(), path.display()),
            Err(err) => {
                error!(fragment = appender.fragment(), path = %path.display(), "{err:#}");
                failures += 1;
            }
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelgen_config::StoreConfig;
    use rstest::rstest;
    use std::path::Path;
    use tempfile::tempdir;

    fn output(root: &Path, relative: &str) -> PathBuf {
        root.join(relative)
    }

    const SCHEMA: &str = "\
CREATE TABLE public.room_type (
    id SERIAL NOT NULL,
    name text NOT NULL,
    label text NOT NULL,
    CONSTRAINT room_type_pk PRIMARY KEY (id)
);
CREATE TABLE public.room (
    id SERIAL NOT NULL,
    number text NOT NULL,
    room_type_id integer NOT NULL,
    CONSTRAINT room_pk PRIMARY KEY (id)
);
";

    fn write_schema(dir: &Path) -> PathBuf {
        let path = dir.join("schema.sql");
        fs::write(&path, SCHEMA).unwrap();
        path
    }

    fn write_config(dir: &Path, config: &GeneratorConfig) -> PathBuf {
        let path = dir.join("modelgen.json");
        fs::write(&path, serde_json::to_string(config).unwrap()).unwrap();
        path
    }

    #[rstest]
    #[case(vec![], 8)]
    #[case(vec![ArtifactArg::UiService, ArtifactArg::Entity], 2)]
    fn select_artifacts_keeps_emission_order(#[case] only: Vec<ArtifactArg>, #[case] count: usize) {
        let selected = select_artifacts(&only);
        assert_eq!(selected.len(), count);
        assert_eq!(selected.first(), Some(&Artifact::Entity));
    }

    #[test]
    fn generates_all_artifacts_per_table() {
        let tmp = tempdir().unwrap();
        let schema = write_schema(tmp.path());
        let backend = tmp.path().join("server");
        let frontend = tmp.path().join("web");
        let config = write_config(tmp.path(), &GeneratorConfig::default());

        cmd_generate(
            schema,
            Some(backend.clone()),
            Some(frontend.clone()),
            vec![],
            Some(config),
        )
        .unwrap();

        for relative in [
            "entity/RoomEntity.java",
            "rest/dto/RoomType.java",
            "repository/RoomRepository.java",
            "mapper/RoomTypeMapper.java",
            "rest/service/RoomService.java",
            "rest/controller/RoomTypeController.java",
        ] {
            assert!(output(&backend, relative).exists(), "{relative}");
        }
        assert!(output(&frontend, "models/room.ts").exists());
        assert!(output(&frontend, "services/room-type.service.ts").exists());

        let entity = fs::read_to_string(output(&backend, "entity/RoomEntity.java")).unwrap();
        assert!(entity.contains("private RoomTypeEntity roomType;"));
    }

    #[test]
    fn only_limits_artifacts() {
        let tmp = tempdir().unwrap();
        let schema = write_schema(tmp.path());
        let config = write_config(tmp.path(), &GeneratorConfig::default());
        let backend = tmp.path().join("server");
        let frontend = tmp.path().join("web");

        cmd_generate(
            schema,
            Some(backend.clone()),
            Some(frontend.clone()),
            vec![ArtifactArg::UiModel],
            Some(config),
        )
        .unwrap();

        assert!(output(&frontend, "models/room.ts").exists());
        assert!(!backend.exists());
    }

    #[test]
    fn missing_schema_is_fatal() {
        let tmp = tempdir().unwrap();
        let config = write_config(tmp.path(), &GeneratorConfig::default());
        let err = cmd_generate(
            tmp.path().join("missing.sql"),
            None,
            None,
            vec![],
            Some(config),
        )
        .unwrap_err();
        assert!(err.to_string().contains("read schema"));
    }

    #[test]
    fn write_failure_continues_and_reports() {
        let tmp = tempdir().unwrap();
        let schema = write_schema(tmp.path());
        let config = write_config(tmp.path(), &GeneratorConfig::default());
        // A regular file where the backend root should be makes every backend write fail.
        let backend = tmp.path().join("blocked");
        fs::write(&backend, "").unwrap();
        let frontend = tmp.path().join("web");

        let err = cmd_generate(
            schema,
            Some(backend),
            Some(frontend.clone()),
            vec![],
            Some(config),
        )
        .unwrap_err();

        assert!(err.to_string().contains("12 output(s)"));
        assert!(output(&frontend, "models/room.ts").exists());
        assert!(output(&frontend, "services/room.service.ts").exists());
    }

    #[test]
    fn store_documents_receive_fragments() {
        let tmp = tempdir().unwrap();
        let schema = write_schema(tmp.path());
        let frontend = tmp.path().join("web");
        let store_dir = frontend.join("store");
        fs::create_dir_all(&store_dir).unwrap();
        fs::write(store_dir.join("rack.actions.ts"), "import { createAction } from '@ngrx/store';\n").unwrap();
        fs::write(
            store_dir.join("rack.reducer.ts"),
            "export interface State {\n}\nexport const initialState: State = {\n};\nexport const reducer = createReducer(\n    initialState,\n);\n",
        )
        .unwrap();
        fs::write(
            store_dir.join("rack.effects.ts"),
            "export class RackEffects {\n  constructor(\n    private actions$: Actions,\n    private errorHandlingService: ErrorHandlingService\n  ) {}\n}\n",
        )
        .unwrap();

        let config = GeneratorConfig {
            store: Some(StoreConfig {
                feature: "room_rack".into(),
                actions_file: "store/rack.actions.ts".into(),
                reducer_file: "store/rack.reducer.ts".into(),
                effects_file: "store/rack.effects.ts".into(),
            }),
            ..Default::default()
        };
        let config = write_config(tmp.path(), &config);

        cmd_generate(
            schema,
            Some(tmp.path().join("server")),
            Some(frontend),
            vec![ArtifactArg::UiModel],
            Some(config),
        )
        .unwrap();

        let actions = fs::read_to_string(store_dir.join("rack.actions.ts")).unwrap();
        assert!(actions.contains("export const loadRoomTypes = createAction('[Room Rack] Load RoomTypes');"));
        assert!(actions.contains("export const loadRooms = createAction('[Room Rack] Load Rooms');"));

        let reducer = fs::read_to_string(store_dir.join("rack.reducer.ts")).unwrap();
        assert!(reducer.contains("    roomTypes: RoomType[];"));
        assert!(reducer.contains("    rooms: Room[];"));

        let effects = fs::read_to_string(store_dir.join("rack.effects.ts")).unwrap();
        assert!(effects.contains("withLatestFrom(this.store.pipe(select(fromRoomRack.selectRoomTypes)))"));
        assert!(effects.contains("    switchMap(() => this.roomService.getAll()"));
    }

    #[test]
    fn missing_store_document_is_reported() {
        let tmp = tempdir().unwrap();
        let schema = write_schema(tmp.path());
        let config = GeneratorConfig {
            store: Some(StoreConfig {
                feature: "room_rack".into(),
                actions_file: "store/a.ts".into(),
                reducer_file: "store/r.ts".into(),
                effects_file: "store/e.ts".into(),
            }),
            ..Default::default()
        };
        let config = write_config(tmp.path(), &config);

        let err = cmd_generate(
            schema,
            Some(tmp.path().join("server")),
            Some(tmp.path().join("web")),
            vec![ArtifactArg::Dto],
            Some(config),
        )
        .unwrap_err();
        assert!(err.to_string().contains("3 output(s)"));
    }
}
