use modelgen_config::GeneratorConfig;
use modelgen_core::ClassModel;

use crate::artifact::{Artifact, ArtifactEmitter, Side};
use crate::error::ExportError;

/// Renders the TypeScript front-end artifacts: model interface and
/// Angular data service.
pub struct AngularExporter<'a> {
    config: &'a GeneratorConfig,
}

impl ArtifactEmitter for AngularExporter<'_> {
    fn side(&self) -> Side {
        Side::Frontend
    }

    fn render(&self, artifact: Artifact, model: &ClassModel) -> Result<String, ExportError> {
        match artifact {
            Artifact::UiModel => Ok(self.render_model(model)),
            Artifact::UiService => Ok(self.render_service(model)),
            _ => Err(ExportError::UnsupportedArtifact {
                artifact,
                side: self.side(),
            }),
        }
    }
}

impl<'a> AngularExporter<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Interface with every property optional.
    pub fn render_model(&self, model: &ClassModel) -> String {
        let class = model.class_name();
        let mut imports = Vec::new();
        if let Some(base) = model.base_type() {
            imports.push(format!(
                "import {{ {} }} from './{}';",
                base.ui_interface(),
                base.ui_module()
            ));
        }
        imports.extend(
            model
                .frontend_imports()
                .iter()
                .filter(|import| import.symbol != class)
                .map(|import| format!("import {{ {} }} from './{}';", import.symbol, import.module)),
        );

        let mut lines = Vec::new();
        if !imports.is_empty() {
            lines.extend(imports);
            lines.push(String::new());
        }
        match model.base_type() {
            Some(base) => lines.push(format!(
                "export interface {class} extends {} {{",
                base.ui_interface()
            )),
            None => lines.push(format!("export interface {class} {{")),
        }
        for property in model.properties() {
            lines.push(format!(
                "    {}?: {};",
                property.property_name, property.ui_type
            ));
        }
        lines.push("}".into());
        lines.push(String::new());
        lines.join("\n")
    }

    /// Injectable service fetching the collection endpoint.
    pub fn render_service(&self, model: &ClassModel) -> String {
        let class = model.class_name();
        let names = model.names();
        let config_name = self.config.frontend_config_name();
        [
            "import { HttpClient } from '@angular/common/http';".to_string(),
            "import { Injectable } from '@angular/core';".into(),
            "import { Observable } from 'rxjs';".into(),
            format!("import {{ {class} }} from '../models/{}';", names.kebab),
            String::new(),
            format!(
                "import {{ {config_name} }} from '{}';",
                self.config.frontend_config_module()
            ),
            String::new(),
            "@Injectable({".into(),
            "  providedIn: 'root'".into(),
            "})".into(),
            format!("export class {class}Service {{"),
            String::new(),
            format!(
                "  private readonly baseUrl: string = {config_name}.serverDomain + '{}/{}';",
                self.config.api_prefix(),
                names.kebab_plural
            ),
            String::new(),
            "  constructor(private http: HttpClient) { }".into(),
            String::new(),
            format!("  getAll(): Observable<{class}[]> {{"),
            format!("    return this.http.get<{class}[]>(this.baseUrl);"),
            "  }".into(),
            "}".into(),
            String::new(),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use modelgen_core::scan_schema;

    const SCHEMA: &str = "\
CREATE TABLE public.room_status (
    id SERIAL NOT NULL,
    name text NOT NULL,
    label text NOT NULL,
    CONSTRAINT room_status_pk PRIMARY KEY (id)
);
CREATE TABLE public.room (
    id SERIAL NOT NULL,
    number text NOT NULL,
    room_status_id integer NOT NULL,
    is_active boolean NOT NULL,
    opened timestamp,
    price numeric(10, 2),
    CONSTRAINT room_pk PRIMARY KEY (id)
);
CREATE TABLE public.audit_log (
    entry_no SERIAL NOT NULL,
    message text,
    CONSTRAINT audit_log_pk PRIMARY KEY (entry_no)
);
";

    fn model(table: &str) -> ClassModel {
        scan_schema(SCHEMA)
            .into_iter()
            .find(|m| m.table_name() == table)
            .unwrap()
    }

    #[test]
    fn model_interface_with_reference_import() {
        let config = GeneratorConfig::default();
        let out = AngularExporter::new(&config).render_model(&model("room"));
        assert_snapshot!(out, @r#"
import { BaseDto } from './base-dto';
import { RoomStatus } from './room-status';

export interface Room extends BaseDto {
    number?: string;
    roomStatus?: RoomStatus;
    isActive?: boolean;
    opened?: Date;
    price?: number;
}
"#);
    }

    #[test]
    fn enum_model_has_no_own_properties() {
        let config = GeneratorConfig::default();
        let out = AngularExporter::new(&config).render_model(&model("room_status"));
        assert_eq!(
            out,
            "import { BaseEnumDto } from './base-enum-dto';\n\nexport interface RoomStatus extends BaseEnumDto {\n}\n"
        );
    }

    #[test]
    fn unclassified_model_has_no_imports() {
        let config = GeneratorConfig::default();
        let out = AngularExporter::new(&config).render_model(&model("audit_log"));
        assert_eq!(
            out,
            "export interface AuditLog {\n    entryNo?: number;\n    message?: string;\n}\n"
        );
    }

    #[test]
    fn self_reference_is_not_imported() {
        let mut node = ClassModel::new("node");
        node.add_column("node_id", "integer").unwrap();
        let config = GeneratorConfig::default();
        let out = AngularExporter::new(&config).render_model(&node);
        assert!(!out.contains("import"));
        assert!(out.contains("    node?: Node;"));
    }

    #[test]
    fn service_targets_plural_endpoint() {
        let config = GeneratorConfig {
            frontend_config_name: "propManConfig".into(),
            frontend_config_module: "../../config/prop-man-config".into(),
            ..Default::default()
        };
        let out = AngularExporter::new(&config).render_service(&model("room_status"));
        assert!(out.contains("import { RoomStatus } from '../models/room-status';"));
        assert!(out.contains("import { propManConfig } from '../../config/prop-man-config';"));
        assert!(out.contains("export class RoomStatusService {"));
        assert!(out.contains(
            "  private readonly baseUrl: string = propManConfig.serverDomain + '/api/room-statuses';"
        ));
        assert!(out.contains("  getAll(): Observable<RoomStatus[]> {"));
        assert!(out.contains("    return this.http.get<RoomStatus[]>(this.baseUrl);"));
    }

    #[test]
    fn backend_artifacts_are_rejected() {
        let config = GeneratorConfig::default();
        let result = AngularExporter::new(&config).render(Artifact::Entity, &model("room"));
        assert!(matches!(
            result,
            Err(ExportError::UnsupportedArtifact {
                side: Side::Frontend,
                ..
            })
        ));
    }
}
