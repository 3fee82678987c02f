use modelgen_config::GeneratorConfig;
use modelgen_core::{ClassModel, Property};

use crate::artifact::{Artifact, ArtifactEmitter, Side};
use crate::error::ExportError;

const INDENT: &str = "    ";

/// Renders the Java backend artifacts: JPA entity, DTO, repository,
/// MapStruct mapper, Spring service and REST controller.
pub struct SpringExporter<'a> {
    config: &'a GeneratorConfig,
}

impl ArtifactEmitter for SpringExporter<'_> {
    fn side(&self) -> Side {
        Side::Backend
    }

    fn render(&self, artifact: Artifact, model: &ClassModel) -> Result<String, ExportError> {
        let rendered = match artifact {
            Artifact::Entity => self.render_entity(model),
            Artifact::Dto => self.render_dto(model),
            Artifact::Repository => self.render_repository(model),
            Artifact::Mapper => self.render_mapper(model),
            Artifact::Service => self.render_service(model),
            Artifact::Controller => self.render_controller(model),
            Artifact::UiModel | Artifact::UiService => {
                return Err(ExportError::UnsupportedArtifact {
                    artifact,
                    side: self.side(),
                });
            }
        };
        Ok(rendered)
    }
}

impl<'a> SpringExporter<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    fn package(&self, artifact: Artifact) -> String {
        self.config.package_for(artifact.location())
    }

    fn class_import(&self, artifact: Artifact, class: &str) -> String {
        format!("import {}.{};", self.package(artifact), class)
    }

    /// JPA entity mapped onto the source table.
    pub fn render_entity(&self, model: &ClassModel) -> String {
        let class = model.class_name();
        let mut lines = vec![
            format!("package {};", self.package(Artifact::Entity)),
            String::new(),
            "import javax.persistence.*;".into(),
        ];
        lines.extend(
            model
                .backend_imports()
                .iter()
                .map(|import| format!("import {};", import.path())),
        );
        lines.push(String::new());
        lines.push("@Entity".into());
        lines.push(format!("@Table(name = \"{}\")", model.table_name()));
        lines.push(class_declaration(
            &format!("{class}Entity"),
            model.base_type().map(|b| b.entity_class()),
        ));
        lines.push(String::new());

        for property in model.properties() {
            if property.is_reference() {
                lines.push(format!(
                    "{INDENT}@ManyToOne(cascade = {{CascadeType.PERSIST,"
                ));
                lines.push(format!(
                    "{INDENT}                      CascadeType.DETACH, CascadeType.REFRESH}})"
                ));
                lines.push(format!(
                    "{INDENT}@JoinColumn(name = \"{}\")",
                    property.column_name
                ));
            } else {
                lines.push(format!("{INDENT}@Column(name = \"{}\")", property.column_name));
            }
            lines.push(format!(
                "{INDENT}private {} {};",
                property.entity_type, property.property_name
            ));
            lines.push(String::new());
        }

        for property in model.properties() {
            push_accessors(&mut lines, property, &property.entity_type);
        }

        lines.push("}".into());
        finish(lines)
    }

    /// Transfer object exchanged over the REST API.
    pub fn render_dto(&self, model: &ClassModel) -> String {
        let mut lines = vec![
            format!("package {};", self.package(Artifact::Dto)),
            String::new(),
        ];
        if !model.backend_imports().is_empty() {
            lines.extend(
                model
                    .backend_imports()
                    .iter()
                    .map(|import| format!("import {};", import.path())),
            );
            lines.push(String::new());
        }
        lines.push(class_declaration(
            model.class_name(),
            model.base_type().map(|b| b.interchange_class()),
        ));
        lines.push(String::new());

        for property in model.properties() {
            lines.push(format!(
                "{INDENT}private {} {};",
                property.interchange_type, property.property_name
            ));
        }
        if !model.properties().is_empty() {
            lines.push(String::new());
        }
        for property in model.properties() {
            push_accessors(&mut lines, property, &property.interchange_type);
        }

        lines.push("}".into());
        finish(lines)
    }

    /// Spring Data repository keyed by the model's primary key type.
    pub fn render_repository(&self, model: &ClassModel) -> String {
        let class = model.class_name();
        let key = boxed(model.primary_key_type());
        finish(vec![
            format!("package {};", self.package(Artifact::Repository)),
            String::new(),
            self.class_import(Artifact::Entity, &format!("{class}Entity")),
            "import org.springframework.data.jpa.repository.JpaRepository;".into(),
            String::new(),
            "import java.util.List;".into(),
            String::new(),
            format!(
                "public interface {class}Repository extends JpaRepository<{class}Entity, {key}> {{"
            ),
            format!("{INDENT}List<{class}Entity> findAll();"),
            "}".into(),
        ])
    }

    /// MapStruct mapper between entity and DTO, single and collection forms.
    pub fn render_mapper(&self, model: &ClassModel) -> String {
        let class = model.class_name();
        finish(vec![
            format!("package {};", self.package(Artifact::Mapper)),
            String::new(),
            self.class_import(Artifact::Entity, &format!("{class}Entity")),
            self.class_import(Artifact::Dto, class),
            "import org.mapstruct.Mapper;".into(),
            String::new(),
            "import java.util.Collection;".into(),
            "import java.util.List;".into(),
            String::new(),
            "@Mapper(componentModel = \"spring\")".into(),
            format!("public interface {class}Mapper {{"),
            format!("{INDENT}{class} entityToDto({class}Entity entity);"),
            format!("{INDENT}{class}Entity dtoToEntity({class} dto);"),
            String::new(),
            format!("{INDENT}List<{class}> entityToDto(Collection<{class}Entity> entities);"),
            format!("{INDENT}List<{class}Entity> dtoToEntity(Collection<{class}> items);"),
            "}".into(),
        ])
    }

    /// Service returning every row as DTOs.
    pub fn render_service(&self, model: &ClassModel) -> String {
        let class = model.class_name();
        let camel = &model.names().camel;
        finish(vec![
            format!("package {};", self.package(Artifact::Service)),
            String::new(),
            self.class_import(Artifact::Entity, &format!("{class}Entity")),
            self.class_import(Artifact::Mapper, &format!("{class}Mapper")),
            self.class_import(Artifact::Repository, &format!("{class}Repository")),
            self.class_import(Artifact::Dto, class),
            "import org.springframework.beans.factory.annotation.Autowired;".into(),
            "import org.springframework.stereotype.Service;".into(),
            String::new(),
            "import java.util.List;".into(),
            String::new(),
            "@Service".into(),
            format!("public class {class}Service {{"),
            format!("{INDENT}@Autowired"),
            format!("{INDENT}private {class}Mapper {camel}Mapper;"),
            String::new(),
            format!("{INDENT}@Autowired"),
            format!("{INDENT}private {class}Repository {camel}Repository;"),
            String::new(),
            format!("{INDENT}public List<{class}> getAll() {{"),
            format!("{INDENT}{INDENT}List<{class}Entity> entities = {camel}Repository.findAll();"),
            format!("{INDENT}{INDENT}return {camel}Mapper.entityToDto(entities);"),
            format!("{INDENT}}}"),
            "}".into(),
        ])
    }

    /// REST controller exposing `GET <apiPrefix>/<kebab-plural>`.
    pub fn render_controller(&self, model: &ClassModel) -> String {
        let class = model.class_name();
        let names = model.names();
        finish(vec![
            format!("package {};", self.package(Artifact::Controller)),
            String::new(),
            self.class_import(Artifact::Dto, class),
            self.class_import(Artifact::Service, &format!("{class}Service")),
            "import org.springframework.beans.factory.annotation.Autowired;".into(),
            "import org.springframework.web.bind.annotation.GetMapping;".into(),
            "import org.springframework.web.bind.annotation.RequestMapping;".into(),
            "import org.springframework.web.bind.annotation.RestController;".into(),
            String::new(),
            "import java.util.List;".into(),
            String::new(),
            "@RestController".into(),
            format!(
                "@RequestMapping(\"{}/{}\")",
                self.config.api_prefix(),
                names.kebab_plural
            ),
            format!("public class {class}Controller {{"),
            format!("{INDENT}@Autowired"),
            format!("{INDENT}private {class}Service {}Service;", names.camel),
            String::new(),
            format!("{INDENT}@GetMapping"),
            format!("{INDENT}public List<{class}> getAll() {{"),
            format!("{INDENT}{INDENT}return {}Service.getAll();", names.camel),
            format!("{INDENT}}}"),
            "}".into(),
        ])
    }
}

fn class_declaration(class: &str, superclass: Option<&str>) -> String {
    match superclass {
        Some(parent) => format!("public class {class} extends {parent} {{"),
        None => format!("public class {class} {{"),
    }
}

fn push_accessors(lines: &mut Vec<String>, property: &Property, java_type: &str) {
    let name = &property.property_name;
    let accessor = &property.accessor_name;
    lines.push(format!("{INDENT}public {java_type} get{accessor}() {{"));
    lines.push(format!("{INDENT}{INDENT}return {name};"));
    lines.push(format!("{INDENT}}}"));
    lines.push(String::new());
    lines.push(format!(
        "{INDENT}public void set{accessor}({java_type} {name}) {{"
    ));
    lines.push(format!("{INDENT}{INDENT}this.{name} = {name};"));
    lines.push(format!("{INDENT}}}"));
    lines.push(String::new());
}

/// Generic type arguments cannot be primitives.
fn boxed(java_type: &str) -> &str {
    match java_type {
        "int" => "Integer",
        "boolean" => "Boolean",
        other => other,
    }
}

fn finish(mut lines: Vec<String>) -> String {
    lines.push(String::new());
    lines.join("\n")
}
