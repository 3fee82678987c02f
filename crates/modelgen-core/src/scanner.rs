//! Line-oriented scanner over `CREATE TABLE` schema text.
//!
//! The scanner is a two-state machine. Outside a table it waits for a
//! table-start line. Inside a table it collects column lines until a line
//! carrying the `CONSTRAINT` marker, the next table-start line, or the end
//! of input finalizes the table. Lines of any other shape are skipped.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace, warn};

use crate::classify::classify;
use crate::model::ClassModel;

/// Token whose presence ends a table's column list.
pub const FINALIZE_MARKER: &str = "CONSTRAINT";

static TABLE_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"CREATE TABLE (?:IF NOT EXISTS )?(?:public\.)?(\w+)")
        .expect("table-start pattern is valid")
});

static COLUMN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s(\w+).*,").expect("column pattern is valid"));

/// Where the scanner is in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    InTable,
}

/// Incremental schema scanner.
///
/// Feed lines with [`Scanner::push_line`]; every returned model is
/// finalized and classified. Call [`Scanner::finish`] at end of input to
/// flush a table that was never closed.
#[derive(Debug, Default)]
pub struct Scanner {
    current: Option<ClassModel>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScanState {
        if self.current.is_some() {
            ScanState::InTable
        } else {
            ScanState::Idle
        }
    }

    /// Consume one line, returning a model if this line finalized one.
    pub fn push_line(&mut self, line: &str) -> Option<ClassModel> {
        if line.trim().is_empty() {
            return None;
        }

        if self.current.is_none() {
            if let Some(table_name) = table_start(line) {
                self.open(table_name);
            }
            return None;
        }

        if line.contains(FINALIZE_MARKER) {
            return self.finalize();
        }

        if let Some(table_name) = table_start(line) {
            let finished = self.finalize();
            self.open(table_name);
            return finished;
        }

        if let Some(caps) = COLUMN_RE.captures(line)
            && let Some(model) = self.current.as_mut()
        {
            let (column, sql_type) = (&caps[1], &caps[2]);
            match model.add_column(column, sql_type) {
                Ok(property) => trace!(
                    column,
                    property = property.property_name.as_str(),
                    "column"
                ),
                Err(err) => warn!("skipping column: {}", err),
            }
        }
        None
    }

    /// Flush the table under construction, if any.
    pub fn finish(mut self) -> Option<ClassModel> {
        self.finalize()
    }

    fn open(&mut self, table_name: &str) {
        debug!(table = table_name, "table start");
        self.current = Some(ClassModel::new(table_name));
    }

    fn finalize(&mut self) -> Option<ClassModel> {
        let mut model = self.current.take()?;
        classify(&mut model);
        debug!(
            table = model.table_name(),
            properties = model.properties().len(),
            "table finalized"
        );
        Some(model)
    }
}

fn table_start(line: &str) -> Option<&str> {
    TABLE_START_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Scan a whole schema and return its models in finalization order.
pub fn scan_schema(text: &str) -> Vec<ClassModel> {
    let mut scanner = Scanner::new();
    let mut models: Vec<ClassModel> = text
        .lines()
        .filter_map(|line| scanner.push_line(line))
        .collect();
    models.extend(scanner.finish());
    models
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BaseType, PropertyKind, ScalarType};

    const HOTEL_SCHEMA: &str = r#"
CREATE TABLE public.room_type (
    id SERIAL NOT NULL,
    name text NOT NULL,
    label text NOT NULL,
    description text,
    CONSTRAINT room_type_pk PRIMARY KEY (id)
);

CREATE TABLE public.room (
    id SERIAL NOT NULL,
    number text NOT NULL,
    room_type_id integer NOT NULL,
    is_clean boolean DEFAULT true,
    CONSTRAINT room_pk PRIMARY KEY (id),
    CONSTRAINT room_type_fk FOREIGN KEY (room_type_id)
        REFERENCES public.room_type (id) MATCH FULL,
    extra_after_marker text,
);

CREATE TABLE currency (
    code text NOT NULL,
    rate numeric NOT NULL,
    CONSTRAINT currency_pk PRIMARY KEY (code)
);
"#;

    fn property_names(model: &ClassModel) -> Vec<&str> {
        model
            .properties()
            .iter()
            .map(|p| p.property_name.as_str())
            .collect()
    }

    #[test]
    fn scans_every_table_in_order() {
        let models = scan_schema(HOTEL_SCHEMA);
        let names: Vec<_> = models.iter().map(|m| m.table_name()).collect();
        assert_eq!(names, vec!["room_type", "room", "currency"]);
    }

    #[test]
    fn enum_like_table_is_classified() {
        let models = scan_schema(HOTEL_SCHEMA);
        let room_type = &models[0];
        assert_eq!(room_type.class_name(), "RoomType");
        assert_eq!(room_type.base_type(), Some(BaseType::BaseEnum));
        assert_eq!(property_names(room_type), vec!["description"]);
    }

    #[test]
    fn lines_after_marker_are_ignored() {
        let models = scan_schema(HOTEL_SCHEMA);
        let room = &models[1];
        assert_eq!(room.base_type(), Some(BaseType::Base));
        assert_eq!(property_names(room), vec!["number", "roomType", "isClean"]);
        assert!(room.property("extraAfterMarker").is_none());
        let room_type = room.property("roomType").unwrap();
        assert_eq!(room_type.kind, PropertyKind::Reference);
        assert_eq!(room_type.entity_type, "RoomTypeEntity");
        assert_eq!(room.property("isClean").unwrap().accessor_name, "Clean");
    }

    #[test]
    fn table_without_id_keeps_natural_key() {
        let models = scan_schema(HOTEL_SCHEMA);
        let currency = &models[2];
        assert_eq!(currency.base_type(), None);
        assert_eq!(property_names(currency), vec!["code", "rate"]);
        assert_eq!(currency.primary_key_type(), "String");
    }

    #[test]
    fn consecutive_tables_without_marker_do_not_mix() {
        let schema = "CREATE TABLE guest (\n  id SERIAL,\n  first_name text,\n)\nCREATE TABLE invoice (\n  id SERIAL,\n  total numeric,\n)\n";
        let models = scan_schema(schema);
        assert_eq!(models.len(), 2);
        assert_eq!(property_names(&models[0]), vec!["firstName"]);
        assert_eq!(property_names(&models[1]), vec!["total"]);
        assert!(models[1].backend_imports().len() == 1);
        assert!(models[0].backend_imports().is_empty());
    }

    #[test]
    fn last_table_is_flushed_at_end_of_input() {
        let models = scan_schema("CREATE TABLE note (\n  body text,\n");
        assert_eq!(models.len(), 1);
        assert_eq!(property_names(&models[0]), vec!["body"]);
    }

    #[test]
    fn lines_outside_tables_are_ignored() {
        let schema = "SET search_path = public;\nowner text,\nCREATE TABLE tag (\n  label text,\n  CONSTRAINT x\n);\nfoo bar,\n";
        let models = scan_schema(schema);
        assert_eq!(models.len(), 1);
        assert_eq!(property_names(&models[0]), vec!["label"]);
    }

    #[test]
    fn unmatched_lines_inside_table_are_skipped() {
        let schema = "CREATE TABLE tag (\n  (\n  -- audit columns\n  weird\n  code text,\n  CONSTRAINT x\n";
        let models = scan_schema(schema);
        assert_eq!(property_names(&models[0]), vec!["code"]);
    }

    #[test]
    fn comment_lines_matching_column_pattern_are_collected() {
        let schema = "CREATE TABLE tag (\n  -- audit columns, below\n  code text,\n  CONSTRAINT x\n";
        let models = scan_schema(schema);
        assert_eq!(property_names(&models[0]), vec!["audit", "code"]);
    }

    #[test]
    fn trailing_comment_comma_keeps_column() {
        let schema = "CREATE TABLE product (\n  price numeric -- net price, excl. VAT\n  code text,\n  CONSTRAINT product_pk PRIMARY KEY (code)\n";
        let models = scan_schema(schema);
        assert_eq!(property_names(&models[0]), vec!["price", "code"]);
        assert_eq!(
            models[0].property("price").unwrap().kind,
            PropertyKind::Scalar(ScalarType::Numeric)
        );
    }

    #[test]
    fn commented_constraint_still_finalizes() {
        let schema = "CREATE TABLE product (\n  code text,\n  -- CONSTRAINT old_pk PRIMARY KEY (code)\n  late text,\n";
        let models = scan_schema(schema);
        assert_eq!(models.len(), 1);
        assert_eq!(property_names(&models[0]), vec!["code"]);
    }

    #[test]
    fn duplicate_properties_are_skipped() {
        let schema = "CREATE TABLE booking (\n  room text,\n  room_id integer,\n  CONSTRAINT x\n";
        let models = scan_schema(schema);
        let booking = &models[0];
        assert_eq!(booking.properties().len(), 1);
        assert_eq!(
            booking.properties()[0].kind,
            PropertyKind::Scalar(ScalarType::Text)
        );
    }

    #[test]
    fn if_not_exists_prefix_is_accepted() {
        let models = scan_schema("CREATE TABLE IF NOT EXISTS public.floor (\n  level integer,\n");
        assert_eq!(models[0].table_name(), "floor");
    }

    #[test]
    fn scanner_reports_state() {
        let mut scanner = Scanner::new();
        assert_eq!(scanner.state(), ScanState::Idle);
        assert!(scanner.push_line("CREATE TABLE room (").is_none());
        assert_eq!(scanner.state(), ScanState::InTable);
        assert!(scanner.push_line("   ").is_none());
        assert!(scanner.push_line("  code text,").is_none());
        let model = scanner.push_line("  CONSTRAINT room_pk PRIMARY KEY (code)");
        assert_eq!(model.map(|m| m.table_name().to_string()), Some("room".into()));
        assert_eq!(scanner.state(), ScanState::Idle);
        assert!(scanner.finish().is_none());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(scan_schema("").is_empty());
        assert!(scan_schema("\n\n  \n").is_empty());
    }
}
