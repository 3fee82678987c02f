//! Appenders that splice a model's slice into existing NgRx store files.
//!
//! Each appender takes the current text of one store document and returns the
//! edited text. Insertions are located by anchor lines compared after trimming
//! surrounding whitespace.

use std::path::Path;

use modelgen_config::StoreConfig;
use modelgen_core::{BaseType, ClassModel};
use modelgen_naming::{humanize, to_camel_case, to_pascal_case};

use crate::error::ExportError;

const STATE_ANCHOR: &str = "export interface State {";
const INITIAL_STATE_ANCHOR: &str = "export const initialState: State = {";
const REDUCER_ANCHOR: &str = "initialState,";
const CONSTRUCTOR_CLOSE_ANCHOR: &str = ") {}";

/// Identifiers of the store feature the fragments are appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreNames {
    /// Action type prefix, e.g. `Room Rack`.
    pub label: String,
    /// Namespace the actions module is imported as, e.g. `RoomRackActions`.
    pub actions: String,
    /// Namespace the reducer module is imported as, e.g. `fromRoomRack`.
    pub reducer: String,
    /// Key of the feature inside the root state, e.g. `roomRack`.
    pub state_key: String,
}

impl StoreNames {
    /// Derive all names from a snake_case feature such as `room_rack`.
    pub fn from_feature(feature: &str) -> Self {
        let pascal = to_pascal_case(feature);
        Self {
            label: humanize(feature),
            actions: format!("{pascal}Actions"),
            reducer: format!("from{pascal}"),
            state_key: to_camel_case(&pascal),
        }
    }
}

/// Edits one store document to register a model.
pub trait StateFragmentAppender {
    /// Short name of the document kind, used in errors and logs.
    fn fragment(&self) -> &'static str;

    fn append(&self, model: &ClassModel, document: &str) -> Result<String, ExportError>;
}

pub struct ActionFragment {
    names: StoreNames,
}

pub struct ReducerFragment {
    names: StoreNames,
}

pub struct EffectsFragment {
    names: StoreNames,
}

impl ActionFragment {
    pub fn new(names: StoreNames) -> Self {
        Self { names }
    }
}

impl ReducerFragment {
    pub fn new(names: StoreNames) -> Self {
        Self { names }
    }
}

impl EffectsFragment {
    pub fn new(names: StoreNames) -> Self {
        Self { names }
    }
}

/// The three store documents of a feature with their appenders.
pub fn store_fragments(store: &StoreConfig) -> Vec<(&Path, Box<dyn StateFragmentAppender>)> {
    let names = StoreNames::from_feature(store.feature());
    let actions: Box<dyn StateFragmentAppender> = Box::new(ActionFragment::new(names.clone()));
    let reducer: Box<dyn StateFragmentAppender> = Box::new(ReducerFragment::new(names.clone()));
    let effects: Box<dyn StateFragmentAppender> = Box::new(EffectsFragment::new(names));
    vec![
        (store.actions_file(), actions),
        (store.reducer_file(), reducer),
        (store.effects_file(), effects),
    ]
}

impl StateFragmentAppender for ActionFragment {
    fn fragment(&self) -> &'static str {
        "actions"
    }

    fn append(&self, model: &ClassModel, document: &str) -> Result<String, ExportError> {
        let class = model.class_name();
        let names = model.names();
        let label = &self.names.label;
        let mut doc = Document::parse(document);

        doc.prepend(model_import(model));
        doc.push_all([
            String::new(),
            format!(
                "export const load{0} = createAction('[{label}] Load {0}');",
                names.pascal_plural
            ),
            String::new(),
            format!("export const {}LoadedSuccess = createAction(", names.camel_plural),
            format!("    '[{label}] {} Loaded Success',", names.pascal_plural),
            format!("    props<{{{}: {class}[]}}>()", names.camel_plural),
            ");".into(),
        ]);
        Ok(doc.render())
    }
}

impl StateFragmentAppender for ReducerFragment {
    fn fragment(&self) -> &'static str {
        "reducer"
    }

    fn append(&self, model: &ClassModel, document: &str) -> Result<String, ExportError> {
        let class = model.class_name();
        let names = model.names();
        let plural = &names.camel_plural;
        let mut doc = Document::parse(document);

        doc.prepend(model_import(model));
        let at = doc.find(self.fragment(), STATE_ANCHOR)?;
        doc.insert(at + 1, [format!("    {plural}: {class}[];")]);
        let at = doc.find(self.fragment(), INITIAL_STATE_ANCHOR)?;
        doc.insert(at + 1, [format!("    {plural}: [],")]);
        let at = doc.find(self.fragment(), REDUCER_ANCHOR)?;
        doc.insert(
            at + 1,
            [
                format!(
                    "    on({}.{plural}LoadedSuccess, (state, {{{plural}}}) => ({{",
                    self.names.actions
                ),
                "        ...state,".into(),
                format!("        {plural}"),
                "    })),".into(),
            ],
        );
        doc.push_all([
            String::new(),
            format!("export const select{} =", names.pascal_plural),
            format!(
                "    (state: AppState) => state.{}.{plural};",
                self.names.state_key
            ),
        ]);
        Ok(doc.render())
    }
}

impl StateFragmentAppender for EffectsFragment {
    fn fragment(&self) -> &'static str {
        "effects"
    }

    fn append(&self, model: &ClassModel, document: &str) -> Result<String, ExportError> {
        let class = model.class_name();
        let names = model.names();
        let mut doc = Document::parse(document);

        doc.prepend(format!(
            "import {{ {class}Service }} from 'src/app/services/{}.service';",
            names.kebab
        ));
        let close = doc.find(self.fragment(), CONSTRUCTOR_CLOSE_ANCHOR)?;
        // The injected parameter carries a trailing comma, so it goes ahead of
        // the last existing parameter.
        let injection = match close.checked_sub(1) {
            Some(prev) if !doc.line(prev).trim_end().ends_with('(') => prev,
            _ => close,
        };
        doc.insert(
            injection,
            [format!("    private {}Service: {class}Service,", names.camel)],
        );

        let effect = if model.base_type() == Some(BaseType::BaseEnum) {
            self.cached_effect(model)
        } else {
            self.plain_effect(model)
        };
        doc.insert(close + 2, effect);
        Ok(doc.render())
    }
}

impl EffectsFragment {
    /// Effect that serves the already loaded collection from the store.
    fn cached_effect(&self, model: &ClassModel) -> Vec<String> {
        let names = model.names();
        let plural = &names.camel_plural;
        let actions = &self.names.actions;
        vec![
            String::new(),
            format!(
                "  load{}$ = createEffect(() => this.actions$.pipe(",
                names.pascal_plural
            ),
            format!("    ofType({actions}.load{}),", names.pascal_plural),
            "    concatMap(action => of(action).pipe(".into(),
            format!(
                "      withLatestFrom(this.store.pipe(select({}.select{})))",
                self.names.reducer, names.pascal_plural
            ),
            "    )),".into(),
            format!("    switchMap(([action, {plural}]) =>"),
            format!("      (!{plural} || {plural}.length === 0"),
            format!("        ? this.{}Service.getAll()", names.camel),
            format!("        : of({plural}))"),
            "      .pipe(".into(),
            format!("        map({plural} => ({actions}.{plural}LoadedSuccess({{{plural}}}))),"),
            "        catchError(val => this.errorHandlingService.handleError(val))".into(),
            "    ))".into(),
            "  ));".into(),
        ]
    }

    fn plain_effect(&self, model: &ClassModel) -> Vec<String> {
        let names = model.names();
        let plural = &names.camel_plural;
        let actions = &self.names.actions;
        vec![
            String::new(),
            format!(
                "  load{}$ = createEffect(() => this.actions$.pipe(",
                names.pascal_plural
            ),
            format!("    ofType({actions}.load{}),", names.pascal_plural),
            format!("    switchMap(() => this.{}Service.getAll()", names.camel),
            "      .pipe(".into(),
            format!("        map({plural} => ({actions}.{plural}LoadedSuccess({{{plural}}}))),"),
            "        catchError(val => this.errorHandlingService.handleError(val))".into(),
            "    ))".into(),
            "  ));".into(),
        ]
    }
}

fn model_import(model: &ClassModel) -> String {
    format!(
        "import {{ {} }} from 'src/app/models/{}';",
        model.class_name(),
        model.names().kebab
    )
}

/// Line buffer over a store document.
struct Document {
    lines: Vec<String>,
    line_ending: &'static str,
    trailing_newline: bool,
}

impl Document {
    fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            line_ending: if text.contains("\r\n") { "\r\n" } else { "\n" },
            trailing_newline: text.ends_with('\n'),
        }
    }

    fn line(&self, idx: usize) -> &str {
        &self.lines[idx]
    }

    fn find(&self, fragment: &'static str, anchor: &'static str) -> Result<usize, ExportError> {
        self.lines
            .iter()
            .position(|line| line.trim() == anchor)
            .ok_or(ExportError::AnchorNotFound { fragment, anchor })
    }

    fn prepend(&mut self, line: String) {
        self.lines.insert(0, line);
    }

    fn insert(&mut self, at: usize, lines: impl IntoIterator<Item = String>) {
        let at = at.min(self.lines.len());
        self.lines.splice(at..at, lines);
    }

    fn push_all(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    fn render(self) -> String {
        let mut text = self.lines.join(self.line_ending);
        if self.trailing_newline {
            text.push_str(self.line_ending);
        }
        text
    }
}
