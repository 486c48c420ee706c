//! Configuration — assembly and diffing of an nxlog configuration snapshot.
//!
//! One `Configuration` is built per reconciliation cycle: constructed fresh,
//! populated through `add`, then either merged into the live snapshot with
//! `update` or compared against it with `==` to decide whether the daemon
//! needs a reload.

use std::path::Path;

use crate::conf::BackendConfig;
use crate::state::SidecarState;

use super::model::{
    Canned, Definition, Entry, Extension, Input, Match, Output, PathBinding, Properties, Route,
    Snippet,
};

/// Name this backend is registered under in the user configuration.
pub const BACKEND_NAME: &str = "nxlog";

#[derive(Debug, Clone)]
pub struct Configuration<'a> {
    pub state: &'a SidecarState,
    /// User-config entry for this backend, when one is configured.
    pub backend: Option<&'a BackendConfig>,
    pub definitions: Vec<Definition>,
    pub paths: Vec<PathBinding>,
    pub extensions: Vec<Extension>,
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    pub routes: Vec<Route>,
    pub matches: Vec<Match>,
    pub snippets: Vec<Snippet>,
    pub canned: Vec<Canned>,
}

impl<'a> Configuration<'a> {
    /// Build a fresh snapshot bound to the given execution context.
    ///
    /// The gelf extension is always present. When the backend is found in the
    /// user configuration, `definitions` is seeded with `ROOT` pointing at
    /// the directory holding the backend binary; when it is not, the snapshot
    /// simply starts without a bound backend — absence is not an error.
    pub fn new(state: &'a SidecarState) -> Self {
        let mut config = Self {
            state,
            backend: None,
            definitions: Vec::new(),
            paths: Vec::new(),
            extensions: vec![Extension {
                name: "gelf".to_string(),
                properties: Properties::from([("Module".to_string(), "xm_gelf".to_string())]),
            }],
            inputs: Vec::new(),
            outputs: Vec::new(),
            routes: Vec::new(),
            matches: Vec::new(),
            snippets: Vec::new(),
            canned: Vec::new(),
        };

        if let Some(index) = state.user_config.backend_index(BACKEND_NAME) {
            let backend = &state.user_config.backends[index];
            config.backend = Some(backend);
            config.definitions.push(Definition {
                name: "ROOT".to_string(),
                value: install_root(&backend.binary_path),
            });
        } else {
            tracing::debug!(backend = BACKEND_NAME, "backend not present in user configuration");
        }

        config
    }

    /// Append one fragment to its category. Order within a category is
    /// insertion order; duplicate names are kept as distinct entries.
    pub fn add(&mut self, entry: Entry) {
        match entry {
            Entry::Definition(definition) => self.definitions.push(definition),
            Entry::Path(path) => self.paths.push(path),
            Entry::Extension(extension) => self.extensions.push(extension),
            Entry::Input(input) => self.inputs.push(input),
            Entry::Output(output) => self.outputs.push(output),
            Entry::Route(route) => self.routes.push(route),
            Entry::Match(match_block) => self.matches.push(match_block),
            Entry::Snippet(snippet) => self.snippets.push(snippet),
            Entry::Canned(canned) => self.canned.push(canned),
        }
    }

    /// Replace every category of this snapshot with the source's contents.
    /// The source is consumed; `state` and `backend` stay as they are.
    pub fn update(&mut self, source: Configuration<'a>) {
        self.definitions = source.definitions;
        self.paths = source.paths;
        self.extensions = source.extensions;
        self.inputs = source.inputs;
        self.outputs = source.outputs;
        self.routes = source.routes;
        self.matches = source.matches;
        self.snippets = source.snippets;
        self.canned = source.canned;
    }
}

/// Two snapshots are equal when every category matches element for element.
/// The borrowed `state`/`backend` identity is left out: the comparison
/// decides whether the rendered daemon configuration would change.
impl PartialEq for Configuration<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.definitions == other.definitions
            && self.paths == other.paths
            && self.extensions == other.extensions
            && self.inputs == other.inputs
            && self.outputs == other.outputs
            && self.routes == other.routes
            && self.matches == other.matches
            && self.snippets == other.snippets
            && self.canned == other.canned
    }
}

impl Eq for Configuration<'_> {}

/// Directory portion of the backend binary path, `"."` for a bare file name.
fn install_root(binary_path: &Path) -> String {
    match binary_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.display().to_string(),
        _ => ".".to_string(),
    }
}
