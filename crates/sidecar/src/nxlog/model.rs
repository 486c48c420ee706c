//! Model — category entry types for the nxlog configuration.

use std::collections::HashMap;
use std::path::PathBuf;

/// Property block of a configuration stanza. Keys are unique; ordering is
/// not significant and never compared.
pub type Properties = HashMap<String, String>;

/// Scalar definition, e.g. `define ROOT /opt/agent/bin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub value: String,
}

/// Filesystem path binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathBinding {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub name: String,
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub name: String,
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub name: String,
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: String,
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub name: String,
    pub properties: Properties,
}

/// Free-text block passed through to the rendered file verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub name: String,
    pub value: String,
}

/// Pre-built stanza expanded from a known pattern by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canned {
    pub name: String,
    pub kind: CannedKind,
    pub properties: Properties,
}

/// The closed set of recognized canned-template patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CannedKind {
    /// Ship logs to a GELF collector over UDP
    OutputGelfUdp,
    /// Tail a file as an input
    InputFile,
    /// Consume the Windows event log as an input
    InputWindowsEventLog,
}

impl CannedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CannedKind::OutputGelfUdp => "output-gelf-udp",
            CannedKind::InputFile => "input-file",
            CannedKind::InputWindowsEventLog => "input-windows-event-log",
        }
    }
}

/// One configuration fragment, tagged with the category it belongs to.
/// Each variant carries exactly the payload its category stores, so a
/// fragment can never land in the wrong bucket or carry the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Definition(Definition),
    Path(PathBinding),
    Extension(Extension),
    Input(Input),
    Output(Output),
    Route(Route),
    Match(Match),
    Snippet(Snippet),
    Canned(Canned),
}

impl Entry {
    pub fn definition(name: &str, value: &str) -> Self {
        Entry::Definition(Definition {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    pub fn path(name: &str, path: &str) -> Self {
        Entry::Path(PathBinding {
            name: name.to_string(),
            path: PathBuf::from(path),
        })
    }

    pub fn extension(name: &str, properties: Properties) -> Self {
        Entry::Extension(Extension {
            name: name.to_string(),
            properties,
        })
    }

    pub fn input(name: &str, properties: Properties) -> Self {
        Entry::Input(Input {
            name: name.to_string(),
            properties,
        })
    }

    pub fn output(name: &str, properties: Properties) -> Self {
        Entry::Output(Output {
            name: name.to_string(),
            properties,
        })
    }

    pub fn route(name: &str, properties: Properties) -> Self {
        Entry::Route(Route {
            name: name.to_string(),
            properties,
        })
    }

    pub fn match_block(name: &str, properties: Properties) -> Self {
        Entry::Match(Match {
            name: name.to_string(),
            properties,
        })
    }

    pub fn snippet(name: &str, value: &str) -> Self {
        Entry::Snippet(Snippet {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    pub fn canned(name: &str, kind: CannedKind, properties: Properties) -> Self {
        Entry::Canned(Canned {
            name: name.to_string(),
            kind,
            properties,
        })
    }

    /// Canned "ship to GELF over UDP" output.
    pub fn gelf_udp_output(name: &str, properties: Properties) -> Self {
        Self::canned(name, CannedKind::OutputGelfUdp, properties)
    }

    /// Canned "tail a file" input.
    pub fn file_input(name: &str, properties: Properties) -> Self {
        Self::canned(name, CannedKind::InputFile, properties)
    }

    /// Canned "consume the Windows event log" input.
    pub fn windows_event_log_input(name: &str, properties: Properties) -> Self {
        Self::canned(name, CannedKind::InputWindowsEventLog, properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_kind_labels() {
        assert_eq!(CannedKind::OutputGelfUdp.as_str(), "output-gelf-udp");
        assert_eq!(CannedKind::InputFile.as_str(), "input-file");
        assert_eq!(
            CannedKind::InputWindowsEventLog.as_str(),
            "input-windows-event-log"
        );
    }

    #[test]
    fn test_canned_helpers_set_kind() {
        let entry = Entry::file_input("tail", Properties::new());
        match entry {
            Entry::Canned(canned) => assert_eq!(canned.kind, CannedKind::InputFile),
            other => panic!("expected a canned entry, got {:?}", other),
        }
    }

    #[test]
    fn test_properties_compare_order_independent() {
        let mut a = Properties::new();
        a.insert("File".to_string(), "/var/log/a.log".to_string());
        a.insert("Module".to_string(), "im_file".to_string());

        let mut b = Properties::new();
        b.insert("Module".to_string(), "im_file".to_string());
        b.insert("File".to_string(), "/var/log/a.log".to_string());

        assert_eq!(a, b);
    }
}
