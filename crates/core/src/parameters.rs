//! Parameter kinds, boolean run flags and editable parameter slots.
//!
//! Every kind of value the editor can offer is a variant of the closed
//! [`ParameterKind`] enum, so adding a kind forces every `match` over it
//! (the committer in particular) to be extended.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Fixed metadata for a kind of command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterType {
    /// The flag token, e.g. `--volume`.
    pub name: &'static str,
    /// Separator for composite values, if the value is composite.
    pub split_separator: Option<&'static str>,
    /// Index of the only user-editable segment of a composite value.
    pub editable_segment_index: usize,
}

impl ParameterType {
    /// Splits `value` into its segments, or returns `None` for non-composite types.
    ///
    /// The result always has a segment at `editable_segment_index`; missing
    /// trailing segments are filled with empty strings.
    #[must_use]
    pub fn split(&self, value: &str) -> Option<Vec<String>> {
        let separator = self.split_separator?;
        let mut segments: Vec<String> = value.split(separator).map(str::to_string).collect();
        if segments.len() <= self.editable_segment_index {
            segments.resize(self.editable_segment_index + 1, String::new());
        }
        Some(segments)
    }
}

const NAME_PARAMETER: ParameterType = ParameterType {
    name: "--name",
    split_separator: None,
    editable_segment_index: 0,
};

const VOLUME_PARAMETER: ParameterType = ParameterType {
    name: "--volume",
    split_separator: Some(":"),
    editable_segment_index: 0,
};

const ENTRYPOINT_PARAMETER: ParameterType = ParameterType {
    name: "--entrypoint",
    split_separator: None,
    editable_segment_index: 0,
};

const ENV_PARAMETER: ParameterType = ParameterType {
    name: "--env",
    split_separator: Some("="),
    editable_segment_index: 1,
};

const PORT_PARAMETER: ParameterType = ParameterType {
    name: "-p",
    split_separator: Some(":"),
    editable_segment_index: 0,
};

/// The closed set of parameter kinds the editor knows how to offer and commit.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Name,
    Volume,
    Entrypoint,
    Env,
    Port,
}

impl ParameterKind {
    pub const ALL: [ParameterKind; 5] = [
        ParameterKind::Name,
        ParameterKind::Volume,
        ParameterKind::Entrypoint,
        ParameterKind::Env,
        ParameterKind::Port,
    ];

    #[must_use]
    pub fn parameter_type(self) -> ParameterType {
        match self {
            ParameterKind::Name => NAME_PARAMETER,
            ParameterKind::Volume => VOLUME_PARAMETER,
            ParameterKind::Entrypoint => ENTRYPOINT_PARAMETER,
            ParameterKind::Env => ENV_PARAMETER,
            ParameterKind::Port => PORT_PARAMETER,
        }
    }

    #[must_use]
    pub fn flag(self) -> &'static str {
        self.parameter_type().name
    }
}

impl Display for ParameterKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.flag())
    }
}

/// Boolean flags offered alongside the parameters.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunFlag {
    #[serde(rename = "--interactive")]
    Interactive,
    #[serde(rename = "--tty")]
    Tty,
    #[serde(rename = "--detach")]
    Detach,
}

impl RunFlag {
    pub const ALL: [RunFlag; 3] = [RunFlag::Interactive, RunFlag::Tty, RunFlag::Detach];

    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            RunFlag::Interactive => "--interactive",
            RunFlag::Tty => "--tty",
            RunFlag::Detach => "--detach",
        }
    }
}

impl Display for RunFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// One editable slot in the assembled command.
///
/// An empty `value` means "use the first candidate".
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ParameterInstance {
    pub kind: ParameterKind,
    #[serde(skip)]
    pub value: String,
    pub candidates: Vec<String>,
}

impl ParameterInstance {
    pub fn new<I, S>(kind: ParameterKind, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            value: String::new(),
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn parameter_type(&self) -> ParameterType {
        self.kind.parameter_type()
    }

    /// The implicit default, `candidates[0]`.
    #[must_use]
    pub fn default_value(&self) -> &str {
        self.candidates.first().map_or("", String::as_str)
    }

    /// The value that is shown and committed.
    #[must_use]
    pub fn effective_value(&self) -> &str {
        if self.value.is_empty() {
            self.default_value()
        } else {
            &self.value
        }
    }

    /// Whether the user has moved this slot away from its default.
    #[must_use]
    pub fn is_edited(&self) -> bool {
        !self.value.is_empty() && self.value != self.default_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_non_composite_is_none() {
        assert_eq!(ParameterKind::Name.parameter_type().split("a:b"), None);
    }

    #[test]
    fn test_split_volume() {
        let segments = ParameterKind::Volume.parameter_type().split("/a:/b").unwrap();
        assert_eq!(segments, vec!["/a", "/b"]);
    }

    #[test]
    fn test_split_pads_missing_editable_segment() {
        let segments = ParameterKind::Env.parameter_type().split("KEY").unwrap();
        assert_eq!(segments, vec!["KEY", ""]);
    }

    #[test]
    fn test_split_keeps_extra_segments() {
        let segments = ParameterKind::Port.parameter_type().split("127.0.0.1:80:80").unwrap();
        assert_eq!(segments, vec!["127.0.0.1", "80", "80"]);
    }

    #[test]
    fn test_effective_value_defaults_to_first_candidate() {
        let mut param = ParameterInstance::new(ParameterKind::Name, ["alpine-test", "evenCoolerName"]);
        assert_eq!(param.effective_value(), "alpine-test");

        param.value = "mine".to_string();
        assert_eq!(param.effective_value(), "mine");
    }

    #[test]
    fn test_is_edited() {
        let mut param = ParameterInstance::new(ParameterKind::Name, ["alpine-test", "evenCoolerName"]);
        assert!(!param.is_edited());

        param.value = "alpine-test".to_string();
        assert!(!param.is_edited());

        param.value = "evenCoolerName".to_string();
        assert!(param.is_edited());
    }

    #[test]
    fn test_flag_tokens() {
        assert_eq!(ParameterKind::Port.flag(), "-p");
        assert_eq!(ParameterKind::Env.to_string(), "--env");
        assert_eq!(RunFlag::Detach.to_string(), "--detach");
    }

    #[test]
    fn test_run_flag_deserializes_from_token() {
        let flags: Vec<RunFlag> = serde_yaml::from_str("[\"--interactive\", \"--tty\"]").unwrap();
        assert_eq!(flags, vec![RunFlag::Interactive, RunFlag::Tty]);
    }
}
