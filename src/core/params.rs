use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Mode;

/// Flags the orchestrator always sets itself; passthrough flags may not repeat them.
const RESERVED_FLAGS: [&str; 3] = ["i", "o", "n"];

pub const DEFAULT_SHAPE_COUNT: u32 = 100;

/// Options forwarded to the `primitive` tool after the input/output/count flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// Shape family; `None` leaves the tool on its own default.
    pub mode: Option<Mode>,
    /// Passed through verbatim, in order, after `-m`.
    pub extra_flags: Vec<String>,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_extra_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_flags.extend(flags.into_iter().map(Into::into));
        self
    }

    /// Reject passthrough flags that would fight with the ones we generate,
    /// in any spelling the tool's flag parser accepts (`-o`, `--o`, `-o=x`).
    pub fn validate(&self) -> Result<()> {
        for flag in &self.extra_flags {
            let reserved = flag_name(flag).is_some_and(|name| {
                RESERVED_FLAGS.contains(&name) || (self.mode.is_some() && name == "m")
            });
            if reserved {
                return Err(Error::InvalidArgument {
                    arg: "extra_flags",
                    value: flag.clone(),
                });
            }
        }
        Ok(())
    }

    /// Command-line fragment for these options: `-m <code>` then the extra flags.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(2 + self.extra_flags.len());
        if let Some(mode) = self.mode {
            args.push("-m".to_string());
            args.push(mode.code().to_string());
        }
        args.extend(self.extra_flags.iter().cloned());
        args
    }
}

/// Name of a flag argument: one or two leading dashes stripped and any
/// `=value` cut off. `None` for positional values and the bare `-`/`--`.
fn flag_name(arg: &str) -> Option<&str> {
    let rest = arg.strip_prefix('-')?;
    let rest = rest.strip_prefix('-').unwrap_or(rest);
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    (!name.is_empty()).then_some(name)
}

/// Transform parameters suitable for JSON presets and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    pub shape_count: u32,
    #[serde(flatten)]
    pub options: TransformOptions,
    /// Path to the `primitive` executable; `None` searches `PATH`.
    pub program: Option<PathBuf>,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            shape_count: DEFAULT_SHAPE_COUNT,
            options: TransformOptions::default(),
            program: None,
        }
    }
}

impl TransformParams {
    pub fn validate(&self) -> Result<()> {
        if self.shape_count == 0 {
            return Err(Error::InvalidShapeCount {
                count: self.shape_count,
            });
        }
        self.options.validate()
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let params = Self::load_json_file(path)?;
        params.validate()?;
        Ok(params)
    }

    /// Parse a preset without validating it, for callers that still layer
    /// overrides on top before calling `validate`.
    pub fn load_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
