use std::io::Read;

use crate::core::params::TransformOptions;
use crate::error::{Error, Result};

/// One validated transform job. Fields are fixed once constructed.
#[derive(Debug)]
pub struct TransformRequest<R> {
    input: R,
    extension: String,
    shape_count: u32,
    options: TransformOptions,
}

impl<R: Read> TransformRequest<R> {
    /// Validate everything that can be checked without touching the filesystem.
    /// `extension` may be given with or without its leading dot.
    pub fn new(
        input: R,
        extension: &str,
        shape_count: u32,
        options: TransformOptions,
    ) -> Result<Self> {
        let extension = normalize_extension(extension)?;
        if shape_count == 0 {
            return Err(Error::InvalidShapeCount { count: shape_count });
        }
        options.validate()?;

        Ok(Self {
            input,
            extension,
            shape_count,
            options,
        })
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn shape_count(&self) -> u32 {
        self.shape_count
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    pub(crate) fn into_input(self) -> R {
        self.input
    }
}

fn normalize_extension(ext: &str) -> Result<String> {
    let trimmed = ext.trim().trim_start_matches('.');
    let valid = !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphanumeric());
    if !valid {
        return Err(Error::InvalidArgument {
            arg: "extension",
            value: ext.to_string(),
        });
    }
    Ok(trimmed.to_ascii_lowercase())
}
