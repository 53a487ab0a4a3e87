//! High-level library API: transform an image stream, a file, or a directory of
//! images through a `ShapeRenderer`. Prefer these entrypoints over driving the
//! renderer and scratch files by hand.
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::params::{TransformOptions, TransformParams};
use crate::core::request::TransformRequest;
use crate::error::{Error, Result};
use crate::io::renderer::{PrimitiveCli, ShapeRenderer};
use crate::io::scratch::ScratchFile;

const INPUT_PREFIX: &str = "in_";
const OUTPUT_PREFIX: &str = "out_";

/// Image extensions picked up by directory batches.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Transform `image` with the `primitive` tool found on `PATH`.
///
/// The returned cursor owns the whole rendered image; no file backs it.
pub fn transform<I: Read>(
    image: I,
    extension: &str,
    shape_count: u32,
    options: &TransformOptions,
) -> Result<Cursor<Vec<u8>>> {
    Transformer::new().transform(image, extension, shape_count, options)
}

/// Transform the image at `input` and write the result to `output` using `params`.
pub fn transform_path_to_path(input: &Path, output: &Path, params: &TransformParams) -> Result<()> {
    params.validate()?;
    Transformer::from_params(params).transform_file(
        input,
        output,
        params.shape_count,
        &params.options,
    )
}

/// Transform every supported image directly inside `input_dir` into `output_dir`.
/// If `continue_on_error` is true, failures are counted in the report and the
/// batch carries on; otherwise the first error is returned.
pub fn transform_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &TransformParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    params.validate()?;
    Transformer::from_params(params).transform_directory(
        input_dir,
        output_dir,
        params.shape_count,
        &params.options,
        continue_on_error,
    )
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Composes scratch files and a renderer into one transform call.
///
/// Each call allocates its own pair of scratch files, so a single `Transformer`
/// can be shared between threads when its renderer is `Sync`.
#[derive(Debug, Clone)]
pub struct Transformer<R = PrimitiveCli> {
    renderer: R,
    scratch_dir: Option<PathBuf>,
}

impl Transformer<PrimitiveCli> {
    pub fn new() -> Self {
        Self::with_renderer(PrimitiveCli::new())
    }

    pub fn from_params(params: &TransformParams) -> Self {
        let cli = match &params.program {
            Some(program) => PrimitiveCli::with_program(program),
            None => PrimitiveCli::new(),
        };
        Self::with_renderer(cli)
    }
}

impl Default for Transformer<PrimitiveCli> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ShapeRenderer> Transformer<R> {
    pub fn with_renderer(renderer: R) -> Self {
        Self {
            renderer,
            scratch_dir: None,
        }
    }

    /// Put scratch files in `dir` instead of the OS temp directory.
    pub fn scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn transform<I: Read>(
        &self,
        image: I,
        extension: &str,
        shape_count: u32,
        options: &TransformOptions,
    ) -> Result<Cursor<Vec<u8>>> {
        let request = TransformRequest::new(image, extension, shape_count, options.clone())?;
        self.run(request)
    }

    /// Execute a validated request. Both scratch files are gone when this returns.
    pub fn run<I: Read>(&self, request: TransformRequest<I>) -> Result<Cursor<Vec<u8>>> {
        let extension = request.extension().to_string();
        let shape_count = request.shape_count();
        let args = request.options().to_args();
        let mut input = request.into_input();

        let dir = self.scratch_dir.as_deref();
        let mut in_file =
            ScratchFile::allocate(INPUT_PREFIX, &extension, dir).map_err(Error::TempFile)?;
        // `in_file` is removed by its Drop if this allocation fails.
        let mut out_file =
            ScratchFile::allocate(OUTPUT_PREFIX, &extension, dir).map_err(Error::TempFile)?;

        let rendered = self.render_through(&mut input, &mut in_file, &out_file, shape_count, &args);

        let released_in = in_file.release();
        let released_out = out_file.release();
        let bytes = rendered?;
        released_in?;
        released_out?;

        Ok(Cursor::new(bytes))
    }

    fn render_through<I: Read>(
        &self,
        input: &mut I,
        in_file: &mut ScratchFile,
        out_file: &ScratchFile,
        shape_count: u32,
        args: &[String],
    ) -> Result<Vec<u8>> {
        let file = in_file.as_file_mut().map_err(Error::InputCopy)?;
        let copied = std::io::copy(input, file).map_err(Error::InputCopy)?;
        file.flush().map_err(Error::InputCopy)?;
        debug!("Staged {} input bytes at {:?}", copied, in_file.path());

        let diagnostics =
            self.renderer
                .render(in_file.path(), out_file.path(), shape_count, args)?;
        if diagnostics.is_empty() {
            debug!("Renderer finished with no diagnostics");
        } else {
            debug!("Renderer output: {}", diagnostics.as_str().trim_end());
        }

        std::fs::read(out_file.path()).map_err(Error::OutputRead)
    }

    /// Transform one file on disk. Scratch files take the output's extension,
    /// falling back to the input's, since that decides the encoded format.
    pub fn transform_file(
        &self,
        input: &Path,
        output: &Path,
        shape_count: u32,
        options: &TransformOptions,
    ) -> Result<()> {
        let extension = file_extension(output)
            .or_else(|| file_extension(input))
            .ok_or_else(|| Error::InvalidArgument {
                arg: "output",
                value: output.display().to_string(),
            })?;

        let reader = BufReader::new(File::open(input)?);
        let mut rendered = self.transform(reader, &extension, shape_count, options)?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = File::create(output)?;
        std::io::copy(&mut rendered, &mut file)?;
        file.flush()?;
        Ok(())
    }

    pub fn transform_directory(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        shape_count: u32,
        options: &TransformOptions,
        continue_on_error: bool,
    ) -> Result<BatchReport> {
        std::fs::create_dir_all(output_dir)?;

        let mut report = BatchReport::default();

        for path in iterate_images(input_dir)? {
            let Some(name) = path.file_name() else {
                report.skipped += 1;
                continue;
            };
            if !is_supported_image(&path) {
                info!("Skipping unsupported file: {:?}", path);
                report.skipped += 1;
                continue;
            }
            let output_path = output_dir.join(name);
            info!("Processing: {:?} -> {:?}", path, output_path);

            match self.transform_file(&path, &output_path, shape_count, options) {
                Ok(()) => report.processed += 1,
                Err(e) => {
                    warn!("Error processing {:?}: {}", path, e);
                    report.errors += 1;
                    if !continue_on_error {
                        return Err(e);
                    }
                }
            }
        }

        Ok(report)
    }
}

/// Regular files directly inside `input_dir`, in name order.
pub fn iterate_images(input_dir: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files.into_iter())
}

fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(str::to_ascii_lowercase)
}

fn is_supported_image(path: &Path) -> bool {
    file_extension(path).is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_images_by_extension() {
        assert!(is_supported_image(Path::new("a/photo.PNG")));
        assert!(is_supported_image(Path::new("photo.jpeg")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("README")));
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file_extension(Path::new("x.JPG")).as_deref(), Some("jpg"));
        assert_eq!(file_extension(Path::new("x")), None);
    }
}
