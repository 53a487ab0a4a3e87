//! The shape renderer seam: anything that can turn an input image file into an
//! output image file made of `shape_count` primitives.
//!
//! `PrimitiveCli` drives the real `primitive` executable. Tests and embedders
//! can supply their own `ShapeRenderer` instead.
use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::{Error, Result};

pub const DEFAULT_PROGRAM: &str = "primitive";

/// Text the renderer printed while working, stdout and stderr merged in the
/// order the tool wrote them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub text: String,
}

impl Diagnostics {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

pub trait ShapeRenderer {
    /// Render `input` into `output`. `args` are the already-assembled option
    /// flags; implementations append them after input, output and count.
    fn render(
        &self,
        input: &Path,
        output: &Path,
        shape_count: u32,
        args: &[String],
    ) -> Result<Diagnostics>;
}

impl<T: ShapeRenderer + ?Sized> ShapeRenderer for &T {
    fn render(
        &self,
        input: &Path,
        output: &Path,
        shape_count: u32,
        args: &[String],
    ) -> Result<Diagnostics> {
        (**self).render(input, output, shape_count, args)
    }
}

impl<T: ShapeRenderer + ?Sized> ShapeRenderer for Box<T> {
    fn render(
        &self,
        input: &Path,
        output: &Path,
        shape_count: u32,
        args: &[String],
    ) -> Result<Diagnostics> {
        (**self).render(input, output, shape_count, args)
    }
}

/// Runs the `primitive` command-line tool as a child process.
#[derive(Debug, Clone)]
pub struct PrimitiveCli {
    program: PathBuf,
    search_path: Option<OsString>,
}

impl Default for PrimitiveCli {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimitiveCli {
    /// Use `primitive` as found on `PATH`.
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            search_path: None,
        }
    }

    /// Run the tool with this `PATH`; a bare program name is looked up in it.
    pub fn with_search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Full argument vector: `-i <input> -o <output> -n <count>` then `args`.
    pub fn build_args(
        input: &Path,
        output: &Path,
        shape_count: u32,
        args: &[String],
    ) -> Vec<OsString> {
        let mut argv: Vec<OsString> = vec![
            "-i".into(),
            input.into(),
            "-o".into(),
            output.into(),
            "-n".into(),
            shape_count.to_string().into(),
        ];
        argv.extend(args.iter().map(OsString::from));
        argv
    }

    fn command(&self, input: &Path, output: &Path, shape_count: u32, args: &[String]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(Self::build_args(input, output, shape_count, args));
        if let Some(path) = &self.search_path {
            cmd.env("PATH", path);
        }
        cmd
    }

    fn launch_error(&self, source: std::io::Error) -> Error {
        Error::Launch {
            program: self.program.display().to_string(),
            source,
        }
    }
}

impl ShapeRenderer for PrimitiveCli {
    fn render(
        &self,
        input: &Path,
        output: &Path,
        shape_count: u32,
        args: &[String],
    ) -> Result<Diagnostics> {
        // One pipe behind both stdout and stderr keeps the tool's own ordering.
        let (mut reader, writer) = std::io::pipe().map_err(|e| self.launch_error(e))?;
        let writer_err = writer.try_clone().map_err(|e| self.launch_error(e))?;

        let mut cmd = self.command(input, output, shape_count, args);
        cmd.stdin(Stdio::null()).stdout(writer).stderr(writer_err);
        debug!("Executing primitive command: {:?}", cmd);

        let mut child = cmd.spawn().map_err(|e| self.launch_error(e))?;
        // The command still holds the write ends; reading would never see EOF.
        drop(cmd);

        let mut raw = Vec::new();
        let read = reader.read_to_end(&mut raw);
        let status = child.wait()?;
        read?;
        let diagnostics = String::from_utf8_lossy(&raw).into_owned();

        if !status.success() {
            warn!("primitive exited with {}", status);
            return Err(Error::ToolFailed {
                status,
                diagnostics,
            });
        }

        if diagnostics.trim().is_empty() {
            debug!("primitive succeeded without printing anything");
        }
        Ok(Diagnostics::new(diagnostics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv_puts_paths_and_count_first() {
        let argv = PrimitiveCli::build_args(
            Path::new("/tmp/in_1.png"),
            Path::new("/tmp/out_1.png"),
            42,
            &["-m".to_string(), "1".to_string()],
        );
        let argv: Vec<String> = argv
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            argv,
            ["-i", "/tmp/in_1.png", "-o", "/tmp/out_1.png", "-n", "42", "-m", "1"]
        );
    }

    #[test]
    fn search_path_is_only_set_when_configured() {
        let plain = PrimitiveCli::new().command(Path::new("a"), Path::new("b"), 1, &[]);
        assert!(plain.get_envs().next().is_none());

        let cli = PrimitiveCli::new().with_search_path("/opt/primitive/bin");
        let cmd = cli.command(Path::new("a"), Path::new("b"), 1, &[]);
        let envs: Vec<_> = cmd.get_envs().collect();
        assert_eq!(
            envs,
            [(
                std::ffi::OsStr::new("PATH"),
                Some(std::ffi::OsStr::new("/opt/primitive/bin"))
            )]
        );
        assert_eq!(cli.program(), Path::new(DEFAULT_PROGRAM));
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let cli = PrimitiveCli::with_program("/definitely/not/a/primitive-binary");
        let err = cli
            .render(Path::new("in.png"), Path::new("out.png"), 1, &[])
            .unwrap_err();
        assert!(matches!(err, Error::Launch { .. }));
    }

    #[test]
    fn empty_diagnostics_detection_ignores_whitespace() {
        assert!(Diagnostics::new(" \n").is_empty());
        assert!(!Diagnostics::new("done").is_empty());
    }
}
