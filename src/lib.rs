#![doc = r#"
primitive-transform — reproduce images with geometric primitives by driving the
[`primitive`](https://github.com/fogleman/primitive) command-line tool.

The crate does not approximate images itself. It stages the input image in a
scratch file, runs the external tool with the requested shape count and mode,
and hands the rendered image back as an in-memory stream. Scratch files are
removed before every call returns, whether it succeeded or not.

Requirements
------------
- `primitive` available on `PATH` (or an explicit path via `PrimitiveCli::with_program`).

Quick start: transform a stream
-------------------------------
```rust,no_run
use std::fs::File;
use primitive_transform::{transform, Mode, TransformOptions};

fn main() -> primitive_transform::Result<()> {
    let input = File::open("/data/cat.png")?;
    let options = TransformOptions::new().with_mode(Mode::Triangle);
    let rendered = transform(input, "png", 200, &options)?;
    std::fs::write("/out/cat_triangles.png", rendered.into_inner())?;
    Ok(())
}
```

Custom renderers
----------------
Anything implementing [`ShapeRenderer`] can stand in for the real executable,
which is how the tests exercise the orchestration without `primitive`
installed.

```rust
use std::io::Cursor;
use std::path::Path;
use primitive_transform::{Diagnostics, ShapeRenderer, TransformOptions, Transformer};

struct CopyRenderer;

impl ShapeRenderer for CopyRenderer {
    fn render(
        &self,
        input: &Path,
        output: &Path,
        _shape_count: u32,
        _args: &[String],
    ) -> primitive_transform::Result<Diagnostics> {
        std::fs::copy(input, output)?;
        Ok(Diagnostics::new("copied"))
    }
}

let transformer = Transformer::with_renderer(CopyRenderer);
let out = transformer
    .transform(Cursor::new(b"pixels".to_vec()), "png", 10, &TransformOptions::new())
    .unwrap();
assert_eq!(out.into_inner(), b"pixels");
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use primitive_transform::{transform_directory_to_path, Mode, TransformParams};

fn main() -> primitive_transform::Result<()> {
    let mut params = TransformParams::default();
    params.shape_count = 150;
    params.options.mode = Some(Mode::Ellipse);

    let report = transform_directory_to_path(
        Path::new("/data/photos"),
        Path::new("/out"),
        &params,
        true, // continue_on_error
    )?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Useful modules
--------------
- [`api`] — transform entry points and the `Transformer` orchestrator.
- [`core`] — typed options, presets and validated requests.
- [`io`] — the renderer seam and scoped scratch files.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use core::params::{DEFAULT_SHAPE_COUNT, TransformOptions, TransformParams};
pub use core::request::TransformRequest;
pub use error::{Error, Result};
pub use types::Mode;

pub use io::renderer::{Diagnostics, PrimitiveCli, ShapeRenderer};
pub use io::scratch::ScratchFile;

pub use api::{
    BatchReport, Transformer, iterate_images, transform, transform_directory_to_path,
    transform_path_to_path,
};
