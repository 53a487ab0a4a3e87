//! I/O layer: the `renderer` seam that runs the external `primitive` tool and
//! the `scratch` files it reads from and writes to.
pub mod renderer;
pub use renderer::{Diagnostics, PrimitiveCli, ShapeRenderer};

pub mod scratch;
pub use scratch::ScratchFile;
