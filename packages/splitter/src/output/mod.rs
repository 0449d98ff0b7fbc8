//! Output generation for split cheat files.

mod writer;

pub use writer::{ensure_output_dir, write_records};
