//! Filesystem primitives, template rendering, process invocation.

pub mod fs;
pub mod runner;
pub mod template;

pub use fs::{FsError, copy_file, copy_tree, find_description_file, write_atomic};
