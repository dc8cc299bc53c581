//! Command handlers.

mod generate;

pub use generate::{FIXTURE_SUBDIR, TEST_SUBDIR, handle_generate, run_generate};
