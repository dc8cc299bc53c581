//! Test harness for CLI integration tests.
//!
//! Provides isolated source/destination trees, a scriptable fake build
//! tool, and CLI assertion helpers using `assert_cmd`.

mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::FixgenCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
