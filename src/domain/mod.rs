//! Core domain types.

mod hostname;

pub use hostname::{Hostname, HostnameError};
