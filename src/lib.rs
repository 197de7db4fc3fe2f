pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use domain::{derive_version, FourPartVersion, VersionResult};
pub use error::{Result, SimpleGitVerError};
