//! Domain logic - parsing and version derivation, independent of git

pub mod describe;
pub mod result;
pub mod version;

pub use describe::{parse_describe, DescribeFields, DescribePattern};
pub use result::{derive_version, VersionResult};
pub use version::FourPartVersion;
