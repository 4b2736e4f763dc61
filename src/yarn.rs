//! yarn.lock support
//!
//! Handles:
//! - Line-oriented parsing of yarn.lock stanzas into a package database
//! - Classification of each entry's resolved location (registry, git, local)

mod parser;
mod record;
mod source;

pub use parser::{parse, parse_file, parse_str};
pub use record::{LockfileDatabase, PackageRecord, package_name};
pub use source::Source;
