//! Line-oriented yarn.lock parser
//!
//! yarn.lock uses a custom format (not standard YAML). Each stanza looks like:
//! ```text
//! "lodash@^4.17.21":
//!   version "4.17.21"
//!   resolved "https://registry.yarnpkg.com/lodash/-/lodash-4.17.21.tgz"
//!   integrity "sha512-..."
//!   dependencies:
//!     "foo" "^1.0.0"
//! ```
//!
//! Parsing is a single pass over the lines. Lines that fit none of the known
//! shapes are skipped; content never makes parsing fail. Only I/O errors do.

use super::record::{LockfileDatabase, PackageRecord};
use crate::lockfile::LockfileError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Parse a yarn.lock file from disk.
pub fn parse_file(path: &Path) -> Result<LockfileDatabase, LockfileError> {
    let file = File::open(path).map_err(|source| LockfileError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let database = parse(BufReader::new(file)).map_err(|source| LockfileError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        packages = database.len(),
        "parsed lockfile"
    );
    Ok(database)
}

/// Parse yarn.lock content from a buffered reader.
///
/// Only a failed read aborts parsing; no partial database is returned.
/// Bytes that are not valid UTF-8 are replaced with U+FFFD and the line is
/// classified like any other.
pub fn parse<R: BufRead>(mut reader: R) -> io::Result<LockfileDatabase> {
    let mut parser = Parser::default();
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        parser.feed(line_no, &String::from_utf8_lossy(strip_line_ending(&buf)));
    }
    Ok(parser.finish())
}

/// Parse in-memory yarn.lock content.
pub fn parse_str(content: &str) -> LockfileDatabase {
    let mut parser = Parser::default();
    for (index, line) in content.lines().enumerate() {
        parser.feed(index + 1, line);
    }
    parser.finish()
}

#[derive(Default)]
struct Parser {
    database: LockfileDatabase,
    /// Key of the stanza being built; `None` before the first header
    current_key: Option<String>,
    current: PackageRecord,
    in_dependencies: bool,
}

impl Parser {
    /// Classify one line. First match wins, in this order:
    /// header, version, resolved, integrity, `dependencies:`, dependency entry.
    fn feed(&mut self, line_no: usize, line: &str) {
        if let Some(key) = header_key(line) {
            self.finalize();
            self.current_key = Some(key.to_string());
            self.current = PackageRecord::default();
            self.in_dependencies = false;
            return;
        }

        if let Some(version) = field_value(line, "version") {
            self.current.version = version.to_string();
            self.in_dependencies = false;
            return;
        }

        if let Some(resolved) = field_value(line, "resolved") {
            self.current.resolved = resolved.to_string();
            self.in_dependencies = false;
            return;
        }

        if let Some(integrity) = field_value(line, "integrity") {
            self.current.integrity = integrity.to_string();
            self.in_dependencies = false;
            return;
        }

        let trimmed = line.trim();
        if trimmed == "dependencies:" {
            self.in_dependencies = true;
            return;
        }

        if self.in_dependencies {
            // Blank line, a bare word, or an unindented quoted line closes the block.
            // The closing line itself is not classified any further.
            if trimmed.is_empty() || !trimmed.contains(' ') || line.starts_with('"') {
                self.in_dependencies = false;
                trace!(line_no, "end of dependencies block");
                return;
            }

            if let Some((name, range)) = trimmed.split_once(' ') {
                self.current.dependencies.insert(
                    name.trim_matches('"').to_string(),
                    range.trim_matches('"').to_string(),
                );
            }
            return;
        }

        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            trace!(line_no, line, "skipping unrecognized line");
        }
    }

    /// Move the open record, if any, into the database.
    fn finalize(&mut self) {
        let Some(key) = self.current_key.take() else {
            return;
        };
        let record = std::mem::take(&mut self.current);
        if self.database.insert(key, record).is_some() {
            debug!("duplicate lockfile entry replaced by later stanza");
        }
    }

    fn finish(mut self) -> LockfileDatabase {
        self.finalize();
        self.database
    }
}

/// Drop a trailing `\n` or `\r\n`.
fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Match `"<key>":` at column 0 and return the key.
fn header_key(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('"')?;
    let end = rest.find('"')?;
    if end == 0 {
        return None;
    }
    rest[end + 1..].starts_with(':').then_some(&rest[..end])
}

/// Match `  <field> "<value>"` (exactly two leading spaces) and return the value.
fn field_value<'a>(line: &'a str, field: &str) -> Option<&'a str> {
    let rest = line
        .strip_prefix("  ")?
        .strip_prefix(field)?
        .strip_prefix(" \"")?;
    let end = rest.find('"')?;
    (end > 0).then_some(&rest[..end])
}
