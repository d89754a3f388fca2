//! Call-site resolution
//!
//! The reported location is the innermost caller that is *not* annotated
//! with `#[track_caller]`. Every public emit method of the facade, the
//! [`Log`](crate::Log) trait methods and the `log_*!` macros are transparent,
//! so a plain call reports the line it was written on. A wrapper that adds its
//! own layer of indirection opts in by annotating itself with
//! `#[track_caller]`; otherwise the wrapper's line is reported.

use std::fmt;
use std::panic::Location;

use fieldlog_core_types::schema::UNKNOWN_CALL_SITE;

/// Source location of a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    file: &'a str,
    line: u32,
}

impl CallSite<'static> {
    /// Location of the caller, following `#[track_caller]` frames
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }

    /// Placeholder for records that carry no location
    pub const fn unknown() -> Self {
        Self { file: "", line: 0 }
    }
}

impl<'a> CallSite<'a> {
    pub fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// Build from optional parts, as adapters receive them
    pub fn from_parts(file: Option<&'a str>, line: Option<u32>) -> CallSite<'a> {
        match (file, line) {
            (Some(file), Some(line)) => CallSite::new(file, line),
            _ => CallSite::unknown(),
        }
    }

    pub fn file(&self) -> &'a str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn is_known(&self) -> bool {
        !self.file.is_empty()
    }

    /// Parent directory plus base name, e.g. `src/facade.rs`
    pub fn short_path(&self) -> &'a str {
        trim_path(self.file, 2)
    }
}

impl fmt::Display for CallSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_known() {
            return f.write_str(UNKNOWN_CALL_SITE);
        }
        write!(f, "[{} - {}]", self.short_path(), self.line)
    }
}

/// Keep the last `segments` components of `path`.
fn trim_path(path: &str, segments: usize) -> &str {
    let mut end = path.len();
    for _ in 0..segments {
        match path[..end].rfind(['/', '\\']) {
            Some(idx) => end = idx,
            None => return path,
        }
    }
    &path[end + 1..]
}
