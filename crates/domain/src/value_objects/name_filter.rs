use globset::{Glob, GlobMatcher};

use redate_shared_kernel::{DomainError, DomainResult};

/// Restricted glob applied to plain file names.
///
/// `*` alone or the empty string match every name, `name*` matches a
/// prefix, `*name*` a substring and a bare `name` only that exact name.
/// Matching is case-sensitive; no normalization is added beyond what the
/// platform itself does.
#[derive(Debug, Clone)]
pub struct NameFilter {
    original: String,
    matcher: GlobMatcher,
}

impl NameFilter {
    /// Compile a filter; the empty string means "match all".
    ///
    /// # Errors
    /// Fails with `InvalidFilter` when the pattern is not a valid glob.
    pub fn new(pattern: &str) -> DomainResult<Self> {
        let effective = match pattern.trim() {
            "" => "*",
            trimmed => trimmed,
        };
        let glob = Glob::new(effective).map_err(|err| DomainError::InvalidFilter {
            pattern: pattern.to_string(),
            details: err.to_string(),
        })?;
        Ok(Self {
            original: effective.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.matcher.is_match(name)
    }

    pub fn pattern(&self) -> &str {
        &self.original
    }
}
