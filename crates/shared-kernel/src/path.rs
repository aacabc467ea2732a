use std::path::{Path, PathBuf};

use crate::error::{InfraResult, InfrastructureError};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
pub fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Normalize raw user input into an absolute path.
///
/// Surrounding whitespace and a single layer of enclosing quotes are
/// stripped, the remainder is made absolute. Input that is empty after
/// stripping, or contains an interior NUL, cannot name anything on disk.
///
/// # Errors
/// Returns `PathResolution` when the input cannot name a path.
pub fn normalize_raw_path(raw: &str) -> InfraResult<PathBuf> {
    let stripped = strip_quotes(raw.trim());
    if stripped.is_empty() || stripped.contains('\0') {
        return Err(InfrastructureError::PathResolution {
            input: raw.to_string(),
        });
    }
    Ok(logical_absolute(Path::new(stripped)))
}

fn strip_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_whitespace_and_one_quote_layer() {
        let abs = normalize_raw_path("  \"/tmp/some file.txt\"  ").expect("normalizes");
        assert_eq!(abs, PathBuf::from("/tmp/some file.txt"));

        let single = normalize_raw_path("'/tmp/other.txt'").expect("normalizes");
        assert_eq!(single, PathBuf::from("/tmp/other.txt"));
    }

    #[test]
    fn keeps_inner_quotes_intact() {
        let abs = normalize_raw_path("\"/tmp/a\"b\"\"").expect("normalizes");
        assert_eq!(abs, PathBuf::from("/tmp/a\"b\""));
    }

    #[test]
    fn relative_input_becomes_absolute() {
        let abs = normalize_raw_path("notes.txt").expect("normalizes");
        assert!(abs.is_absolute());
        assert!(abs.ends_with("notes.txt"));
    }

    #[test]
    fn rejects_empty_and_nul_input() {
        assert!(normalize_raw_path("").is_err());
        assert!(normalize_raw_path("   ").is_err());
        assert!(normalize_raw_path("\"\"").is_err());
        assert!(normalize_raw_path("a\0b").is_err());
    }
}
