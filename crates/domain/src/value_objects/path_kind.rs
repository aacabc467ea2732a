use std::str::FromStr;

use redate_shared_kernel::DomainError;
use serde::{Deserialize, Serialize};

/// How a user-supplied path argument is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathKind {
    File,
    Directory,
}

impl PathKind {
    /// Noun used in prompts and error messages.
    pub fn noun(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

impl FromStr for PathKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" | "f" => Ok(Self::File),
            "directory" | "d" => Ok(Self::Directory),
            _ => Err(DomainError::InvalidInput {
                input: s.to_string(),
                expected: "path kind (file/f or directory/d)",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_four_spellings_case_insensitively() {
        for input in ["file", "FILE", "f", "F"] {
            assert_eq!(input.parse::<PathKind>().expect(input), PathKind::File);
        }
        for input in ["directory", "Directory", "d", "D"] {
            assert_eq!(input.parse::<PathKind>().expect(input), PathKind::Directory);
        }
    }

    #[test]
    fn rejects_everything_else() {
        for input in ["", "dir", "folder", "files", "fd", " x "] {
            assert!(input.parse::<PathKind>().is_err(), "accepted {input:?}");
        }
    }
}
