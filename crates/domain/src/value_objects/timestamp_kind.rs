use std::str::FromStr;

use redate_shared_kernel::DomainError;
use serde::{Deserialize, Serialize};

/// Which of the three OS-tracked file time attributes is being changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampKind {
    Created,
    Modified,
    Accessed,
}

impl TimestampKind {
    /// Attribute name used in reports and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Modified => "modified",
            Self::Accessed => "accessed",
        }
    }
}

impl FromStr for TimestampKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "created" => Ok(Self::Created),
            "modified" => Ok(Self::Modified),
            "accessed" => Ok(Self::Accessed),
            _ => Err(DomainError::InvalidInput {
                input: s.to_string(),
                expected: "timestamp kind (created, modified or accessed)",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_three_attributes_case_insensitively() {
        assert_eq!("created".parse::<TimestampKind>().unwrap(), TimestampKind::Created);
        assert_eq!("MODIFIED".parse::<TimestampKind>().unwrap(), TimestampKind::Modified);
        assert_eq!("Accessed".parse::<TimestampKind>().unwrap(), TimestampKind::Accessed);
    }

    #[test]
    fn rejects_abbreviations_and_garbage() {
        for input in ["", "c", "create", "mtime", "atime", "changed"] {
            assert!(input.parse::<TimestampKind>().is_err(), "accepted {input:?}");
        }
    }
}
