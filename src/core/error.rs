//! Error types for index construction and snapshot loading

use thiserror::Error;

/// Malformed input rejected while building the read-model indexes.
///
/// The aggregation engine itself never fails: dangling references are
/// zero contributions. Everything here is caught at the boundary where
/// records enter the indexes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// A record was supplied with a blank identifier
    #[error("{kind} has an empty id")]
    EmptyId {
        /// Record kind ("user", "achievement", ...)
        kind: &'static str,
    },

    /// Two records of the same kind share an id
    #[error("duplicate {kind} id '{id}'")]
    Duplicate {
        /// Record kind ("user", "achievement", ...)
        kind: &'static str,
        /// The repeated id
        id: String,
    },

    /// An achievement carries a negative point value
    #[error("achievement '{achievement_id}' has negative points ({points})")]
    NegativePoints {
        /// Offending achievement
        achievement_id: String,
        /// Raw value as supplied
        points: i64,
    },

    /// A checkin carries a negative achievement count
    #[error("checkin '{checkin_id}' has negative count {count} for achievement '{achievement_id}'")]
    NegativeCount {
        /// Offending checkin
        checkin_id: String,
        /// Achievement the count belongs to
        achievement_id: String,
        /// Raw value as supplied
        count: i64,
    },

    /// A checkin count does not fit the count type
    #[error("checkin '{checkin_id}' count {count} for achievement '{achievement_id}' is out of range")]
    CountOutOfRange {
        /// Offending checkin
        checkin_id: String,
        /// Achievement the count belongs to
        achievement_id: String,
        /// Raw value as supplied
        count: i64,
    },

    /// An update referenced a checkin that is not indexed
    #[error("unknown checkin '{0}'")]
    UnknownCheckin(String),
}

/// Failure to load a snapshot file into read models
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid snapshot TOML
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The records parsed but failed validation
    #[error("invalid snapshot: {0}")]
    Index(#[from] IndexError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_messages() {
        let err = IndexError::Duplicate {
            kind: "user",
            id: "u1".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate user id 'u1'");

        let err = IndexError::NegativePoints {
            achievement_id: "a1".to_string(),
            points: -5,
        };
        assert_eq!(err.to_string(), "achievement 'a1' has negative points (-5)");
    }

    #[test]
    fn test_snapshot_error_wraps_index_error() {
        let err = SnapshotError::from(IndexError::UnknownCheckin("c9".to_string()));
        assert_eq!(err.to_string(), "invalid snapshot: unknown checkin 'c9'");
    }
}
