//! SHA-256 fingerprints of finished games.

use othello_engine::GameLog;
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `text`.
pub fn fingerprint(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

/// Fingerprint of a game log in its numbered display form.
/// Two games share a fingerprint only if they made the same moves on the same board size.
pub fn log_fingerprint(log: &GameLog) -> String {
    fingerprint(&log.to_string())
}
