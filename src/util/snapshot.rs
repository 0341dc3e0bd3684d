//! JSON encoding of [`SessionSnapshot`] for hosts that want to keep a
//! visitor's choices between page loads. No file or network I/O happens here.

use serde_json::Error as SerdeError;

use crate::domain::SessionSnapshot;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot payload is empty")]
    Empty,
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

pub fn encode_snapshot(snapshot: &SessionSnapshot) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

pub fn decode_snapshot(data: &str) -> Result<SessionSnapshot, SnapshotError> {
    if data.trim().is_empty() {
        return Err(SnapshotError::Empty);
    }
    Ok(serde_json::from_str(data)?)
}
