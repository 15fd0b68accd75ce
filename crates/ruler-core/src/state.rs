//! View-state persistence.
//!
//! The only state that survives view recreation is the rotation angle. It
//! rides whatever state container the host uses as a small postcard-encoded
//! record; a snapshot the decoder does not recognize simply leaves the
//! construction-time value in effect.

use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

/// Buffer size sufficient for an encoded [`ViewState`].
pub const VIEW_STATE_BUF_LEN: usize = 8;

/// Error types for view-state snapshots
#[derive(Debug, Error)]
pub enum StateError {
    /// The snapshot bytes could not be encoded or decoded.
    #[error("view state codec failure: {0}")]
    Codec(postcard::Error),
}

impl From<postcard::Error> for StateError {
    fn from(err: postcard::Error) -> Self {
        Self::Codec(err)
    }
}

/// Minimal saved-state record for the ruler view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Normalized rotation in degrees (`0..360`).
    pub rotate_degree: u16,
}

impl ViewState {
    /// Encode the snapshot into `buf`, returning the written prefix.
    pub fn write_to<'a>(&self, buf: &'a mut [u8]) -> Result<&'a [u8], StateError> {
        let used = postcard::to_slice(self, buf)?;
        Ok(used)
    }

    /// Decode a snapshot from host-supplied bytes.
    pub fn read_from(bytes: &[u8]) -> Result<Self, StateError> {
        Ok(postcard::from_bytes(bytes)?)
    }
}
