//! Messages sent from the client to the server

mod apply_healing_item;

pub use apply_healing_item::{ApplyHealingItem, HealingOutcome};

use crate::types::SubjectId;
use thiserror::Error;

/// Errors while decoding or handling a message
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MessageError {
    #[error("message truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("unknown body part ordinal {0}")]
    UnknownPart(u8),
    #[error("message for subject {0} handled outside the server")]
    NotServer(SubjectId),
}
