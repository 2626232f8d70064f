use std::fmt;

use thiserror::Error;

/// Unique tag attached to every outgoing request and echoed by its completion.
pub type RequestId = u64;

/// A network or server failure as seen by the core. The transport detail has
/// already been flattened into `message` by the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestFailure {
    pub message: String,
}

impl RequestFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Which user-facing operation a failed request belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    LoadMore,
    LoadFavourites,
    AddFavourite,
    RemoveFavourite,
    LoadSummary,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Search => "search",
            Operation::LoadMore => "load more",
            Operation::LoadFavourites => "load favourites",
            Operation::AddFavourite => "add favourite",
            Operation::RemoveFavourite => "remove favourite",
            Operation::LoadSummary => "load summary",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    pub operation: Operation,
    pub failure: RequestFailure,
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.operation, self.failure)
    }
}

/// How a completion was absorbed by the controller that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Settlement {
    Applied,
    Failed(FailureReport),
    /// The request was superseded; its payload was dropped.
    Stale,
    /// The payload was dropped because confirmed local changes happened after
    /// it was requested; the caller should ask again.
    Outdated,
}
