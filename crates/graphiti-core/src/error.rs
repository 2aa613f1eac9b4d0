use std::fmt;

/// Machine-readable error codes for build and query failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NodeNotFound,
    BrokenEdge,
    NegativeCost,
    ContractViolation,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NodeNotFound => "E2001",
            Self::BrokenEdge => "E2002",
            Self::NegativeCost => "E2003",
            Self::ContractViolation => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NodeNotFound => "Node not found",
            Self::BrokenEdge => "Edge target cannot be resolved",
            Self::NegativeCost => "Edge with negative cost",
            Self::ContractViolation => "Adapter returned mismatched neighbor lists",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::NodeNotFound => Some("Check the seed list or the source's node enumeration."),
            Self::BrokenEdge => Some("Add the missing target node or drop the dangling edge."),
            Self::NegativeCost => Some("Edge costs must be zero or positive."),
            Self::ContractViolation => {
                Some("Fix the adapter: neighbor ids and costs must have equal length.")
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Structural fault found while building a graph, or an unknown id passed
/// to a query.
///
/// Everything except [`GraphError::ContractViolation`] is recoverable in a
/// lenient build: the offending node or edge is skipped and the error is
/// collected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError<Id> {
    /// The id is unknown to the source (during a build) or to the built
    /// graph (during a query).
    #[error("node not found: {id}")]
    NodeNotFound { id: Id },

    /// An edge points at an id the source cannot resolve.
    #[error("broken edge: {from}->{to}")]
    BrokenEdge { from: Id, to: Id },

    #[error("edge with negative cost: ({from},{to})={cost}")]
    NegativeCost { from: Id, to: Id, cost: i64 },

    /// `neighbors` returned `expected` ids but `actual` costs.
    #[error("neighbor lengths differ: {expected} != {actual}")]
    ContractViolation { expected: usize, actual: usize },
}

impl<Id> GraphError<Id> {
    /// The machine-readable code for this error kind.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NodeNotFound { .. } => ErrorCode::NodeNotFound,
            Self::BrokenEdge { .. } => ErrorCode::BrokenEdge,
            Self::NegativeCost { .. } => ErrorCode::NegativeCost,
            Self::ContractViolation { .. } => ErrorCode::ContractViolation,
        }
    }

    /// Fatal errors abort a build regardless of mode.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::ContractViolation { .. })
    }
}
