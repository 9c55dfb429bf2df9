use crate::navigation::fallback::{RuntimeFault, Scope};
use record_store::ResourceId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The identifier has no record. Rendered in place by the scoped not-found page.
    #[error("No record {id} in {scope}")]
    RecordNotFound { id: ResourceId, scope: Scope },

    /// Something failed unexpectedly while rendering. Caught by the scoped fault boundary.
    #[error("Runtime fault in {scope}: {fault}")]
    RuntimeFault { scope: Scope, fault: RuntimeFault },

    /// An overlay close found no intercepted entry to step back over.
    #[error("History desync: close requested at {address} with no intercepted entry")]
    HistoryDesync { address: String },

    #[error("Navigation to {0} was superseded")]
    Superseded(String),

    #[error("Navigator closed")]
    NavigatorClosed,

    #[error("Navigator dropped")]
    NavigatorDropped,
}
