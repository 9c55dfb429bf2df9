//! # Navigator
//!
//! The actor that turns user gestures into rendered state. See [`actor`] for the event loop
//! and its ordering rules.

pub mod actor;
pub mod message;
pub mod snapshot;

pub use actor::{NavigatorActor, NavigatorContext};
pub use message::{Command, NavigatorRequest, Response};
pub use snapshot::NavigatorSnapshot;

use crate::clients::NavigatorClient;
use crate::config::NavigatorConfig;
use crate::navigation::{HistoryBackend, MemoryHistory};
use record_store::Record;
use tokio::sync::mpsc;

/// Creates a navigator over an in-memory history stack, and its client.
pub fn new<T: Record>(config: &NavigatorConfig) -> (NavigatorActor<T>, NavigatorClient<T>) {
    with_history(config, Box::new(MemoryHistory::new()))
}

/// Creates a navigator over a host-provided history stack.
pub fn with_history<T: Record>(
    config: &NavigatorConfig,
    history: Box<dyn HistoryBackend>,
) -> (NavigatorActor<T>, NavigatorClient<T>) {
    let (sender, receiver) = mpsc::channel(config.command_buffer);
    let actor = NavigatorActor::new(receiver, config.clone(), history);
    (actor, NavigatorClient::new(sender))
}
