//! # Session Context
//!
//! The signed-in user, shared between whoever authenticates and whoever renders.
//!
//! There is exactly one writer, the [`SessionHandle`], held by the authentication
//! collaborator. Readers get a [`SessionReader`], which can be cloned freely and only ever
//! observes the latest value. Both sides are backed by a `tokio::sync::watch` channel, so a
//! reader never blocks a writer and never sees a torn update.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
}

/// Creates a signed-out session and returns its writer and a reader.
pub fn session_context() -> (SessionHandle, SessionReader) {
    let (sender, receiver) = watch::channel(None);
    (SessionHandle { sender }, SessionReader { receiver })
}

/// Write side of the session.
#[derive(Debug)]
pub struct SessionHandle {
    sender: watch::Sender<Option<CurrentUser>>,
}

impl SessionHandle {
    pub fn sign_in(&self, user: CurrentUser) {
        tracing::info!(email = %user.email, "Signed in");
        self.sender.send_replace(Some(user));
    }

    pub fn sign_out(&self) {
        if self.sender.send_replace(None).is_some() {
            tracing::info!("Signed out");
        }
    }

    pub fn reader(&self) -> SessionReader {
        SessionReader {
            receiver: self.sender.subscribe(),
        }
    }
}

/// Read side of the session.
#[derive(Debug, Clone)]
pub struct SessionReader {
    receiver: watch::Receiver<Option<CurrentUser>>,
}

impl SessionReader {
    pub fn current(&self) -> Option<CurrentUser> {
        self.receiver.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readers_see_latest_user() {
        let (handle, reader) = session_context();
        let late_reader = handle.reader();
        assert_eq!(reader.current(), None);

        handle.sign_in(CurrentUser {
            name: "Ada".into(),
            email: "ada@example.com".into(),
        });
        assert_eq!(reader.current().map(|u| u.name), Some("Ada".to_string()));
        assert_eq!(late_reader.current().map(|u| u.name), Some("Ada".to_string()));

        handle.sign_out();
        assert_eq!(reader.current(), None);
    }

    #[test]
    fn reader_outlives_handle() {
        let (handle, reader) = session_context();
        handle.sign_in(CurrentUser {
            name: "Lin".into(),
            email: "lin@example.com".into(),
        });
        drop(handle);
        assert!(reader.current().is_some());
    }
}
