//! # Navigator Client
//!
//! The handle the UI layer drives the navigator with. Every method sends one command and waits
//! for the state it committed.
//!
//! Methods map one-to-one onto user gestures:
//!
//! | Method | Gesture | Arrival |
//! |--------|---------|---------|
//! | [`load`](NavigatorClient::load) | typing an address, opening a bookmark | hard |
//! | [`reload`](NavigatorClient::reload), [`view_full_page`](NavigatorClient::view_full_page) | refresh | hard |
//! | [`navigate`](NavigatorClient::navigate), [`open_record`](NavigatorClient::open_record) | clicking a link | soft |
//! | [`back`](NavigatorClient::back), [`forward`](NavigatorClient::forward) | browser buttons | soft |
//! | [`press_key`](NavigatorClient::press_key), [`click_backdrop`](NavigatorClient::click_backdrop), [`click_close`](NavigatorClient::click_close) | dismissing an overlay | - |
use crate::navigation::{DismissGesture, NavigationError, PointerTarget};
use crate::navigator::message::{Command, NavigatorRequest};
use crate::navigator::snapshot::NavigatorSnapshot;
use record_store::{ListingFilter, Record, ResourceId};
use tokio::sync::{mpsc, oneshot};
use tracing::instrument;

type Outcome<T> = Result<NavigatorSnapshot<T>, NavigationError>;

#[derive(Clone)]
pub struct NavigatorClient<T: Record> {
    sender: mpsc::Sender<NavigatorRequest<T>>,
}

impl<T: Record> NavigatorClient<T> {
    pub fn new(sender: mpsc::Sender<NavigatorRequest<T>>) -> Self {
        Self { sender }
    }

    async fn send(&self, command: Command) -> Outcome<T> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(NavigatorRequest {
                command,
                respond_to,
            })
            .await
            .map_err(|_| NavigationError::NavigatorClosed)?;
        response
            .await
            .map_err(|_| NavigationError::NavigatorDropped)?
    }

    #[instrument(skip(self))]
    pub async fn load(&self, address: &str) -> Outcome<T> {
        self.send(Command::Load(address.to_string())).await
    }

    #[instrument(skip(self))]
    pub async fn reload(&self) -> Outcome<T> {
        self.send(Command::Reload).await
    }

    /// The overlay's "view full page" action. The overlay already sits at the record's
    /// canonical address, so this is a reload of it.
    #[instrument(skip(self))]
    pub async fn view_full_page(&self) -> Outcome<T> {
        self.send(Command::Reload).await
    }

    #[instrument(skip(self))]
    pub async fn navigate(&self, address: &str) -> Outcome<T> {
        self.send(Command::Navigate(address.to_string())).await
    }

    #[instrument(skip(self))]
    pub async fn open_record(&self, id: ResourceId) -> Outcome<T> {
        self.send(Command::OpenRecord(id)).await
    }

    #[instrument(skip(self))]
    pub async fn gesture(&self, gesture: DismissGesture) -> Outcome<T> {
        self.send(Command::Gesture(gesture)).await
    }

    pub async fn press_key(&self, key: &str) -> Outcome<T> {
        self.gesture(DismissGesture::Key(key.to_string())).await
    }

    pub async fn click_backdrop(&self) -> Outcome<T> {
        self.gesture(DismissGesture::Pointer(PointerTarget::Backdrop))
            .await
    }

    pub async fn click_content(&self) -> Outcome<T> {
        self.gesture(DismissGesture::Pointer(PointerTarget::Content))
            .await
    }

    pub async fn click_close(&self) -> Outcome<T> {
        self.gesture(DismissGesture::CloseControl).await
    }

    /// Close the overlay directly, without going through a gesture listener.
    #[instrument(skip(self))]
    pub async fn dismiss(&self) -> Outcome<T> {
        self.send(Command::Dismiss).await
    }

    #[instrument(skip(self))]
    pub async fn back(&self) -> Outcome<T> {
        self.send(Command::Back).await
    }

    #[instrument(skip(self))]
    pub async fn forward(&self) -> Outcome<T> {
        self.send(Command::Forward).await
    }

    #[instrument(skip(self))]
    pub async fn scroll_listing(&self, offset: u32) -> Outcome<T> {
        self.send(Command::ScrollListing(offset)).await
    }

    #[instrument(skip(self))]
    pub async fn filter_listing(&self, filter: ListingFilter) -> Outcome<T> {
        self.send(Command::FilterListing(filter)).await
    }

    #[instrument(skip(self))]
    pub async fn retry(&self) -> Outcome<T> {
        self.send(Command::Retry).await
    }

    #[instrument(skip(self))]
    pub async fn escape(&self) -> Outcome<T> {
        self.send(Command::Escape).await
    }

    pub async fn snapshot(&self) -> Outcome<T> {
        self.send(Command::Snapshot).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    #[tokio::test]
    async fn test_commands_reach_the_channel() {
        let (sender, mut receiver) = mpsc::channel::<NavigatorRequest<Product>>(4);
        let client = NavigatorClient::new(sender);

        let task = tokio::spawn(async move { client.press_key("Escape").await });

        let request = receiver.recv().await.expect("Expected a request");
        assert_eq!(
            request.command,
            Command::Gesture(DismissGesture::Key("Escape".into()))
        );
        drop(request);

        assert_eq!(
            task.await.unwrap().unwrap_err(),
            NavigationError::NavigatorDropped
        );
    }

    #[tokio::test]
    async fn test_closed_navigator() {
        let (sender, receiver) = mpsc::channel::<NavigatorRequest<Product>>(4);
        drop(receiver);

        let result = NavigatorClient::new(sender).snapshot().await;
        assert_eq!(result.unwrap_err(), NavigationError::NavigatorClosed);
    }
}
