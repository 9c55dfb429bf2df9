use record_store::{ListingFilter, Record, RecordSource, ResourceId, StoreActor, StoreError};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
struct Book {
    id: ResourceId,
    title: String,
    genre: &'static str,
}

impl Record for Book {
    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> Option<&str> {
        Some(self.genre)
    }
}

fn shelf() -> Vec<Book> {
    [
        ("1", "Dune", "SciFi"),
        ("2", "Emma", "Classic"),
        ("3", "Solaris", "SciFi"),
    ]
    .into_iter()
    .map(|(id, title, genre)| Book {
        id: ResourceId::new(id),
        title: title.to_string(),
        genre,
    })
    .collect()
}

#[tokio::test]
async fn test_get_and_list_against_real_actor() {
    let (actor, client) = StoreActor::new(10, shelf());
    let handle = tokio::spawn(actor.run());

    let dune = client.get(ResourceId::new("1")).await.unwrap().unwrap();
    assert_eq!(dune.title, "Dune");

    // Missing records are not errors
    assert!(client.get(ResourceId::new("9")).await.unwrap().is_none());

    // Listing keeps insertion order
    let all = client.list(ListingFilter::default()).await.unwrap();
    let ids: Vec<&str> = all.iter().map(|b| b.id().as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);

    let scifi = client.list(ListingFilter::category("scifi")).await.unwrap();
    assert_eq!(scifi.len(), 2);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_client_usable_through_record_source() {
    let (actor, client) = StoreActor::new(10, shelf());
    tokio::spawn(actor.with_latency(Duration::from_millis(5)).run());

    let source: Arc<dyn RecordSource<Book>> = Arc::new(client);
    let emma = source.get(ResourceId::new("2")).await.unwrap();
    assert_eq!(emma.map(|b| b.title), Some("Emma".to_string()));
}

#[tokio::test]
async fn test_closed_store_reports_actor_closed() {
    let (actor, client) = StoreActor::new(10, shelf());
    drop(actor);

    let result = client.get(ResourceId::new("1")).await;
    assert_eq!(result, Err(StoreError::ActorClosed));
}
