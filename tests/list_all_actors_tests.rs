//! Access-control behaviour of the list-all-actors use case
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use proptest::prelude::*;
use rstest::rstest;

use actor_roster_lib::application::{ListAllActorsRequest, ListAllActorsUseCase, UseCaseError};
use actor_roster_lib::domain::{Actor, ActorDirectory, RequesterId};

fn actor(id: &str, is_privileged: bool) -> Actor {
    let now = Utc::now();
    Actor {
        id: id.to_string(),
        name: format!("actor-{id}"),
        email: format!("{id}@example.com"),
        is_privileged,
        created_at: now,
        updated_at: now,
    }
}

/// Directory double that counts calls and serves a fixed listing
struct RecordingDirectory {
    actors: Vec<Actor>,
    listing: Option<Vec<Actor>>,
    find_calls: AtomicUsize,
    list_calls: AtomicUsize,
    last_key: std::sync::Mutex<Option<String>>,
}

impl RecordingDirectory {
    fn new(actors: Vec<Actor>) -> Self {
        Self {
            actors,
            listing: None,
            find_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            last_key: std::sync::Mutex::new(None),
        }
    }

    /// Serve `listing` from `list()` independently of lookup contents
    fn with_listing(mut self, listing: Vec<Actor>) -> Self {
        self.listing = Some(listing);
        self
    }

    fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn last_key(&self) -> Option<String> {
        self.last_key.lock().unwrap().clone()
    }
}

#[async_trait]
impl ActorDirectory for RecordingDirectory {
    async fn find_by_id(&self, actor_id: &str) -> Result<Option<Actor>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_key.lock().unwrap() = Some(actor_id.to_string());
        Ok(self.actors.iter().find(|a| a.id == actor_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Actor>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.listing.clone().unwrap_or_else(|| self.actors.clone()))
    }
}

/// Directory double whose queries fail
struct FailingDirectory {
    fail_lookup: bool,
    requester: Actor,
}

#[async_trait]
impl ActorDirectory for FailingDirectory {
    async fn find_by_id(&self, _actor_id: &str) -> Result<Option<Actor>> {
        if self.fail_lookup {
            return Err(anyhow!("directory unavailable"));
        }
        Ok(Some(self.requester.clone()))
    }

    async fn list(&self) -> Result<Vec<Actor>> {
        Err(anyhow!("listing timed out"))
    }
}

async fn run(directory: Arc<RecordingDirectory>, requester: impl Into<RequesterId>) -> Result<Vec<Actor>, UseCaseError> {
    ListAllActorsUseCase::new(directory)
        .execute(ListAllActorsRequest::new(requester))
        .await
}

#[tokio::test]
async fn scenario_a_sole_privileged_actor_sees_itself() {
    let admin = actor("1", true);
    let directory = Arc::new(RecordingDirectory::new(vec![admin.clone()]));

    let actors = run(directory.clone(), "1").await.unwrap();

    assert_eq!(actors, vec![admin]);
    assert_eq!(directory.find_calls(), 1);
    assert_eq!(directory.list_calls(), 1);
}

#[tokio::test]
async fn scenario_b_unprivileged_actor_is_denied() {
    let directory = Arc::new(RecordingDirectory::new(vec![actor("2", false)]));

    let err = run(directory.clone(), "2").await.unwrap_err();

    assert!(matches!(err, UseCaseError::PermissionDenied { ref actor_id } if actor_id == "2"));
    assert_eq!(directory.list_calls(), 0);
}

#[tokio::test]
async fn scenario_c_unknown_actor_is_not_found() {
    let directory = Arc::new(RecordingDirectory::new(vec![actor("1", true)]));

    let err = run(directory.clone(), "99").await.unwrap_err();

    assert!(matches!(err, UseCaseError::NotFound { ref actor_id } if actor_id == "99"));
    assert_eq!(directory.list_calls(), 0);
}

#[rstest]
#[case::privileged(true, true)]
#[case::unprivileged(false, false)]
#[tokio::test]
async fn privilege_flag_decides_outcome(#[case] is_privileged: bool, #[case] allowed: bool) {
    let directory = Arc::new(RecordingDirectory::new(vec![actor("7", is_privileged)]));

    let outcome = run(directory.clone(), "7").await;

    assert_eq!(outcome.is_ok(), allowed);
    assert_eq!(directory.list_calls(), usize::from(allowed));
}

#[tokio::test]
async fn empty_listing_is_success() {
    let directory = Arc::new(RecordingDirectory::new(vec![actor("1", true)]).with_listing(Vec::new()));

    let actors = run(directory, "1").await.unwrap();

    assert!(actors.is_empty());
}

#[tokio::test]
async fn listing_is_returned_untouched() {
    let dup = actor("3", false);
    let listing = vec![actor("9", false), dup.clone(), actor("1", true), dup];
    let directory = Arc::new(RecordingDirectory::new(vec![actor("1", true)]).with_listing(listing.clone()));

    let actors = run(directory, "1").await.unwrap();

    assert_eq!(actors, listing);
}

#[tokio::test]
async fn list_form_is_collapsed_before_lookup() {
    let directory = Arc::new(RecordingDirectory::new(vec![actor("1", true)]));

    run(directory.clone(), vec!["1".to_string()]).await.unwrap();
    assert_eq!(directory.last_key().as_deref(), Some("1"));

    let err = run(directory.clone(), vec!["1".to_string(), "2".to_string()]).await.unwrap_err();
    assert_eq!(directory.last_key().as_deref(), Some("1,2"));
    assert!(matches!(err, UseCaseError::NotFound { .. }));
}

#[tokio::test]
async fn lookup_failure_propagates() {
    let directory = Arc::new(FailingDirectory { fail_lookup: true, requester: actor("1", true) });

    let err = ListAllActorsUseCase::new(directory)
        .execute(ListAllActorsRequest::new("1"))
        .await
        .unwrap_err();

    assert!(matches!(err, UseCaseError::Directory(_)));
    assert!(err.to_string().contains("directory unavailable"));
}

#[tokio::test]
async fn listing_failure_propagates_after_authorization() {
    let directory = Arc::new(FailingDirectory { fail_lookup: false, requester: actor("1", true) });

    let err = ListAllActorsUseCase::new(directory)
        .execute(ListAllActorsRequest::new("1"))
        .await
        .unwrap_err();

    assert!(matches!(err, UseCaseError::Directory(_)));
    assert!(err.to_string().contains("listing timed out"));
}

#[tokio::test]
async fn listing_failure_is_unreachable_for_unprivileged_requester() {
    let directory = Arc::new(FailingDirectory { fail_lookup: false, requester: actor("1", false) });

    let err = ListAllActorsUseCase::new(directory)
        .execute(ListAllActorsRequest::new("1"))
        .await
        .unwrap_err();

    assert!(matches!(err, UseCaseError::PermissionDenied { .. }));
}

fn actor_id() -> impl Strategy<Value = String> {
    "[a-z0-9-]{1,12}"
}

proptest! {
    #[test]
    fn unknown_requester_never_lists(known in proptest::collection::vec(actor_id(), 0..6), probe in actor_id()) {
        prop_assume!(!known.contains(&probe));
        let actors = known.iter().map(|id| actor(id, true)).collect();
        let directory = Arc::new(RecordingDirectory::new(actors));

        let outcome = tokio_test::block_on(run(directory.clone(), probe.as_str()));

        prop_assert!(matches!(outcome, Err(UseCaseError::NotFound { .. })), "expected NotFound, got {:?}", outcome);
        prop_assert_eq!(directory.list_calls(), 0);
    }

    #[test]
    fn unprivileged_requester_never_lists(id in actor_id()) {
        let directory = Arc::new(RecordingDirectory::new(vec![actor(&id, false)]));

        let outcome = tokio_test::block_on(run(directory.clone(), id.as_str()));

        prop_assert!(matches!(outcome, Err(UseCaseError::PermissionDenied { .. })), "expected PermissionDenied, got {:?}", outcome);
        prop_assert_eq!(directory.list_calls(), 0);
    }

    #[test]
    fn privileged_requester_gets_exact_listing(
        id in actor_id(),
        others in proptest::collection::vec((actor_id(), any::<bool>()), 0..8),
    ) {
        let mut listing: Vec<Actor> = others.iter().map(|(id, p)| actor(id, *p)).collect();
        listing.push(actor(&id, true));
        let directory = Arc::new(RecordingDirectory::new(vec![actor(&id, true)]).with_listing(listing.clone()));

        let actors = tokio_test::block_on(run(directory, id.as_str())).unwrap();

        prop_assert_eq!(actors, listing);
    }

    #[test]
    fn single_element_list_matches_plain_string(id in actor_id(), is_privileged in any::<bool>()) {
        let requester = actor(&id, is_privileged);
        let plain_dir = Arc::new(RecordingDirectory::new(vec![requester.clone()]));
        let list_dir = Arc::new(RecordingDirectory::new(vec![requester]));

        let plain = tokio_test::block_on(run(plain_dir.clone(), id.as_str()));
        let list = tokio_test::block_on(run(list_dir.clone(), vec![id.clone()]));

        prop_assert_eq!(plain.is_ok(), list.is_ok());
        prop_assert_eq!(plain_dir.last_key(), list_dir.last_key());
        prop_assert_eq!(plain.ok(), list.ok());
    }
}
