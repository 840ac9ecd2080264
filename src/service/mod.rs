//! Event membership service.
//!
//! # Purpose
//! Owns the join-event use case and the other document-backed operations
//! (registration, event catalog, reviews, visitor/member counters). Handlers
//! never touch the store directly; everything goes through this service so
//! the read-check-write sequence of the join workflow lives in one place.
//!
//! # Consistency
//! The store offers per-document atomicity only. The join workflow performs
//! two independent persisted writes (user record, event record) with no
//! transaction across them; see `join_event` for the exact contract.
use crate::model::{Event, JoinRecord, Review, User, as_document};
use crate::store::{Document, DocumentStore, StoreError, StoreResult};
use serde_json::Value;
use std::sync::Arc;

mod seed;

pub const USERS: &str = "users";
pub const EVENTS: &str = "events";
pub const REVIEWS: &str = "reviews";
pub const STATS: &str = "stats";

/// Document id of the per-day visitor counters inside the stats collection.
const VISITORS_DOC: &str = "visitors";

/// Outcome of a join attempt. All five cases are ordinary results, not
/// errors; only store failures surface as `StoreError`.
#[derive(Debug)]
pub enum JoinOutcome {
    Joined(Event),
    AlreadyJoined,
    EventFull,
    EventNotFound,
    UserNotRegistered,
}

impl JoinOutcome {
    /// Stable machine-readable code, used for metrics labels and as the
    /// message-catalog key for user-visible text.
    pub fn code(&self) -> &'static str {
        match self {
            JoinOutcome::Joined(_) => "joined",
            JoinOutcome::AlreadyJoined => "already_joined",
            JoinOutcome::EventFull => "event_full",
            JoinOutcome::EventNotFound => "event_not_found",
            JoinOutcome::UserNotRegistered => "user_not_registered",
        }
    }
}

#[derive(Clone)]
pub struct EventMembershipService {
    store: Arc<dyn DocumentStore>,
}

impl EventMembershipService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Execute the join-event use case.
    ///
    /// Steps 1-4 are read-only: resolve the user by display name, check the
    /// user's join history, load the event, check capacity. Step 5 performs
    /// exactly two independent persisted writes (user update, then event
    /// counter increment + name-list update). The writes are not a
    /// transaction: a crash or store error between them leaves the two sides
    /// out of sync, and two concurrent joins near capacity can both pass the
    /// capacity check. Closing that race needs a store transaction or a
    /// per-event sequencing point, which the store contract does not offer.
    ///
    /// Identity is resolved by display name, not by the stable student id;
    /// duplicate names collide. Preserved deliberately from the source
    /// design, see DESIGN.md.
    pub async fn join_event(&self, user_name: &str, event_id: &str) -> StoreResult<JoinOutcome> {
        let Some(user) = self.lookup_user_by_name(user_name).await? else {
            return Ok(self.finish_join(JoinOutcome::UserNotRegistered));
        };

        if user.has_joined(event_id) {
            return Ok(self.finish_join(JoinOutcome::AlreadyJoined));
        }

        let Some(mut event) = self.get_event(event_id).await? else {
            return Ok(self.finish_join(JoinOutcome::EventNotFound));
        };

        if event.is_full() {
            return Ok(self.finish_join(JoinOutcome::EventFull));
        }

        let record = JoinRecord {
            event_id: event_id.to_string(),
            event_title: event.title_en.clone(),
            joined_at: chrono::Utc::now().to_rfc3339(),
        };
        let mut joined_events = user.joined_events.clone();
        joined_events.push(record);

        // Write 1 of 2: persist the user's membership.
        let mut user_patch = Document::new();
        user_patch.insert(
            "joined_events".to_string(),
            serde_json::to_value(&joined_events).map_err(|err| StoreError::Unexpected(err.into()))?,
        );
        self.store.update(USERS, &user.id, user_patch).await?;

        // Write 2 of 2: the counter goes through the store's atomic add so
        // concurrent joins cannot lose increments; the name list is a plain
        // merge and can drift from the counter under concurrency.
        let count = self
            .store
            .increment(EVENTS, event_id, "current_participants", 1)
            .await?;
        let mut names = event.participant_names.clone();
        names.push(user_name.to_string());
        let mut event_patch = Document::new();
        event_patch.insert(
            "participant_names".to_string(),
            serde_json::to_value(&names).map_err(|err| StoreError::Unexpected(err.into()))?,
        );
        self.store.update(EVENTS, event_id, event_patch).await?;

        event.current_participants = count.max(0) as u32;
        event.participant_names = names;
        Ok(self.finish_join(JoinOutcome::Joined(event)))
    }

    fn finish_join(&self, outcome: JoinOutcome) -> JoinOutcome {
        metrics::counter!("nodex_joins_total", "result" => outcome.code()).increment(1);
        outcome
    }

    /// Register (or re-register) a member.
    ///
    /// The student id is the document key and `set` is a full overwrite, so
    /// re-registering an existing id replaces the whole record including the
    /// joined-events history. Deliberate overwrite-on-duplicate-key policy.
    pub async fn register_user(
        &self,
        name: &str,
        student_id: &str,
        email: &str,
        created_at: Option<String>,
    ) -> StoreResult<User> {
        let user = User {
            id: student_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            created_at: created_at.unwrap_or_else(today),
            joined_events: Vec::new(),
        };
        self.store.set(USERS, student_id, as_document(&user)).await?;
        Ok(user)
    }

    pub async fn lookup_user_by_name(&self, name: &str) -> StoreResult<Option<User>> {
        let mut hits = self
            .store
            .query(USERS, "name", &Value::from(name))
            .await?;
        match hits.pop() {
            Some(doc) => Ok(Some(decode_user(doc)?)),
            None => Ok(None),
        }
    }

    pub async fn get_user(&self, student_id: &str) -> StoreResult<Option<User>> {
        match self.store.get(USERS, student_id).await? {
            Some(doc) => Ok(Some(decode_user(doc)?)),
            None => Ok(None),
        }
    }

    pub async fn get_event(&self, event_id: &str) -> StoreResult<Option<Event>> {
        match self.store.get(EVENTS, event_id).await? {
            Some(doc) => Ok(Some(decode_event(doc)?)),
            None => Ok(None),
        }
    }

    /// All events, ordered by date then title so listings are stable across
    /// requests regardless of store iteration order.
    pub async fn list_events(&self) -> StoreResult<Vec<Event>> {
        let docs = self.store.stream(EVENTS).await?;
        let mut events = Vec::with_capacity(docs.len());
        for doc in docs {
            events.push(decode_event(doc)?);
        }
        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.title_en.cmp(&b.title_en)));
        Ok(events)
    }

    pub async fn create_event(&self, mut event: Event) -> StoreResult<Event> {
        event.id.clear();
        let id = self.store.add(EVENTS, as_document(&event)).await?;
        event.id = id;
        Ok(event)
    }

    pub async fn delete_event(&self, event_id: &str) -> StoreResult<()> {
        self.store.delete(EVENTS, event_id).await
    }

    /// Insert the built-in catalog, but only into an empty collection so a
    /// repeated seed call cannot duplicate events. Returns how many were
    /// inserted.
    pub async fn seed_events(&self) -> StoreResult<usize> {
        if !self.store.stream(EVENTS).await?.is_empty() {
            return Ok(0);
        }
        let events = seed::default_events();
        let inserted = events.len();
        for event in events {
            self.store.add(EVENTS, as_document(&event)).await?;
        }
        Ok(inserted)
    }

    pub async fn list_reviews(&self) -> StoreResult<Vec<Review>> {
        let docs = self.store.stream(REVIEWS).await?;
        let mut reviews = Vec::with_capacity(docs.len());
        for doc in docs {
            reviews.push(Review::from_document(doc).map_err(|err| StoreError::Unexpected(err.into()))?);
        }
        reviews.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(reviews)
    }

    pub async fn add_review(&self, mut review: Review) -> StoreResult<Review> {
        review.id.clear();
        let id = self.store.add(REVIEWS, as_document(&review)).await?;
        review.id = id;
        Ok(review)
    }

    /// Count today's visit. Always an atomic add-to-field, never get-then-set,
    /// so overlapping visits from independent clients all land.
    pub async fn record_visit(&self) -> StoreResult<i64> {
        let count = self
            .store
            .increment(STATS, VISITORS_DOC, &today(), 1)
            .await?;
        metrics::counter!("nodex_visits_total").increment(1);
        Ok(count)
    }

    pub async fn visitor_count(&self, date: &str) -> StoreResult<i64> {
        Ok(self
            .store
            .get(STATS, VISITORS_DOC)
            .await?
            .and_then(|doc| doc.get(date).and_then(Value::as_i64))
            .unwrap_or(0))
    }

    pub async fn member_count(&self) -> StoreResult<usize> {
        Ok(self.store.stream(USERS).await?.len())
    }

    pub async fn registrations_on(&self, date: &str) -> StoreResult<usize> {
        Ok(self
            .store
            .query(USERS, "created_at", &Value::from(date))
            .await?
            .len())
    }
}

/// Current calendar date, `YYYY-MM-DD`, in server-local time.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn decode_user(doc: Document) -> StoreResult<User> {
    User::from_document(doc).map_err(|err| StoreError::Unexpected(err.into()))
}

fn decode_event(doc: Document) -> StoreResult<Event> {
    Event::from_document(doc).map_err(|err| StoreError::Unexpected(err.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;

    fn service() -> EventMembershipService {
        EventMembershipService::new(Arc::new(InMemoryStore::new()))
    }

    async fn insert_event(service: &EventMembershipService, fields: Value) -> String {
        service
            .store()
            .add(EVENTS, fields.as_object().expect("object").clone())
            .await
            .expect("insert event")
    }

    #[tokio::test]
    async fn join_happy_path_updates_both_sides() {
        let service = service();
        service
            .register_user("Kim", "20231234", "k@x.com", None)
            .await
            .expect("register");
        let event_id = insert_event(
            &service,
            json!({
                "title_en": "Welcome Party",
                "current_participants": 19,
                "max_participants": 20
            }),
        )
        .await;

        let outcome = service.join_event("Kim", &event_id).await.expect("join");
        let JoinOutcome::Joined(event) = outcome else {
            panic!("expected Joined, got {outcome:?}");
        };
        assert_eq!(event.current_participants, 20);
        assert!(event.participant_names.contains(&"Kim".to_string()));

        let user = service.get_user("20231234").await.expect("get").unwrap();
        assert_eq!(user.joined_events.len(), 1);
        assert_eq!(user.joined_events[0].event_id, event_id);
        assert_eq!(user.joined_events[0].event_title, "Welcome Party");
    }

    #[tokio::test]
    async fn second_join_is_idempotent() {
        let service = service();
        service
            .register_user("Kim", "20231234", "k@x.com", None)
            .await
            .expect("register");
        let event_id = insert_event(
            &service,
            json!({"title_en": "Welcome Party", "max_participants": 20}),
        )
        .await;

        let first = service.join_event("Kim", &event_id).await.expect("join");
        assert!(matches!(first, JoinOutcome::Joined(_)));

        let second = service.join_event("Kim", &event_id).await.expect("join");
        assert!(matches!(second, JoinOutcome::AlreadyJoined));

        // No further mutation on either side.
        let user = service.get_user("20231234").await.expect("get").unwrap();
        assert_eq!(user.joined_events.len(), 1);
        let event = service.get_event(&event_id).await.expect("get").unwrap();
        assert_eq!(event.current_participants, 1);
        assert_eq!(event.participant_names, vec!["Kim".to_string()]);
    }

    #[tokio::test]
    async fn unregistered_name_causes_no_mutation() {
        let service = service();
        let event_id = insert_event(
            &service,
            json!({"title_en": "Welcome Party", "max_participants": 20}),
        )
        .await;

        let outcome = service.join_event("Ghost", &event_id).await.expect("join");
        assert!(matches!(outcome, JoinOutcome::UserNotRegistered));

        let event = service.get_event(&event_id).await.expect("get").unwrap();
        assert_eq!(event.current_participants, 0);
        assert!(event.participant_names.is_empty());
    }

    #[tokio::test]
    async fn full_event_rejects_join_without_mutation() {
        let service = service();
        service
            .register_user("Kim", "20231234", "k@x.com", None)
            .await
            .expect("register");
        let event_id = insert_event(
            &service,
            json!({
                "title_en": "Welcome Party",
                "current_participants": 20,
                "max_participants": 20
            }),
        )
        .await;

        let outcome = service.join_event("Kim", &event_id).await.expect("join");
        assert!(matches!(outcome, JoinOutcome::EventFull));

        let event = service.get_event(&event_id).await.expect("get").unwrap();
        assert_eq!(event.current_participants, 20);
        let user = service.get_user("20231234").await.expect("get").unwrap();
        assert!(user.joined_events.is_empty());
    }

    #[tokio::test]
    async fn missing_event_reports_not_found() {
        let service = service();
        service
            .register_user("Kim", "20231234", "k@x.com", None)
            .await
            .expect("register");
        let outcome = service.join_event("Kim", "missing").await.expect("join");
        assert!(matches!(outcome, JoinOutcome::EventNotFound));
    }

    #[tokio::test]
    async fn capacity_never_exceeded_by_sequential_joins() {
        let service = service();
        let event_id = insert_event(
            &service,
            json!({"title_en": "Board Game Night", "max_participants": 3}),
        )
        .await;

        for (index, name) in ["Kim", "Lee", "Park", "Choi", "Jung"].iter().enumerate() {
            service
                .register_user(name, &format!("2023{index:04}"), "", None)
                .await
                .expect("register");
            let outcome = service.join_event(name, &event_id).await.expect("join");
            if index < 3 {
                assert!(matches!(outcome, JoinOutcome::Joined(_)));
            } else {
                assert!(matches!(outcome, JoinOutcome::EventFull));
            }
        }

        let event = service.get_event(&event_id).await.expect("get").unwrap();
        assert_eq!(event.current_participants, 3);
        assert_eq!(event.participant_names.len(), 3);
        assert!(event.current_participants <= event.max_participants);
    }

    #[tokio::test]
    async fn reregistration_overwrites_history() {
        let service = service();
        service
            .register_user("Kim", "20231234", "k@x.com", None)
            .await
            .expect("register");
        let event_id = insert_event(
            &service,
            json!({"title_en": "Welcome Party", "max_participants": 20}),
        )
        .await;
        let outcome = service.join_event("Kim", &event_id).await.expect("join");
        assert!(matches!(outcome, JoinOutcome::Joined(_)));

        // Same student id, new details: full overwrite, not a merge.
        let user = service
            .register_user("Kim Minjun", "20231234", "mj@x.com", None)
            .await
            .expect("re-register");
        assert_eq!(user.name, "Kim Minjun");

        let stored = service.get_user("20231234").await.expect("get").unwrap();
        assert_eq!(stored.name, "Kim Minjun");
        assert_eq!(stored.email, "mj@x.com");
        assert!(stored.joined_events.is_empty(), "history must be lost");
    }

    #[tokio::test]
    async fn concurrent_visits_all_count() {
        let service = service();
        let mut handles = Vec::new();
        for _ in 0..25 {
            let service = service.clone();
            handles.push(tokio::spawn(async move { service.record_visit().await }));
        }
        for handle in handles {
            handle.await.expect("task").expect("visit");
        }
        let count = service.visitor_count(&today()).await.expect("count");
        assert_eq!(count, 25);
    }

    #[tokio::test]
    async fn visitor_count_defaults_to_zero() {
        let service = service();
        assert_eq!(service.visitor_count("1970-01-01").await.expect("count"), 0);
    }

    #[tokio::test]
    async fn registration_counters_track_dates() {
        let service = service();
        service
            .register_user("Kim", "1", "", Some("2026-08-27".to_string()))
            .await
            .expect("register");
        service
            .register_user("Lee", "2", "", Some("2026-08-27".to_string()))
            .await
            .expect("register");
        service
            .register_user("Park", "3", "", Some("2026-08-26".to_string()))
            .await
            .expect("register");

        assert_eq!(service.member_count().await.expect("count"), 3);
        assert_eq!(
            service.registrations_on("2026-08-27").await.expect("count"),
            2
        );
        assert_eq!(
            service.registrations_on("2026-08-25").await.expect("count"),
            0
        );
    }

    #[tokio::test]
    async fn seed_only_populates_empty_collection() {
        let service = service();
        let first = service.seed_events().await.expect("seed");
        assert!(first > 0);
        let second = service.seed_events().await.expect("seed");
        assert_eq!(second, 0);

        let events = service.list_events().await.expect("list");
        assert_eq!(events.len(), first);
        assert!(events.iter().all(|event| !event.id.is_empty()));
    }

    #[tokio::test]
    async fn events_listing_is_sorted_by_date() {
        let service = service();
        insert_event(
            &service,
            json!({"title_en": "Later", "date": "2026-10-01", "max_participants": 5}),
        )
        .await;
        insert_event(
            &service,
            json!({"title_en": "Sooner", "date": "2026-09-01", "max_participants": 5}),
        )
        .await;

        let events = service.list_events().await.expect("list");
        assert_eq!(events[0].title_en, "Sooner");
        assert_eq!(events[1].title_en, "Later");
    }

    #[tokio::test]
    async fn reviews_roundtrip() {
        let service = service();
        let review = service
            .add_review(Review {
                id: String::new(),
                user: "Kim".to_string(),
                rating: 5,
                comment: "Great event!".to_string(),
                image: String::new(),
            })
            .await
            .expect("add");
        assert!(!review.id.is_empty());

        let reviews = service.list_reviews().await.expect("list");
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].user, "Kim");
    }

    #[tokio::test]
    async fn null_store_degrades_to_empty_reads_and_noop_writes() {
        let service = EventMembershipService::new(Arc::new(crate::store::null::NullStore));
        assert!(service.list_events().await.expect("list").is_empty());
        assert_eq!(service.member_count().await.expect("count"), 0);
        assert_eq!(service.record_visit().await.expect("visit"), 0);

        // A registration is accepted but dropped; a join then reports the
        // user as unregistered because nothing was persisted.
        service
            .register_user("Kim", "20231234", "", None)
            .await
            .expect("register");
        let outcome = service.join_event("Kim", "E1").await.expect("join");
        assert!(matches!(outcome, JoinOutcome::UserNotRegistered));
    }
}
