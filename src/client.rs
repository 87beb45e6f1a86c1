//! HTTP client for the firm's scheduling webhook API.
//!
//! One method per endpoint, no retry, no caching. Transport failures
//! surface as `DocketError::Connection`; a completed request with
//! `success = false` surfaces as `DocketError::Api` with the backend's
//! message.

use docket_core::protocol::{
    CommentsResponse, EventPatch, EventResponse, EventsResponse, LoginResponse, MutationResponse,
    NewComment, NewEvent, SyncResponse, TeamResponse,
};
use docket_core::{Comment, DocketError, DocketResult, Event, User};

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

fn business(error: Option<String>, fallback: &str) -> DocketError {
    DocketError::Api(error.unwrap_or_else(|| fallback.to_string()))
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient { http: reqwest::Client::new(), base_url }
    }

    /// POST /auth/login
    pub async fn login(&self, email: &str) -> DocketResult<User> {
        let resp: LoginResponse = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await?
            .json()
            .await?;

        match (resp.success, resp.user) {
            (true, Some(user)) => Ok(user),
            (true, None) => Err(DocketError::Api("Login returned no user".into())),
            (false, _) => Err(business(resp.error, "User not found. Check the email")),
        }
    }

    /// GET /auth/team
    pub async fn team(&self) -> DocketResult<Vec<User>> {
        let resp: TeamResponse = self
            .http
            .get(format!("{}/auth/team", self.base_url))
            .send()
            .await?
            .json()
            .await?;

        if resp.success {
            Ok(resp.team.unwrap_or_default())
        } else {
            Err(business(resp.error, "Could not load the team roster"))
        }
    }

    /// GET /events. Filters are passed through verbatim as query params.
    pub async fn events(&self, filters: &[(String, String)]) -> DocketResult<Vec<Event>> {
        let mut request = self.http.get(format!("{}/events", self.base_url));
        if !filters.is_empty() {
            request = request.query(filters);
        }
        let resp: EventsResponse = request.send().await?.json().await?;

        if resp.success {
            Ok(resp.events.unwrap_or_default())
        } else {
            Err(business(resp.error, "Could not load events"))
        }
    }

    /// GET /events/{id}
    pub async fn event(&self, id: i64) -> DocketResult<Event> {
        let resp: EventResponse = self
            .http
            .get(format!("{}/events/{}", self.base_url, id))
            .send()
            .await?
            .json()
            .await?;

        match (resp.success, resp.event) {
            (true, Some(event)) => Ok(event),
            (true, None) => Err(DocketError::Api(format!("Event {id} not found"))),
            (false, _) => Err(business(resp.error, "Could not load the event")),
        }
    }

    /// POST /events
    ///
    /// Returns the created event when the workflow echoes it back.
    pub async fn create_event(&self, new: &NewEvent) -> DocketResult<Option<Event>> {
        let resp: MutationResponse = self
            .http
            .post(format!("{}/events", self.base_url))
            .json(new)
            .send()
            .await?
            .json()
            .await?;

        if resp.success {
            Ok(resp.event)
        } else {
            Err(business(resp.error, "Could not create the event"))
        }
    }

    /// PUT /events/{id}
    ///
    /// Returns the updated event when the workflow echoes it back; the
    /// caller falls back to patching the requested fields otherwise.
    pub async fn update_event(&self, id: i64, patch: &EventPatch) -> DocketResult<Option<Event>> {
        tracing::debug!(id, "updating event");
        let resp: MutationResponse = self
            .http
            .put(format!("{}/events/{}", self.base_url, id))
            .json(patch)
            .send()
            .await?
            .json()
            .await?;

        if resp.success {
            Ok(resp.event)
        } else {
            Err(business(resp.error, "Could not update the event"))
        }
    }

    /// DELETE /events/{id}
    pub async fn delete_event(&self, id: i64) -> DocketResult<()> {
        tracing::debug!(id, "deleting event");
        let resp: MutationResponse = self
            .http
            .delete(format!("{}/events/{}", self.base_url, id))
            .send()
            .await?
            .json()
            .await?;

        if resp.success {
            Ok(())
        } else {
            Err(business(resp.error, "Could not delete the event"))
        }
    }

    /// GET /events/{id}/comments
    pub async fn comments(&self, event_id: i64) -> DocketResult<Vec<Comment>> {
        let resp: CommentsResponse = self
            .http
            .get(format!("{}/events/{}/comments", self.base_url, event_id))
            .send()
            .await?
            .json()
            .await?;

        if resp.success {
            Ok(resp.comments.unwrap_or_default())
        } else {
            Err(business(resp.error, "Could not load comments"))
        }
    }

    /// POST /events/{id}/comments
    pub async fn add_comment(&self, event_id: i64, user_id: i64, content: &str) -> DocketResult<()> {
        let body = NewComment { user_id, content: content.to_string() };
        let resp: MutationResponse = self
            .http
            .post(format!("{}/events/{}/comments", self.base_url, event_id))
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        if resp.success {
            Ok(())
        } else {
            Err(business(resp.error, "Could not add the comment"))
        }
    }

    /// GET /notifications/today
    pub async fn today_feed(&self) -> DocketResult<Vec<Event>> {
        self.feed("today").await
    }

    /// GET /notifications/week
    pub async fn week_feed(&self) -> DocketResult<Vec<Event>> {
        self.feed("week").await
    }

    async fn feed(&self, which: &str) -> DocketResult<Vec<Event>> {
        let resp: EventsResponse = self
            .http
            .get(format!("{}/notifications/{}", self.base_url, which))
            .send()
            .await?
            .json()
            .await?;

        if resp.success {
            Ok(resp.events.unwrap_or_default())
        } else {
            Err(business(resp.error, "Could not load the feed"))
        }
    }

    /// POST /calendar/sync. Triggers the external calendar import.
    ///
    /// Returns the number of imported events.
    pub async fn sync_calendar(&self) -> DocketResult<u64> {
        let resp: SyncResponse = self
            .http
            .post(format!("{}/calendar/sync", self.base_url))
            .send()
            .await?
            .json()
            .await?;

        if resp.success {
            Ok(resp.synced.unwrap_or(0))
        } else {
            Err(business(resp.error, "Calendar sync failed. Check the provider credentials"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_core::EventStatus;

    fn event_json(id: i64, status: &str) -> String {
        format!(
            r#"{{"id": {id}, "title": "Audiência", "type": "audiencia",
                "event_date": "2026-08-05", "event_time": "14:30:00", "status": "{status}"}}"#
        )
    }

    // --- login ---

    #[tokio::test]
    async fn login_returns_the_user() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/auth/login")
            .match_body(mockito::Matcher::Json(serde_json::json!({"email": "ana@borelli.adv.br"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"success": true, "user": {"id": 2, "name": "Ana", "email": "ana@borelli.adv.br", "role": "gestor"}}"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let user = client.login("ana@borelli.adv.br").await.unwrap();
        assert_eq!(user.id, 2);
        assert!(user.role.can_edit());
    }

    #[tokio::test]
    async fn login_failure_is_a_business_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/auth/login")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": false, "error": "Usuário não encontrado"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.login("nobody@x").await.unwrap_err();
        match err {
            DocketError::Api(msg) => assert_eq!(msg, "Usuário não encontrado"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_server_is_a_connection_error() {
        // Nothing listens on this port.
        let client = ApiClient::new("http://127.0.0.1:1");
        let err = client.login("ana@borelli.adv.br").await.unwrap_err();
        assert!(matches!(err, DocketError::Connection(_)));
    }

    // --- events ---

    #[tokio::test]
    async fn events_unwraps_the_nested_collection() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/events")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"success": true, "events": [{}]}}"#, event_json(1, "pendente")))
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let events = client.events(&[]).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].short_time(), "14:30");
    }

    #[tokio::test]
    async fn events_passes_filters_through_as_query_params() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/events")
            .match_query(mockito::Matcher::UrlEncoded("assignee".into(), "3".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "events": []}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let filters = vec![("assignee".to_string(), "3".to_string())];
        let events = client.events(&filters).await.unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn successful_envelope_without_payload_is_empty() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/events")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        assert!(client.events(&[]).await.unwrap().is_empty());
    }

    // --- mutations ---

    #[tokio::test]
    async fn update_event_returns_the_echoed_event() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("PUT", "/events/42")
            .match_body(mockito::Matcher::Json(serde_json::json!({"status": "concluido"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"success": true, "event": {}}}"#, event_json(42, "concluido")))
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let patch = EventPatch::status(EventStatus::Done);
        let fresh = client.update_event(42, &patch).await.unwrap();
        assert_eq!(fresh.unwrap().status, EventStatus::Done);
    }

    #[tokio::test]
    async fn update_event_without_echo_returns_none() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("PUT", "/events/42")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let patch = EventPatch::status(EventStatus::Done);
        assert!(client.update_event(42, &patch).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_event_round_trips_the_submitted_fields() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/events")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "title": "Audiência",
                "type": "audiencia",
                "event_date": "2026-08-05",
                "created_by": 3,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"success": true, "event": {}}}"#, event_json(99, "pendente")))
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let new = NewEvent {
            title: "Audiência".into(),
            event_type: docket_core::EventType::Hearing,
            event_date: "2026-08-05".into(),
            event_time: "14:30".into(),
            status: EventStatus::Pending,
            location: None,
            client_name: None,
            category: "cliente".into(),
            created_by: 3,
        };
        let created = client.create_event(&new).await.unwrap().unwrap();
        // Server-assigned id; submitted fields come back as sent.
        assert_eq!(created.id, 99);
        assert_eq!(created.event_date, new.event_date);
    }

    #[tokio::test]
    async fn add_comment_posts_user_and_content() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/events/7/comments")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"user_id": 2, "content": "Levar procuração"}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        client.add_comment(7, 2, "Levar procuração").await.unwrap();
    }

    #[tokio::test]
    async fn comments_unwraps_the_nested_collection() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/events/7/comments")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"success": true, "comments": [{"user_name": "Ana", "content": "ok"}]}"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let comments = client.comments(7).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].author(), "Ana");
    }

    #[tokio::test]
    async fn delete_failure_surfaces_the_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("DELETE", "/events/9")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": false, "error": "evento em uso"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.delete_event(9).await.unwrap_err();
        assert!(matches!(err, DocketError::Api(msg) if msg == "evento em uso"));
    }

    // --- sync ---

    #[tokio::test]
    async fn sync_reports_the_imported_count() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/calendar/sync")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "synced": 12}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        assert_eq!(client.sync_calendar().await.unwrap(), 12);
    }

    #[tokio::test]
    async fn sync_count_defaults_to_zero() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/calendar/sync")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        assert_eq!(client.sync_calendar().await.unwrap(), 0);
    }
}
