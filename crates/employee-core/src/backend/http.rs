//! HTTP client for the employee REST API

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Response};

use super::EmployeeBackend;
use crate::config::DashboardConfig;
use crate::error::{RequestError, RequestResult};
use crate::models::{Employee, EmployeeDraft, EmployeeId};

/// Characters escaped when an id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// reqwest-backed implementation of [`EmployeeBackend`]
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for the configured origin
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_client(Client::new(), &config.api_base)
    }

    /// Use an existing reqwest client
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/employees", self.base_url)
    }

    fn item_url(&self, id: &EmployeeId) -> String {
        let segment = id.to_string();
        format!("{}/employees/{}", self.base_url, utf8_percent_encode(&segment, PATH_SEGMENT))
    }

    /// Turn any non-2xx answer into an error
    async fn check(response: Response) -> RequestResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(RequestError::Status { status, body })
    }
}

#[async_trait(?Send)]
impl EmployeeBackend for HttpBackend {
    async fn list(&self) -> RequestResult<Vec<Employee>> {
        let url = self.collection_url();
        log::debug!("GET {}", url);
        let response = Self::check(self.client.get(&url).send().await?).await?;
        response
            .json::<Vec<Employee>>()
            .await
            .map_err(|e| RequestError::Decode(e.to_string()))
    }

    async fn create(&self, draft: &EmployeeDraft) -> RequestResult<()> {
        let url = self.collection_url();
        log::debug!("POST {}", url);
        Self::check(self.client.post(&url).json(draft).send().await?).await?;
        Ok(())
    }

    async fn update(&self, id: &EmployeeId, draft: &EmployeeDraft) -> RequestResult<()> {
        let url = self.item_url(id);
        log::debug!("PUT {}", url);
        Self::check(self.client.put(&url).json(draft).send().await?).await?;
        Ok(())
    }

    async fn delete(&self, id: &EmployeeId) -> RequestResult<()> {
        let url = self.item_url(id);
        log::debug!("DELETE {}", url);
        Self::check(self.client.delete(&url).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend_for(server: &MockServer) -> HttpBackend {
        HttpBackend::new(&DashboardConfig::new(server.uri()))
    }

    #[test]
    fn test_item_url_escapes_id() {
        let backend = HttpBackend::with_client(Client::new(), "http://host/");
        assert_eq!(backend.base_url(), "http://host");
        assert_eq!(backend.item_url(&EmployeeId::Number(12)), "http://host/employees/12");
        assert_eq!(backend.item_url(&EmployeeId::from("a/b c")), "http://host/employees/a%2Fb%20c");
    }

    #[tokio::test]
    async fn test_list_decodes_employees() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/employees"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "name": "Ann", "email": "a@b.com", "role": "Eng"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let employees = backend_for(&server).list().await.expect("list failed");
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, EmployeeId::Number(1));
        assert_eq!(employees[0].name, "Ann");
    }

    #[tokio::test]
    async fn test_list_keeps_rows_with_null_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/employees"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "name": "Ann", "email": "a@b.com", "role": "Eng"},
                {"id": 2, "name": "Bo", "email": "bo@c.org", "role": null}
            ])))
            .mount(&server)
            .await;

        let employees = backend_for(&server).list().await.expect("list failed");
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].name, "Ann");
        assert_eq!(employees[1].name, "Bo");
        assert_eq!(employees[1].role, "");
    }

    #[tokio::test]
    async fn test_list_rejects_non_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/employees"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let err = backend_for(&server).list().await.unwrap_err();
        match err {
            RequestError::Status { status, body } => {
                assert_eq!(status.as_u16(), 503);
                assert_eq!(body, "down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_reports_bad_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/employees"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = backend_for(&server).list().await.unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
    }

    #[tokio::test]
    async fn test_create_posts_draft() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/employees"))
            .and(body_json(serde_json::json!({"name": "Al", "email": "al@x.io", "role": "Ops"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
                {"id": 5, "name": "Al", "email": "al@x.io", "role": "Ops"}
            )))
            .expect(1)
            .mount(&server)
            .await;

        let draft = EmployeeDraft::new("Al", "al@x.io", "Ops");
        backend_for(&server).create(&draft).await.expect("create failed");
    }

    #[tokio::test]
    async fn test_update_puts_to_item_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/employees/5"))
            .and(body_json(serde_json::json!({"name": "Al", "email": "al@x.io", "role": "Lead"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let draft = EmployeeDraft::new("Al", "al@x.io", "Lead");
        backend_for(&server)
            .update(&EmployeeId::Number(5), &draft)
            .await
            .expect("update failed");
    }

    #[tokio::test]
    async fn test_delete_missing_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/employees/9"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Employee not found with id: 9"))
            .expect(1)
            .mount(&server)
            .await;

        let err = backend_for(&server).delete(&EmployeeId::Number(9)).await.unwrap_err();
        assert!(matches!(err, RequestError::Status { status, .. } if status.as_u16() == 404));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Nothing listens on port 1
        let backend = HttpBackend::with_client(Client::new(), "http://127.0.0.1:1");

        let err = backend.delete(&EmployeeId::Number(1)).await.unwrap_err();
        assert!(matches!(err, RequestError::Transport(_)));
    }
}
