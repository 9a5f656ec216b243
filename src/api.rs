//! API access layer
//!
//! `api_call` is the single request primitive: it joins the endpoint onto the
//! configured prefix, attaches `Authorization: Token <token>` when a session
//! token is stored, and normalizes the response. Every endpoint method below
//! is a direct pass-through to it.
//!
//! A 401 from any endpoint tears the session down and redirects to the login
//! view before the `ApiError` is returned.

use crate::config::ClientConfig;
use crate::error::{ErrorKind, Result};
use crate::interface::{HttpClient, Navigator, SessionStore};
use crate::model::dtos::{ApiRequest, LoginParams, Method, SignupParams};
use serde_json::Value;

const UNAUTHORIZED: u16 = 401;

pub struct ApiClient<C, S, N> {
    client: C,
    store: S,
    navigator: N,
    base_url: String,
    login_path: String,
    home_path: String,
}

impl<C, S, N> ApiClient<C, S, N>
where
    C: HttpClient,
    S: SessionStore,
    N: Navigator,
{
    pub fn new(client: C, store: S, navigator: N, config: &ClientConfig) -> Self {
        Self {
            client,
            store,
            navigator,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            login_path: config.login_path.clone(),
            home_path: config.home_path.clone(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn transport(&self) -> &C {
        &self.client
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    /// Issue `method` against `<base><endpoint>`.
    ///
    /// `Ok(None)` means a 2xx with an empty body. A non-empty body that is not
    /// JSON is returned as a `SerdeJsonError`.
    pub async fn api_call(
        &self,
        endpoint: &str,
        method: Method,
        data: Option<&Value>,
    ) -> Result<Option<Value>> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.store.token()?.filter(|token| !token.is_empty()) {
            headers.push(("Authorization".to_string(), format!("Token {token}")));
        }

        let body = match data {
            Some(value) if !value.is_null() => Some(serde_json::to_string(value)?),
            _ => None,
        };

        let request = ApiRequest {
            method,
            url: format!("{}{}", self.base_url, endpoint),
            headers,
            body,
        };
        log::debug!("api call: {} {}", request.method, request.url);

        let resp = self.client.execute(request).await?;

        if !resp.is_success() {
            if resp.status == UNAUTHORIZED {
                log::warn!("{endpoint} answered 401, dropping stored session");
                if let Err(e) = self.store.clear() {
                    log::error!("failed to clear session after 401: {e}");
                }
                self.navigator.redirect(&self.login_path);
            }
            return Err(ErrorKind::ApiError(resp.status).into());
        }

        if resp.body.is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&resp.body)?))
    }

    // Courses

    pub async fn get_courses(&self) -> Result<Option<Value>> {
        self.api_call("/courses/", Method::Get, None).await
    }

    /// `GET /courses/?category=<category>`
    pub async fn get_courses_by_category(&self, category: &str) -> Result<Option<Value>> {
        let endpoint = format!("/courses/?category={}", urlencoding::encode(category));
        self.api_call(&endpoint, Method::Get, None).await
    }

    pub async fn get_course(&self, id: u64) -> Result<Option<Value>> {
        self.api_call(&format!("/courses/{id}/"), Method::Get, None)
            .await
    }

    pub async fn create_course(&self, data: &Value) -> Result<Option<Value>> {
        self.api_call("/courses/", Method::Post, Some(data)).await
    }

    pub async fn update_course(&self, id: u64, data: &Value) -> Result<Option<Value>> {
        self.api_call(&format!("/courses/{id}/"), Method::Put, Some(data))
            .await
    }

    pub async fn delete_course(&self, id: u64) -> Result<Option<Value>> {
        self.api_call(&format!("/courses/{id}/"), Method::Delete, None)
            .await
    }

    // Enrollment

    pub async fn enroll_course(&self, course_id: u64) -> Result<Option<Value>> {
        self.api_call(&format!("/courses/{course_id}/enroll/"), Method::Post, None)
            .await
    }

    pub async fn unenroll_course(&self, course_id: u64) -> Result<Option<Value>> {
        self.api_call(&format!("/courses/{course_id}/unenroll/"), Method::Post, None)
            .await
    }

    pub async fn get_my_enrollments(&self) -> Result<Option<Value>> {
        self.api_call("/courses/my_enrollments/", Method::Get, None)
            .await
    }

    /// Courses authored by the current mentor
    pub async fn get_my_courses(&self) -> Result<Option<Value>> {
        self.api_call("/courses/my_courses/", Method::Get, None)
            .await
    }

    pub async fn get_categories(&self) -> Result<Option<Value>> {
        self.api_call("/courses/categories/", Method::Get, None)
            .await
    }

    // Users

    pub async fn login_user(&self, username: &str, password: &str) -> Result<Option<Value>> {
        let body = serde_json::to_value(LoginParams {
            username: username.to_string(),
            password: password.to_string(),
        })?;
        self.api_call("/users/login/", Method::Post, Some(&body))
            .await
    }

    pub async fn signup_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
        password2: &str,
    ) -> Result<Option<Value>> {
        let body = serde_json::to_value(SignupParams {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            password2: password2.to_string(),
        })?;
        self.api_call("/users/signup/", Method::Post, Some(&body))
            .await
    }

    pub async fn logout_user(&self) -> Result<Option<Value>> {
        self.api_call("/users/logout/", Method::Post, None).await
    }

    pub async fn get_current_user(&self) -> Result<Option<Value>> {
        self.api_call("/users/me/", Method::Get, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;
    use crate::testing::{test_api, MockClient, RecordingNavigator};
    use serde_json::json;

    #[tokio::test]
    async fn token_header_is_sent_when_stored() {
        let api = test_api(
            MockClient::replying(200, "[]"),
            MemorySessionStore::with_session("abc123", r#"{"username":"ada"}"#),
        );

        api.get_courses().await.unwrap();

        let sent = api.transport().last_request();
        assert_eq!(sent.header("Authorization"), Some("Token abc123"));
        assert_eq!(sent.header("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn token_header_is_omitted_without_session() {
        let api = test_api(MockClient::replying(200, "[]"), MemorySessionStore::new());

        api.get_courses().await.unwrap();

        let sent = api.transport().last_request();
        assert_eq!(sent.header("Authorization"), None);
        assert_eq!(sent.header("Content-Type"), Some("application/json"));
        assert_eq!(sent.url, "/api/courses/");
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.body, None);
    }

    #[tokio::test]
    async fn unauthorized_clears_session_and_redirects() {
        let api = test_api(
            MockClient::replying(401, r#"{"detail":"Invalid token."}"#),
            MemorySessionStore::with_session("stale", r#"{"username":"ada"}"#),
        );

        let err = api.get_my_enrollments().await.unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(api.store().token().unwrap(), None);
        assert_eq!(api.store().user().unwrap(), None);
        assert_eq!(api.navigator().visited(), vec!["/login.html".to_string()]);
    }

    #[tokio::test]
    async fn other_failures_keep_session() {
        let api = test_api(
            MockClient::replying(403, r#"{"error":"Only mentors have courses"}"#),
            MemorySessionStore::with_session("tok", r#"{"username":"ada"}"#),
        );

        let err = api.get_my_courses().await.unwrap_err();

        assert_eq!(err.status(), Some(403));
        assert!(matches!(err.kind(), ErrorKind::ApiError(403)));
        assert_eq!(api.store().token().unwrap().as_deref(), Some("tok"));
        assert!(api.navigator().visited().is_empty());
    }

    #[tokio::test]
    async fn empty_success_body_is_none() {
        let api = test_api(MockClient::replying(204, ""), MemorySessionStore::with_token("t"));

        let result = api.delete_course(4).await.unwrap();

        assert_eq!(result, None);
        let sent = api.transport().last_request();
        assert_eq!(sent.method, Method::Delete);
        assert_eq!(sent.url, "/api/courses/4/");
    }

    #[tokio::test]
    async fn invalid_json_body_is_an_error() {
        let api = test_api(MockClient::replying(200, "<html>"), MemorySessionStore::new());

        let err = api.get_categories().await.unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::SerdeJsonError(_)));
    }

    #[tokio::test]
    async fn create_course_posts_raw_body() {
        let api = test_api(
            MockClient::replying(201, r#"{"id":9,"title":"X"}"#),
            MemorySessionStore::with_token("t"),
        );

        let created = api.create_course(&json!({"title": "X"})).await.unwrap();

        assert_eq!(created, Some(json!({"id": 9, "title": "X"})));
        let sent = api.transport().last_request();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "/api/courses/");
        assert_eq!(sent.body.as_deref(), Some(r#"{"title":"X"}"#));
    }

    #[tokio::test]
    async fn endpoints_map_to_paths_and_methods() {
        let api = test_api(MockClient::replying(200, "{}"), MemorySessionStore::new());

        api.get_course(3).await.unwrap();
        api.update_course(3, &json!({"price": "10.00"})).await.unwrap();
        api.enroll_course(3).await.unwrap();
        api.unenroll_course(3).await.unwrap();
        api.get_my_enrollments().await.unwrap();
        api.get_my_courses().await.unwrap();
        api.get_categories().await.unwrap();
        api.logout_user().await.unwrap();
        api.get_current_user().await.unwrap();

        let calls: Vec<(Method, String)> = api
            .transport()
            .requests()
            .into_iter()
            .map(|r| (r.method, r.url))
            .collect();
        assert_eq!(
            calls,
            vec![
                (Method::Get, "/api/courses/3/".to_string()),
                (Method::Put, "/api/courses/3/".to_string()),
                (Method::Post, "/api/courses/3/enroll/".to_string()),
                (Method::Post, "/api/courses/3/unenroll/".to_string()),
                (Method::Get, "/api/courses/my_enrollments/".to_string()),
                (Method::Get, "/api/courses/my_courses/".to_string()),
                (Method::Get, "/api/courses/categories/".to_string()),
                (Method::Post, "/api/users/logout/".to_string()),
                (Method::Get, "/api/users/me/".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn login_and_signup_bodies() {
        let api = test_api(MockClient::replying(200, "{}"), MemorySessionStore::new());

        api.login_user("ada", "pw").await.unwrap();
        let sent = api.transport().last_request();
        assert_eq!(sent.url, "/api/users/login/");
        let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"username": "ada", "password": "pw"}));

        api.signup_user("bob", "bob@example.org", "pw1", "pw1")
            .await
            .unwrap();
        let sent = api.transport().last_request();
        assert_eq!(sent.url, "/api/users/signup/");
        let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"username": "bob", "email": "bob@example.org", "password": "pw1", "password2": "pw1"})
        );
    }

    #[tokio::test]
    async fn category_filter_is_encoded() {
        let api = test_api(MockClient::replying(200, "[]"), MemorySessionStore::new());

        api.get_courses_by_category("Data & AI").await.unwrap();

        assert_eq!(
            api.transport().last_request().url,
            "/api/courses/?category=Data%20%26%20AI"
        );
    }

    #[tokio::test]
    async fn transport_failure_propagates_untouched() {
        let api = test_api(
            MockClient::failing(),
            MemorySessionStore::with_session("t", "{}"),
        );

        let err = api.get_current_user().await.unwrap_err();

        assert_eq!(err.status(), None);
        assert_eq!(api.store().token().unwrap().as_deref(), Some("t"));
        assert!(api.navigator().visited().is_empty());
    }

    #[tokio::test]
    async fn null_body_is_not_sent() {
        let api = test_api(MockClient::replying(200, "{}"), MemorySessionStore::new());

        api.api_call("/courses/", Method::Post, Some(&Value::Null))
            .await
            .unwrap();

        assert_eq!(api.transport().last_request().body, None);
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let config = ClientConfig {
            base_url: "http://host/api/".to_string(),
            ..ClientConfig::default()
        };
        let api = ApiClient::new(
            MockClient::replying(200, ""),
            MemorySessionStore::new(),
            RecordingNavigator::default(),
            &config,
        );
        assert_eq!(api.base_url, "http://host/api");
    }
}
