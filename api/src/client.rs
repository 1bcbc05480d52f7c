//! HTTP access to the FlockShop API.

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;
use reqwest::Response;
use reqwest::Url;

use crate::config::ApiConfig;
use crate::dto::Envelope;
use crate::dto::Existence;
use crate::dto::SignupData;
use crate::dto::SignupRequest;
use crate::dto::Wishlist;
use crate::error::ApiError;

/// The calls the screens make against the backend.
///
/// Implemented over HTTP by [`HttpApi`]; tests substitute a recording fake.
pub trait FlockApi {
    /// `GET /auth/check-username/{username}`
    async fn username_exists(&self, username: &str) -> Result<bool, ApiError>;

    /// `GET /auth/check-email/{email}`
    async fn email_exists(&self, email: &str) -> Result<bool, ApiError>;

    /// `POST /auth/signup`. Returns the issued token, if the server sent one.
    async fn signup(&self, request: &SignupRequest) -> Result<Option<String>, ApiError>;

    /// `DELETE /wishlist/products/{listId}/{productId}`
    async fn remove_product(
        &self,
        list_id: &str,
        product_id: &str,
        bearer: Option<&str>,
    ) -> Result<(), ApiError>;

    /// `GET /wishlist/{listId}`
    async fn wishlist(&self, list_id: &str) -> Result<Wishlist, ApiError>;
}

/// [`FlockApi`] over reqwest.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url().clone(),
        }
    }

    /// Appends percent-encoded path segments to the base url.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_existence(&self, segments: &[&str]) -> Result<bool, ApiError> {
        let url = self.endpoint(segments)?;
        debug!("GET {}", url);
        let resp = self.client.get(url.clone()).send().await?;
        let body: Envelope<Existence> = check_status(&url, resp)?.json().await?;
        Ok(body.data.exists)
    }
}

impl FlockApi for HttpApi {
    async fn username_exists(&self, username: &str) -> Result<bool, ApiError> {
        self.get_existence(&["auth", "check-username", username]).await
    }

    async fn email_exists(&self, email: &str) -> Result<bool, ApiError> {
        self.get_existence(&["auth", "check-email", email]).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<Option<String>, ApiError> {
        let url = self.endpoint(&["auth", "signup"])?;
        debug!("POST {} for {}", url, request.username);
        let resp = self.client.post(url.clone()).json(request).send().await?;
        let body: Envelope<SignupData> = check_status(&url, resp)?.json().await?;
        Ok(body.data.token.filter(|t| !t.is_empty()))
    }

    async fn remove_product(
        &self,
        list_id: &str,
        product_id: &str,
        bearer: Option<&str>,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&["wishlist", "products", list_id, product_id])?;
        debug!("DELETE {}", url);
        let mut req = self.client.delete(url.clone());
        if let Some(token) = bearer {
            req = req.bearer_auth(token);
        }
        check_status(&url, req.send().await?)?;
        Ok(())
    }

    async fn wishlist(&self, list_id: &str) -> Result<Wishlist, ApiError> {
        let url = self.endpoint(&["wishlist", list_id])?;
        debug!("GET {}", url);
        let resp = self.client.get(url.clone()).send().await?;
        let body: Envelope<Wishlist> = check_status(&url, resp)?.json().await?;
        Ok(body.data)
    }
}

fn check_status(url: &Url, resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        warn!("{} returned {}", url, status);
        Err(ApiError::Status {
            endpoint: url.path().to_string(),
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::Price;
    use serde_json::json;
    use wiremock::matchers::body_json;
    use wiremock::matchers::header;
    use wiremock::matchers::method;
    use wiremock::matchers::path;
    use wiremock::Mock;
    use wiremock::MockServer;
    use wiremock::ResponseTemplate;

    fn served_api(server: &MockServer) -> HttpApi {
        api(&format!("{}/api", server.uri()))
    }

    fn envelope(data: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
    }

    fn api(base: &str) -> HttpApi {
        HttpApi::new(&ApiConfig::new(base).unwrap())
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let url = api("https://example.com/api")
            .endpoint(&["auth", "check-username", "alice1"])
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/auth/check-username/alice1");
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let url = api("https://example.com/api/").endpoint(&["auth", "signup"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/auth/signup");
    }

    #[test]
    fn endpoint_encodes_segments() {
        let url = api("https://example.com")
            .endpoint(&["wishlist", "products", "list 1", "a/b"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/wishlist/products/list%201/a%2Fb"
        );
    }

    #[tokio::test]
    async fn existence_checks_read_the_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/check-username/alice01"))
            .respond_with(envelope(json!({ "exists": true })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/auth/check-email/ada@example.com"))
            .respond_with(envelope(json!({ "exists": false })))
            .expect(1)
            .mount(&server)
            .await;

        let api = served_api(&server);
        assert!(api.username_exists("alice01").await.unwrap());
        assert!(!api.email_exists("ada@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/wishlist/l2"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = served_api(&server).wishlist("l2").await.unwrap_err();
        match err {
            ApiError::Status { endpoint, status } => {
                assert_eq!(endpoint, "/api/wishlist/l2");
                assert_eq!(status, 404);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/check-username/alice01"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = served_api(&server).username_exists("alice01").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn signup_posts_the_form_and_drops_empty_token() {
        let server = MockServer::start().await;
        let request = SignupRequest {
            fullname: "Ada Lovelace".to_string(),
            username: "validuser123".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter22".to_string(),
        };
        Mock::given(method("POST"))
            .and(path("/api/auth/signup"))
            .and(body_json(json!({
                "fullname": "Ada Lovelace",
                "username": "validuser123",
                "email": "ada@example.com",
                "password": "hunter22",
            })))
            .respond_with(envelope(json!({ "token": "" })))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(served_api(&server).signup(&request).await.unwrap(), None);
    }

    #[tokio::test]
    async fn signup_returns_issued_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/signup"))
            .respond_with(envelope(json!({ "token": "a.b.c" })))
            .mount(&server)
            .await;

        let request = SignupRequest {
            fullname: "Ada".to_string(),
            username: "validuser123".to_string(),
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
        };
        let token = served_api(&server).signup(&request).await.unwrap();
        assert_eq!(token.as_deref(), Some("a.b.c"));
    }

    #[tokio::test]
    async fn delete_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/wishlist/products/l1/p9"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        served_api(&server)
            .remove_product("l1", "p9", Some("tok"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_without_token_sends_no_authorization() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/wishlist/products/l1/p9"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        served_api(&server)
            .remove_product("l1", "p9", None)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn wishlist_decodes_products() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/wishlist/l1"))
            .respond_with(envelope(json!({
                "_id": "l1",
                "name": "Birthday",
                "products": [
                    { "name": "Kettle", "price": 30, "_id": "p1", "added_by": "alice01" },
                    { "name": "Scarf", "price": "$12" },
                ],
            })))
            .mount(&server)
            .await;

        let list = served_api(&server).wishlist("l1").await.unwrap();
        assert_eq!(list.id, "l1");
        assert_eq!(list.name.as_deref(), Some("Birthday"));
        assert_eq!(list.products.len(), 2);
        assert_eq!(list.products[0].product_id.as_deref(), Some("p1"));
        assert_eq!(list.products[0].price.to_string(), "30");
        assert_eq!(list.products[1].price, Price::Text("$12".to_string()));
        assert_eq!(list.products[1].product_id, None);
    }
}
