//! Authenticated HTTP session against a resto server
//!
//! The server hands out a session token on `GET /resto/api/auth` and expects
//! it back as the `key` query parameter. The token also occupies one of the
//! server's limited license slots until `GET /resto/api/logout`, so sessions
//! should be short: see [`IikoClient::with_session`].

use crate::error::preview;
use crate::util::{SENSITIVE_PARAMS, sanitize_url};
use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

pub const LOGIN_PATH: &str = "/resto/api/auth";
pub const LOGOUT_PATH: &str = "/resto/api/logout";

/// Query parameters of a request; keys may repeat
pub type Query<'a> = [(&'a str, String)];

/// Session client shared by all endpoint groups
pub struct IikoClient {
    http: Client,
    base_url: String,
    login: String,
    password_hash: String,
    token: RwLock<Option<String>>,
}

impl IikoClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .cookie_store(true);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            login: config.login.clone(),
            password_hash: config.password_hash.clone(),
            token: RwLock::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current session token
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_key(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token() {
            Some(token) => request.query(&[("key", token)]),
            None => request,
        }
    }

    /// Send a request and return the body of a successful response
    async fn execute(&self, request: RequestBuilder) -> ClientResult<String> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = sanitize_url(request.url().as_str(), SENSITIVE_PARAMS);

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                let err = ClientError::from(err);
                tracing::error!(method = %method, url = %url, error = %err, "Resto API request failed");
                return Err(err);
            }
        };

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(method = %method, url = %url, status = status.as_u16(), "Resto API returned an error status");
            tracing::debug!(body = %preview(&body), "Error response body");
            return Err(ClientError::Http {
                status: status.as_u16(),
                url,
                body,
            });
        }

        tracing::debug!(method = %method, url = %url, status = status.as_u16(), body = %preview(&body), "Resto API exchange");
        Ok(body)
    }

    /// GET returning the raw body text
    pub async fn get_text(&self, path: &str, query: &Query<'_>) -> ClientResult<String> {
        let request = self.with_key(self.http.get(self.url(path)).query(query));
        self.execute(request).await
    }

    /// GET returning a JSON body
    pub async fn get_json(&self, path: &str, query: &Query<'_>) -> ClientResult<Value> {
        let body = self.get_text(path, query).await?;
        parse_json(&body)
    }

    /// POST a JSON body, returning a JSON body
    pub async fn post_json<B>(&self, path: &str, body: &B) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let request = self.with_key(self.http.post(self.url(path)).json(body));
        let body = self.execute(request).await?;
        parse_json(&body)
    }

    /// Open a session; the token is kept for subsequent requests
    pub async fn login(&self) -> ClientResult<String> {
        let query = [
            ("login", self.login.clone()),
            ("pass", self.password_hash.clone()),
        ];
        let request = self.http.get(self.url(LOGIN_PATH)).query(&query);

        let body = match self.execute(request).await {
            Ok(body) => body,
            Err(ClientError::Http { status, body, .. })
                if status == StatusCode::UNAUTHORIZED.as_u16()
                    || status == StatusCode::FORBIDDEN.as_u16() =>
            {
                tracing::error!(status, "Authentication failed");
                return Err(ClientError::Auth {
                    status: Some(status),
                    message: body.trim().to_string(),
                });
            }
            Err(err) => return Err(err),
        };

        let token = body.trim().to_string();
        if token.is_empty() {
            return Err(ClientError::Auth {
                status: None,
                message: "server returned an empty session token".into(),
            });
        }

        self.set_token(Some(token.clone()));
        tracing::info!(login = %self.login, "Authenticated against resto API");
        Ok(token)
    }

    /// Release the session; the token is dropped even when the call fails
    pub async fn logout(&self) -> ClientResult<()> {
        if !self.is_authenticated() {
            tracing::debug!("Logout skipped, no open session");
            return Ok(());
        }

        let request = self.with_key(self.http.get(self.url(LOGOUT_PATH)));
        let result = self.execute(request).await;
        self.set_token(None);

        match result {
            Ok(_) => {
                tracing::info!("Session token released");
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to release session token");
                Err(err)
            }
        }
    }

    /// Run `f` inside a session: log in, await `f`, always log out
    ///
    /// When `f` fails its error wins over a logout failure.
    pub async fn with_session<F, Fut, T>(&self, f: F) -> ClientResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        self.login().await?;
        let result = f().await;
        let logout = self.logout().await;

        match (result, logout) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(logout_err)) => Err(logout_err),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(logout_err)) => {
                tracing::warn!(error = %logout_err, "Logout failed after an earlier error");
                Err(err)
            }
        }
    }
}

impl fmt::Debug for IikoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IikoClient")
            .field("base_url", &self.base_url)
            .field("login", &self.login)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

fn parse_json(body: &str) -> ClientResult<Value> {
    serde_json::from_str(body)
        .map_err(|err| ClientError::invalid_response(format!("server returned invalid JSON: {err}"), body))
}
