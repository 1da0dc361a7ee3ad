//! Blocking HTTP client for the Asana REST API

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::core::models::{Task, User};
use crate::core::ports::{TaskFilter, TaskSource, TaskStream, UserDirectory};

use super::error::{ApiError, ErrorBody};
use super::pages::Paginated;
use super::types::{DataEnvelope, Page};

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://app.asana.com/api/1.0";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Asana API client implementing [`TaskSource`] and [`UserDirectory`]
#[derive(Debug, Clone)]
pub struct AsanaClient {
    http: Client,
    base_url: String,
    token: String,
    page_size: u32,
}

impl AsanaClient {
    /// Create a client
    pub fn new(
        base_url: &str,
        token: &str,
        timeout: Duration,
        page_size: u32,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            page_size,
        })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(
            &config.settings.base_url,
            &config.token,
            Duration::from_secs(config.settings.timeout_secs),
            config.settings.page_size,
        )
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError> {
        let url = Url::parse_with_params(&format!("{}{path}", self.base_url), query)
            .map_err(|e| ApiError::transport(format!("invalid URL for {path}: {e}")))?;
        log::debug!("GET {url}");

        let response = self.http.get(url).bearer_auth(&self.token).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.joined())
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            return Err(ApiError::from_status(status.as_u16(), format!("GET {path}: {message}")));
        }

        response
            .json::<T>()
            .map_err(|e| ApiError::decode(format!("GET {path}: {e}")))
    }

    fn list(&self, path: String, query: Vec<(&'static str, String)>) -> TaskStream<'_> {
        Box::new(Paginated::new(move |offset: Option<&str>| {
            let mut query = query.clone();
            query.push(("limit", self.page_size.to_string()));
            if let Some(offset) = offset {
                query.push(("offset", offset.to_string()));
            }
            self.get::<Page<Task>>(&path, &query)
        }))
    }
}

fn opt_fields(fields: &[&str]) -> (&'static str, String) {
    ("opt_fields", fields.join(","))
}

impl TaskSource for AsanaClient {
    fn tasks_for_project(
        &self,
        project_id: &str,
        filter: &TaskFilter,
        fields: &[&str],
    ) -> TaskStream<'_> {
        let mut query = vec![opt_fields(fields)];
        if let Some(completed) = filter.completed {
            query.push(("completed", completed.to_string()));
        }
        if let Some(since) = &filter.completed_since {
            query.push(("completed_since", since.clone()));
        }
        self.list(format!("/projects/{project_id}/tasks"), query)
    }

    fn tasks_for_tag(&self, tag_id: &str, fields: &[&str]) -> TaskStream<'_> {
        self.list(format!("/tags/{tag_id}/tasks"), vec![opt_fields(fields)])
    }

    fn task(&self, task_id: &str, fields: &[&str]) -> Result<Task, ApiError> {
        self.get::<DataEnvelope<Task>>(&format!("/tasks/{task_id}"), &[opt_fields(fields)])
            .map(|envelope| envelope.data)
    }
}

impl UserDirectory for AsanaClient {
    fn user(&self, user_id: &str) -> Result<User, ApiError> {
        self.get::<DataEnvelope<User>>(&format!("/users/{user_id}"), &[opt_fields(&["name"])])
            .map(|envelope| envelope.data)
    }
}
