//! HTTP/JSON implementation of [`StoryStore`].
//!
//! | Operation | Method | Path            |
//! |-----------|--------|-----------------|
//! | list      | GET    | `{base}`        |
//! | create    | POST   | `{base}`        |
//! | update    | PUT    | `{base}{id}`    |
//! | delete    | DELETE | `{base}{id}`    |

use crate::config::StoreConfig;
use crate::model::story::{Story, StoryDraft, StoryId};
use crate::store::{StoreError, StoreResult, StoryStore};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Story store backed by a JSON REST collection.
#[derive(Debug, Clone)]
pub struct HttpStoryStore {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpStoryStore {
    /// Builds a client for the configured collection URL.
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| StoreError::InvalidRequest(format!("http client setup: {err}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `{base}{id}` with the id percent-encoded as one path segment.
    fn story_url(&self, id: &StoryId) -> StoreResult<Url> {
        if !id.is_addressable() {
            return Err(StoreError::InvalidRequest(format!(
                "story id `{id}` does not address a single story"
            )));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                StoreError::InvalidRequest(format!("base url `{}` has no path", self.base_url))
            })?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }
}

#[async_trait]
impl StoryStore for HttpStoryStore {
    async fn list_stories(&self) -> StoreResult<Vec<Story>> {
        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(network_error)?;
        decode_json(ensure_success(response, None).await?).await
    }

    async fn create_story(&self, draft: &StoryDraft) -> StoreResult<Story> {
        let response = self
            .client
            .post(self.base_url.clone())
            .json(draft)
            .send()
            .await
            .map_err(network_error)?;
        decode_json(ensure_success(response, None).await?).await
    }

    async fn update_story(&self, id: &StoryId, draft: &StoryDraft) -> StoreResult<Story> {
        let response = self
            .client
            .put(self.story_url(id)?)
            .json(draft)
            .send()
            .await
            .map_err(network_error)?;
        decode_json(ensure_success(response, Some(id)).await?).await
    }

    async fn delete_story(&self, id: &StoryId) -> StoreResult<()> {
        let response = self
            .client
            .delete(self.story_url(id)?)
            .send()
            .await
            .map_err(network_error)?;
        ensure_success(response, Some(id)).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response, id: Option<&StoryId>) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
        return Err(StoreError::NotFound(id.clone()));
    }

    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Status {
        status: status.as_u16(),
        message: truncate_body(&body),
    })
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> StoreResult<T> {
    let bytes = response.bytes().await.map_err(network_error)?;
    serde_json::from_slice(&bytes).map_err(|err| StoreError::Decode(err.to_string()))
}

fn network_error(err: reqwest::Error) -> StoreError {
    if err.is_decode() {
        return StoreError::Decode(err.to_string());
    }
    StoreError::Network(err.to_string())
}

fn truncate_body(body: &str) -> String {
    let flattened = body.trim().replace(['\n', '\r'], " ");
    let mut truncated = flattened.chars().take(MAX_ERROR_BODY_CHARS).collect::<String>();
    if flattened.chars().count() > MAX_ERROR_BODY_CHARS {
        truncated.push_str("...");
    }
    truncated
}
