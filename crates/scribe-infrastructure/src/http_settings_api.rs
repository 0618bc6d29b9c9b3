//! HttpSettingsApi - tRPC-over-HTTP implementation of `SettingsApi`.
//!
//! Queries are `GET {base}/api/trpc/<procedure>`, mutations are
//! `POST {base}/api/trpc/<procedure>` with the patch as the JSON body.
//! Responses use the `{"result":{"data":...}}` / `{"error":{"message":...}}`
//! envelopes.

use crate::dto::SettingsResponseDto;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use scribe_core::config::ApiConfig;
use scribe_core::error::{Result, ScribeError};
use scribe_core::settings::{
    ProfileInfoPatch, SettingsApi, SettingsSnapshot, SocialLinksPatch, UserInfoPatch,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const GET_SETTINGS: &str = "profile.getSettings";
const UPDATE_USER: &str = "profile.updateUser";
const UPDATE_PROFILE: &str = "profile.updateProfile";
const UPDATE_SOCIAL: &str = "profile.updateSocial";

#[derive(Debug, Deserialize)]
struct SuccessEnvelope<T> {
    result: ResultBody<T>,
}

#[derive(Debug, Deserialize)]
struct ResultBody<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Settings client that talks to the platform's tRPC endpoints.
#[derive(Clone)]
pub struct HttpSettingsApi {
    client: Client,
    base_url: String,
    session_token: Option<String>,
    timeout: Option<Duration>,
}

impl HttpSettingsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            session_token: None,
            timeout: None,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        let mut api = Self::new(config.base_url.clone());
        api.session_token = config.session_token.clone();
        api.timeout = config.timeout_secs.map(Duration::from_secs);
        api
    }

    fn endpoint(&self, procedure: &str) -> String {
        format!(
            "{}/api/trpc/{}",
            self.base_url.trim_end_matches('/'),
            procedure
        )
    }

    fn prepare(&self, mut request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = &self.session_token {
            request = request.bearer_auth(token);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        request
    }

    async fn query<T: DeserializeOwned>(&self, procedure: &str) -> Result<T> {
        let url = self.endpoint(procedure);
        tracing::debug!("[HttpSettingsApi] GET {}", url);

        let response = self
            .prepare(self.client.get(&url))
            .send()
            .await
            .map_err(transport_error)?;
        read_envelope(response).await
    }

    async fn mutate<B: Serialize + Sync>(&self, procedure: &str, body: &B) -> Result<()> {
        let url = self.endpoint(procedure);
        tracing::debug!("[HttpSettingsApi] POST {}", url);

        let response = self
            .prepare(self.client.post(&url).json(body))
            .send()
            .await
            .map_err(transport_error)?;
        // Mutations answer with the updated row; only success matters here.
        read_envelope::<serde_json::Value>(response).await?;
        Ok(())
    }
}

#[async_trait]
impl SettingsApi for HttpSettingsApi {
    async fn get_settings(&self) -> Result<Option<SettingsSnapshot>> {
        let dto: Option<SettingsResponseDto> = self.query(GET_SETTINGS).await?;
        Ok(dto.map(SettingsSnapshot::from))
    }

    async fn update_user(&self, patch: &UserInfoPatch) -> Result<()> {
        self.mutate(UPDATE_USER, patch).await
    }

    async fn update_profile(&self, patch: &ProfileInfoPatch) -> Result<()> {
        self.mutate(UPDATE_PROFILE, patch).await
    }

    async fn update_social(&self, patch: &SocialLinksPatch) -> Result<()> {
        self.mutate(UPDATE_SOCIAL, patch).await
    }
}

fn transport_error(err: reqwest::Error) -> ScribeError {
    if err.is_timeout() {
        ScribeError::network(format!("Request timed out: {}", err))
    } else {
        ScribeError::network(err.to_string())
    }
}

async fn read_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(transport_error)?;
    parse_envelope(status, &body)
}

/// Decodes a tRPC response body.
///
/// Error envelopes win over the status code so the server's message reaches
/// the user; a non-2xx status without one falls back to the raw body.
fn parse_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return Err(ScribeError::api(status, envelope.error.message));
    }
    if !(200..300).contains(&status) {
        let message = if body.trim().is_empty() {
            format!("Request failed with status {}", status)
        } else {
            body.trim().to_string()
        };
        return Err(ScribeError::api(status, message));
    }
    let envelope: SuccessEnvelope<T> = serde_json::from_str(body)?;
    Ok(envelope.result.data)
}
