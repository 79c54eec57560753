use anyhow::{Context, Result};
use futures::Stream;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::pin::Pin;

use quill_stream::{frame_stream, Draft, DraftSession, Frame};

use crate::request::GenerationRequest;

/// Client for the content generation endpoint (HTTP direct, no SDK).
///
/// Transport only: it submits the request, checks the status, and hands
/// the response byte stream to the decoder. No retries, no persistence.
pub struct GeneratorClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl GeneratorClient {
    /// Create a client for the given endpoint base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Submit a request and return the reassembled frame stream.
    pub async fn generate_stream(
        &self,
        request: &GenerationRequest,
    ) -> Result<Pin<Box<dyn Stream<Item = Result<Frame>> + Send>>> {
        tracing::debug!(topic = %request.topic, "submitting generation request");

        let response = self
            .http_client
            .post(format!("{}/generate-content", self.base_url))
            .json(request)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Generation API error ({}): {}", status, error_text);
        }

        Ok(Box::pin(frame_stream(response.bytes_stream())))
    }

    /// Submit a request and fold the stream to completion.
    ///
    /// The observer runs after each merged update; the final draft is
    /// returned once the stream closes.
    pub async fn generate<F>(&self, request: &GenerationRequest, on_update: F) -> Result<Draft>
    where
        F: FnMut(&Draft),
    {
        let frames = self.generate_stream(request).await?;

        let mut session = DraftSession::new();
        session.run_frames(frames, on_update).await?;

        Ok(session.into_draft())
    }
}
