use crate::models::*;
use anyhow::{anyhow, Context, Result};
use reqwest::{Client, Url};

/// Forwards questions to the upstream RAG service.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RagClient {
    client: Client,
    upstream_url: Url,
}

impl RagClient {
    pub fn new(upstream_url: Url) -> Self {
        Self::with_client(Client::new(), upstream_url)
    }

    pub fn with_client(client: Client, upstream_url: Url) -> Self {
        Self {
            client,
            upstream_url,
        }
    }

    pub fn upstream_url(&self) -> &Url {
        &self.upstream_url
    }

    /// Ask the upstream and always come back with something to show the user.
    ///
    /// Any failure is logged here and replaced by the busy message; the
    /// cause never reaches the caller.
    pub async fn ask(&self, question: &str) -> RagResponse {
        match self.try_ask(question).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("RAG upstream call to {} failed: {:#}", self.upstream_url, e);
                RagResponse::upstream_busy()
            }
        }
    }

    /// Single POST to the upstream, no retries.
    pub async fn try_ask(&self, question: &str) -> Result<RagResponse> {
        let request = UpstreamRequest { question };

        let response = self
            .client
            .post(self.upstream_url.clone())
            .json(&request)
            .send()
            .await
            .context("failed to reach RAG upstream")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!("RAG upstream error ({}): {}", status, error_text));
        }

        let rag_response: RagResponse = response
            .json()
            .await
            .context("failed to decode RAG upstream response")?;

        if rag_response.answer.trim().is_empty() {
            return Err(anyhow!("RAG upstream returned an empty answer"));
        }

        Ok(rag_response)
    }
}
