use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::models::{ListEnvelope, RemoteRecord, Resource, WriteResponse};
use crate::config::SeedConfig;

const JSON: &str = "application/json";

pub(crate) fn truncate_for_log(mut s: String, max_len: usize) -> String {
    if s.len() > max_len {
        let mut cut = max_len;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push('…');
    }
    s
}

/// The two operations the seed driver needs from the backend.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// Reads the whole collection (first page only). Non-2xx is an error.
    async fn list(&self, resource: Resource) -> Result<Vec<RemoteRecord>>;

    /// Issues one create. Any HTTP status comes back as `Ok` with the full
    /// body; only transport failures are errors.
    async fn create(&self, resource: Resource, body: &Value) -> Result<WriteResponse>;
}

/// Bearer-authenticated JSON client for the warehouse backend.
///
/// Endpoints used:
/// - GET  {base}/categories | products | warehouses -> `{ "data": [...] }`
/// - POST {base}/categories | products | warehouses -> 201 `{ "data": {...} }`
///   (`{ "product": {...} }` for products)
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: SeedConfig,
    http: Client,
}

impl ApiClient {
    pub fn new(config: SeedConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("stockseed/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Self { config, http })
    }

    /// Authenticated read: bearer token, `Accept: application/json`, no body.
    pub async fn get(&self, url: &str) -> reqwest::Result<Response> {
        self.http
            .get(url)
            .bearer_auth(self.config.token())
            .header(ACCEPT, JSON)
            .send()
            .await
    }

    /// Authenticated write with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> reqwest::Result<Response> {
        self.http
            .post(url)
            .bearer_auth(self.config.token())
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON)
            .json(body)
            .send()
            .await
    }
}

#[async_trait]
impl ResourceApi for ApiClient {
    async fn list(&self, resource: Resource) -> Result<Vec<RemoteRecord>> {
        let url = self.config.endpoint(resource.path());
        let resp = self
            .get(&url)
            .await
            .with_context(|| format!("GET {url} failed"))?;
        let status = resp.status();
        debug!(%url, status = status.as_u16(), "fetched collection");
        if !status.is_success() {
            let body = truncate_for_log(resp.text().await.unwrap_or_default(), 2000);
            return Err(anyhow!("GET {url} returned {status} body={body}"));
        }
        let envelope: ListEnvelope = resp
            .json()
            .await
            .with_context(|| format!("decoding {resource} list from {url}"))?;
        Ok(envelope.data)
    }

    async fn create(&self, resource: Resource, body: &Value) -> Result<WriteResponse> {
        let url = self.config.endpoint(resource.path());
        let resp = self
            .post(&url, body)
            .await
            .with_context(|| format!("POST {url} failed"))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        debug!(%url, status, body = %truncate_for_log(body.clone(), 500), "create call finished");
        Ok(WriteResponse { status, body })
    }
}
