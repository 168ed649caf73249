use async_trait::async_trait;

use super::{HttpPort, HttpResponse};
use crate::errors::ClientError;

pub struct ReqwestHttp {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestHttp {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    async fn read(resp: reqwest::Response) -> Result<HttpResponse, ClientError> {
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpPort for ReqwestHttp {
    async fn get(&self, path: &str) -> Result<HttpResponse, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let resp = self.client.get(&url).send().await?;
        Self::read(resp).await
    }

    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<HttpResponse, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");

        let resp = self.client.post(&url).json(body).send().await?;
        Self::read(resp).await
    }
}
