use chapter_types::Resource;
use futures::future::BoxFuture;
use std::time::Duration;

use super::{Fetched, Transport, TransportError};

/// Fetches `<base_url>/<name>.json` from a static file server
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.file_name())
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, resource: Resource) -> BoxFuture<'_, Result<Fetched, TransportError>> {
        Box::pin(async move {
            let url = self.url_for(resource);
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| TransportError(format!("{}: {}", url, e)))?;

            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|e| TransportError(format!("{}: {}", url, e)))?;

            Ok(Fetched {
                status,
                body: body.to_vec(),
            })
        })
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
