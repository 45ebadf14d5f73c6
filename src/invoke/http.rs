//! Invoke the handler over HTTP.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::InvokerConfig;
use crate::event::ProxyEvent;
use crate::invoke::{InvokeError, Invoker, ProxyResponse};

/// Posts events to a Lambda-compatible invocation URL.
#[derive(Debug, Clone)]
pub struct HttpInvoker {
    client: reqwest::Client,
    url: String,
}

impl HttpInvoker {
    pub fn new(config: &InvokerConfig) -> Result<Self, InvokeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Invoker for HttpInvoker {
    async fn invoke(&self, event: &ProxyEvent) -> Result<ProxyResponse, InvokeError> {
        let res = self.client.post(&self.url).json(event).send().await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(InvokeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
