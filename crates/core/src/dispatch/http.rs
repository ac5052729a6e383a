//! HTTP implementation of the conversion engine client.

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::formats::FormatTable;

use super::error::DispatchError;
use super::traits::ConversionEngine;
use super::types::{output_file_name, ConversionRequest, DownloadHandle};

/// Client for a remote conversion engine reached over plain HTTP.
///
/// Issues `POST {url}?from=<mime>&to=<token>&quality=<level>` with the
/// raw file bytes in a multipart `file` field. The engine address and
/// timeout come from [`EngineConfig`].
pub struct HttpEngine {
    client: Client,
    config: EngineConfig,
}

impl HttpEngine {
    /// Create a new engine client with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// The configured engine base URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }
}

#[async_trait]
impl ConversionEngine for HttpEngine {
    fn name(&self) -> &str {
        "http"
    }

    async fn dispatch(
        &self,
        request: ConversionRequest,
    ) -> Result<DownloadHandle, DispatchError> {
        let ConversionRequest {
            file,
            contents,
            canonical_type,
            output_format,
            quality,
        } = request;

        // Precondition re-check: never put an illegal pair on the wire.
        if !FormatTable::is_allowed(canonical_type, output_format) {
            return Err(DispatchError::IncompatibleFormat {
                input: canonical_type,
                output: output_format,
            });
        }

        debug!(
            file = %file.name,
            from = %canonical_type,
            to = %output_format,
            quality = quality.token(),
            "Dispatching conversion"
        );

        let part = multipart::Part::bytes(contents)
            .file_name(file.name.clone())
            .mime_str(canonical_type.mime())
            .map_err(|e| {
                DispatchError::conversion_failed(format!("Invalid upload content type: {}", e))
            })?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.config.url)
            .query(&[
                ("from", canonical_type.mime()),
                ("to", output_format.token()),
                ("quality", quality.token()),
            ])
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    DispatchError::EngineUnavailable {
                        url: self.config.url.clone(),
                    }
                } else if e.is_timeout() {
                    DispatchError::conversion_failed(format!(
                        "Request timed out after {} seconds",
                        self.config.timeout_secs
                    ))
                } else {
                    DispatchError::conversion_failed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Conversion engine returned an error");
            return Err(DispatchError::conversion_failed(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let bytes = response.bytes().await.map_err(|e| {
            DispatchError::conversion_failed(format!("Failed to read response body: {}", e))
        })?;

        if bytes.is_empty() {
            return Err(DispatchError::conversion_failed(
                "Engine returned an empty response body",
            ));
        }

        Ok(DownloadHandle {
            file_name: output_file_name(&file.name, output_format),
            content_type: output_format.content_type(),
            bytes: bytes.to_vec(),
        })
    }
}
