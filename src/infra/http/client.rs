use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use tracing::debug;

use crate::domain::entities::record::ReconciliationResult;
use crate::infra::config::ApiConfig;
use crate::usecase::ports::gateway::{
    GatewayError, OutputFormat, ReconcileRequest, ReconciliationGateway,
};

/// `POST /verificar_notas` over reqwest. No retries.
#[derive(Clone)]
pub struct HttpReconciliationGateway {
    http: reqwest::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct RangeQueryBody<'a> {
    data_inicio: &'a str,
    data_fim: &'a str,
    formato: &'a str,
}

impl HttpReconciliationGateway {
    pub fn new(config: &ApiConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("notas-recon/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint_url(),
        })
    }

    async fn send(
        &self,
        request: &ReconcileRequest,
        format: OutputFormat,
    ) -> Result<reqwest::Response, GatewayError> {
        let builder = match &request.file {
            Some(file) => {
                let part = Part::stream_with_length(file.bytes.clone(), file.size_bytes() as u64)
                    .file_name(file.name.clone());
                self.http
                    .post(&self.endpoint)
                    .query(&[
                        ("data_inicio", request.date_start.as_str()),
                        ("data_fim", request.date_end.as_str()),
                        ("formato", format.as_query_value()),
                    ])
                    .multipart(Form::new().part("file", part))
            }
            None => self.http.post(&self.endpoint).json(&RangeQueryBody {
                data_inicio: &request.date_start,
                data_fim: &request.date_end,
                formato: format.as_query_value(),
            }),
        };

        let response = builder
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        let status = response.status();
        debug!(%status, format = format.as_query_value(), "reconciliation endpoint answered");
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

#[async_trait]
impl ReconciliationGateway for HttpReconciliationGateway {
    async fn reconcile(
        &self,
        request: &ReconcileRequest,
    ) -> Result<ReconciliationResult, GatewayError> {
        let body = self
            .send(request, OutputFormat::Json)
            .await?
            .bytes()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;
        serde_json::from_slice(&body).map_err(|err| GatewayError::Malformed(err.to_string()))
    }

    async fn export(&self, request: &ReconcileRequest) -> Result<Vec<u8>, GatewayError> {
        let body = self
            .send(request, OutputFormat::Excel)
            .await?
            .bytes()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;
        Ok(body.to_vec())
    }
}
