use async_trait::async_trait;

use crate::domain::entities::record::ReconciliationResult;
use crate::domain::entities::submission::SelectedFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Excel,
}

impl OutputFormat {
    pub fn as_query_value(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Excel => "excel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileRequest {
    /// `None` asks the service for its stored notes over the range only.
    pub file: Option<SelectedFile>,
    pub date_start: String,
    pub date_end: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    Transport(String),
    Status(u16),
    Malformed(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Transport(message) => write!(f, "transport error: {message}"),
            GatewayError::Status(code) => write!(f, "unexpected HTTP status {code}"),
            GatewayError::Malformed(message) => write!(f, "malformed response: {message}"),
        }
    }
}

impl std::error::Error for GatewayError {}

#[async_trait]
pub trait ReconciliationGateway: Send + Sync {
    async fn reconcile(
        &self,
        request: &ReconcileRequest,
    ) -> Result<ReconciliationResult, GatewayError>;

    /// Same inputs as `reconcile`, answered as an opaque spreadsheet.
    async fn export(&self, request: &ReconcileRequest) -> Result<Vec<u8>, GatewayError>;
}
