use serde::{Deserialize, Serialize};

/// One fiscal note reported as missing by the reconciliation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Numero_NF", alias = "number")]
    pub number: String,
    #[serde(rename = "Data_Emissao", alias = "issueDate")]
    pub issue_date: String,
    #[serde(rename = "MODELO", alias = "model")]
    pub model: String,
    #[serde(rename = "ORGANIZATION_ID", alias = "orgId")]
    pub org_id: i64,
    #[serde(rename = "Quantidade", alias = "quantity")]
    pub quantity: u64,
    #[serde(rename = "Empresa", alias = "company")]
    pub company: String,
}

/// Payload of a successful `formato=json` reconciliation call.
///
/// The totals describe the two compared sources; `missing` is the diff, so its
/// length is unrelated to either total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    #[serde(rename = "total_no_banco", alias = "totalStored")]
    pub total_stored: u64,
    #[serde(rename = "total_no_arquivo", alias = "totalInFile")]
    pub total_in_file: u64,
    #[serde(rename = "faltantes", alias = "missing")]
    pub missing: Vec<Record>,
}

impl ReconciliationResult {
    pub fn quantity_total(&self) -> u64 {
        self.missing.iter().map(|record| record.quantity).sum()
    }
}
