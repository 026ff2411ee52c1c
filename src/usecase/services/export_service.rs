use anyhow::Result;
use tracing::{info, warn};

use crate::domain::aggregate::CompanyGroup;
use crate::domain::entities::notification::Notification;
use crate::infra::export::csv::write_company_csv;
use crate::usecase::ports::export::{ExportTarget, SaveOutcome};

pub fn comparison_file_name(date_start: &str, date_end: &str) -> String {
    format!("comparacao_notas_{date_start}_{date_end}.xlsx")
}

pub fn company_file_name(company: &str) -> String {
    let safe: String = company
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .collect();
    let safe = safe.trim();
    if safe.is_empty() {
        "notas_empresa.csv".to_string()
    } else {
        format!("notas_empresa_{safe}.csv")
    }
}

/// Client-side CSV of one company's missing notes.
pub struct CompanyExportService<'a, T: ExportTarget + ?Sized> {
    target: &'a T,
}

impl<'a, T: ExportTarget + ?Sized> CompanyExportService<'a, T> {
    pub fn new(target: &'a T) -> Self {
        Self { target }
    }

    pub fn export(&self, group: &CompanyGroup) -> Result<SaveOutcome> {
        let bytes = write_company_csv(&group.records)?;
        self.target.save(&company_file_name(&group.key), &bytes)
    }

    /// Same as [`export`](Self::export) but reported as a notification; `None` on cancel.
    pub fn export_and_notify(&self, group: &CompanyGroup) -> Option<Notification> {
        match self.export(group) {
            Ok(SaveOutcome::Saved(path)) => {
                info!(company = %group.key, path = %path.display(), "company export saved");
                Some(Notification::success(
                    "Exportação concluída",
                    format!(
                        "{} notas da empresa {} exportadas.",
                        group.record_count, group.key
                    ),
                ))
            }
            Ok(SaveOutcome::Cancelled) => None,
            Err(err) => {
                warn!(company = %group.key, "company export failed: {err:#}");
                Some(Notification::error(
                    "Erro na exportação",
                    "Erro ao exportar dados da empresa",
                ))
            }
        }
    }
}
