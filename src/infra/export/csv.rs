use anyhow::{Context, Result};

use crate::domain::entities::record::Record;

const COMPANY_EXPORT_HEADERS: [&str; 5] = ["numero", "serie", "data", "empresa", "quantidade"];

pub fn write_company_csv(records: &[Record]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(COMPANY_EXPORT_HEADERS)
        .context("failed to write csv header")?;

    for record in records {
        let quantity = record.quantity.to_string();
        writer
            .write_record([
                record.number.as_str(),
                record.model.as_str(),
                record.issue_date.as_str(),
                record.company.as_str(),
                quantity.as_str(),
            ])
            .with_context(|| format!("failed to write csv row for note {}", record.number))?;
    }

    writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("failed to flush csv buffer: {err}"))
}
