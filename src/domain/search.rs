use crate::domain::entities::record::Record;

/// Case-insensitive substring match on number, company or model, in input order.
pub fn filter_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.number.to_lowercase().contains(&needle)
                || record.company.to_lowercase().contains(&needle)
                || record.model.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn empty_state_message(total_records: usize) -> &'static str {
    if total_records == 0 {
        "Nenhuma nota encontrada. Realize uma consulta ou comparação primeiro."
    } else {
        "Nenhuma nota corresponde aos critérios de busca."
    }
}
