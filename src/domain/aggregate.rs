use std::collections::HashMap;

use crate::domain::entities::record::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyGroup {
    pub key: String,
    pub record_count: usize,
    pub quantity_total: u64,
    pub records: Vec<Record>,
}

impl CompanyGroup {
    fn new(key: String) -> Self {
        Self {
            key,
            record_count: 0,
            quantity_total: 0,
            records: Vec::new(),
        }
    }

    pub fn preview(&self, limit: usize) -> &[Record] {
        &self.records[..self.records.len().min(limit)]
    }

    pub fn hidden_after_preview(&self, limit: usize) -> usize {
        self.records.len().saturating_sub(limit)
    }
}

/// Groups records by exact `company` value in a single pass, in first-appearance order.
pub fn aggregate(records: &[Record]) -> Vec<CompanyGroup> {
    let mut groups: Vec<CompanyGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let idx = *index.entry(record.company.clone()).or_insert_with(|| {
            groups.push(CompanyGroup::new(record.company.clone()));
            groups.len() - 1
        });
        let group = &mut groups[idx];
        group.record_count += 1;
        group.quantity_total += record.quantity;
        group.records.push(record.clone());
    }

    groups
}
