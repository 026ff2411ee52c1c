use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Cancelled,
}

/// Where exported bytes end up; the desktop build asks the user with a save-as dialog.
pub trait ExportTarget {
    fn save(&self, suggested_name: &str, bytes: &[u8]) -> anyhow::Result<SaveOutcome>;
}
