use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rfd::FileDialog;

use crate::domain::entities::submission::ACCEPTED_EXTENSIONS;
use crate::usecase::ports::export::{ExportTarget, SaveOutcome};

/// Native picker limited to the accepted spreadsheet extensions.
pub fn pick_spreadsheet() -> Option<PathBuf> {
    FileDialog::new()
        .add_filter("Excel", &ACCEPTED_EXTENSIONS)
        .pick_file()
}

pub fn read_picked_file(path: &Path) -> Result<(String, Vec<u8>)> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read file: {}", path.display()))?;
    Ok((name, bytes))
}

/// Save-as dialog; the dialog decides the final path.
pub struct DialogExportTarget;

impl ExportTarget for DialogExportTarget {
    fn save(&self, suggested_name: &str, bytes: &[u8]) -> Result<SaveOutcome> {
        let mut dialog = FileDialog::new().set_file_name(suggested_name);
        if let Some(ext) = Path::new(suggested_name)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            dialog = dialog.add_filter(ext.to_ascii_uppercase(), &[ext]);
        }

        let Some(path) = dialog.save_file() else {
            return Ok(SaveOutcome::Cancelled);
        };
        std::fs::write(&path, bytes)
            .with_context(|| format!("failed to write export: {}", path.display()))?;
        Ok(SaveOutcome::Saved(path))
    }
}
