use std::time::Duration;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// Highest value the bar may show before the response is known.
pub const MAX_IN_FLIGHT_PROGRESS: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    InFlight,
    Succeeded,
    Failed,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Succeeded | Phase::Failed)
    }

    pub fn is_busy(self) -> bool {
        matches!(self, Phase::Validating | Phase::InFlight)
    }
}

/// Which primary action started the current submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    /// Spreadsheet upload compared against the stored notes.
    Compare,
    /// Date range only, no spreadsheet.
    Query,
}

/// Cloning shares the underlying buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Bytes,
}

impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl SelectedFile {
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    pub fn size_mb_label(&self) -> String {
        format!("{:.2} MB", self.bytes.len() as f64 / 1024.0 / 1024.0)
    }
}

/// Suffix match, so a bare `.xlsx` counts as a spreadsheet.
pub fn has_accepted_extension(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS
        .iter()
        .any(|ext| lower.strip_suffix(*ext).is_some_and(|rest| rest.ends_with('.')))
}

/// Perceived-progress timing; none of this reflects transferred bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressSettings {
    pub step: u8,
    pub cap: u8,
    pub interval_ms: u64,
    pub reset_delay_ms: u64,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            step: 10,
            cap: 90,
            interval_ms: 200,
            reset_delay_ms: 2000,
        }
    }
}

impl ProgressSettings {
    pub fn sanitized(self) -> Self {
        Self {
            step: self.step.max(1),
            cap: self.cap.min(MAX_IN_FLIGHT_PROGRESS),
            interval_ms: self.interval_ms.max(1),
            reset_delay_ms: self.reset_delay_ms,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub file: Option<SelectedFile>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    pub phase: Phase,
    pub progress: u8,
    /// Set when a submission is accepted, kept until the next one.
    pub kind: Option<SubmissionKind>,
}
