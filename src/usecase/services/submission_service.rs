use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::{interval_at, Instant};
use tracing::{error, info, warn};

use crate::domain::entities::notification::Notification;
use crate::domain::entities::record::ReconciliationResult;
use crate::domain::entities::submission::{
    has_accepted_extension, Phase, ProgressSettings, SelectedFile, SubmissionKind,
    SubmissionState,
};
use crate::usecase::ports::export::{ExportTarget, SaveOutcome};
use crate::usecase::ports::gateway::{GatewayError, ReconcileRequest, ReconciliationGateway};
use crate::usecase::ports::presenter::WorkflowPresenter;
use crate::usecase::services::export_service::comparison_file_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    MissingFile,
    MissingDateRange,
    UnsupportedFileType(String),
    AlreadyInFlight,
    NothingToExport,
    TransportFailure(String),
    MalformedResponse(String),
    SaveFailed(String),
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionError::MissingFile => write!(f, "Por favor, selecione um arquivo Excel."),
            SubmissionError::MissingDateRange => {
                write!(f, "Por favor, selecione as datas de início e fim.")
            }
            SubmissionError::UnsupportedFileType(name) => write!(
                f,
                "Por favor, selecione apenas arquivos Excel (.xlsx ou .xls): {name}"
            ),
            SubmissionError::AlreadyInFlight => write!(f, "Já existe uma verificação em andamento."),
            SubmissionError::NothingToExport => {
                write!(f, "Por favor, realize a comparação primeiro.")
            }
            SubmissionError::TransportFailure(_) => write!(
                f,
                "Erro ao processar arquivo. Verifique a conexão com a API."
            ),
            SubmissionError::MalformedResponse(_) => {
                write!(f, "A API retornou uma resposta inesperada.")
            }
            SubmissionError::SaveFailed(message) => write!(f, "Erro ao salvar arquivo: {message}"),
        }
    }
}

impl std::error::Error for SubmissionError {}

impl From<GatewayError> for SubmissionError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Transport(message) => SubmissionError::TransportFailure(message),
            GatewayError::Status(code) => SubmissionError::TransportFailure(format!("HTTP {code}")),
            GatewayError::Malformed(message) => SubmissionError::MalformedResponse(message),
        }
    }
}

impl From<&SubmissionError> for Notification {
    fn from(err: &SubmissionError) -> Self {
        Notification::error("Erro", err.to_string())
    }
}

/// Submission state machine. Pure and synchronous; timing lives in [`SubmissionService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionWorkflow {
    state: SubmissionState,
    settings: ProgressSettings,
    generation: u64,
    has_result: bool,
}

impl Default for SubmissionWorkflow {
    fn default() -> Self {
        Self::new(ProgressSettings::default())
    }
}

impl SubmissionWorkflow {
    pub fn new(settings: ProgressSettings) -> Self {
        Self {
            state: SubmissionState::default(),
            settings: settings.sanitized(),
            generation: 0,
            has_result: false,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn progress(&self) -> u8 {
        self.state.progress
    }

    pub fn settings(&self) -> ProgressSettings {
        self.settings
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Which action is running, only while the workflow is busy.
    pub fn active_kind(&self) -> Option<SubmissionKind> {
        self.state.kind.filter(|_| self.state.phase.is_busy())
    }

    /// Rejected files leave the previous selection in place.
    pub fn select_file(
        &mut self,
        name: String,
        bytes: impl Into<Bytes>,
    ) -> Result<(), SubmissionError> {
        if !has_accepted_extension(&name) {
            return Err(SubmissionError::UnsupportedFileType(name));
        }
        self.state.file = Some(SelectedFile {
            name,
            bytes: bytes.into(),
        });
        Ok(())
    }

    pub fn clear_file(&mut self) {
        self.state.file = None;
    }

    pub fn set_date_start(&mut self, value: &str) {
        self.state.date_start = non_empty(value);
    }

    pub fn set_date_end(&mut self, value: &str) {
        self.state.date_end = non_empty(value);
    }

    /// `Idle → Validating → InFlight`, or back to `Idle` with the first failed rule.
    pub fn begin(&mut self, kind: SubmissionKind) -> Result<ReconcileRequest, SubmissionError> {
        if self.state.phase.is_busy() {
            return Err(SubmissionError::AlreadyInFlight);
        }

        self.state.phase = Phase::Validating;
        self.state.progress = 0;
        let request = match self.validate(kind) {
            Ok(request) => request,
            Err(err) => {
                self.state.phase = Phase::Idle;
                return Err(err);
            }
        };

        self.generation += 1;
        self.state.kind = Some(kind);
        self.state.phase = Phase::InFlight;
        Ok(request)
    }

    fn validate(&self, kind: SubmissionKind) -> Result<ReconcileRequest, SubmissionError> {
        let file = match kind {
            SubmissionKind::Compare => {
                Some(self.state.file.clone().ok_or(SubmissionError::MissingFile)?)
            }
            SubmissionKind::Query => None,
        };
        let (Some(date_start), Some(date_end)) =
            (self.state.date_start.clone(), self.state.date_end.clone())
        else {
            return Err(SubmissionError::MissingDateRange);
        };

        Ok(ReconcileRequest {
            file,
            date_start,
            date_end,
        })
    }

    /// One synthetic progress step, never past the cap while in flight.
    pub fn tick(&mut self) -> u8 {
        if self.state.phase == Phase::InFlight && self.state.progress < self.settings.cap {
            self.state.progress = self
                .state
                .progress
                .saturating_add(self.settings.step)
                .min(self.settings.cap);
        }
        self.state.progress
    }

    pub fn complete(
        &mut self,
        outcome: Result<ReconciliationResult, GatewayError>,
    ) -> Result<ReconciliationResult, SubmissionError> {
        match outcome {
            Ok(result) => {
                self.state.phase = Phase::Succeeded;
                self.state.progress = 100;
                self.has_result = true;
                Ok(result)
            }
            Err(err) => {
                self.state.phase = Phase::Failed;
                Err(err.into())
            }
        }
    }

    /// Terminal → `Idle` unless a newer submission has started since `generation`.
    /// Inputs are kept for resubmission and export.
    pub fn reset_after_terminal(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.state.phase.is_terminal() {
            return false;
        }
        self.state.phase = Phase::Idle;
        self.state.progress = 0;
        true
    }

    /// Same checks as a comparison plus a prior successful result. Does not touch `phase`.
    pub fn begin_export(&self) -> Result<ReconcileRequest, SubmissionError> {
        let request = self.validate(SubmissionKind::Compare)?;
        if !self.has_result {
            return Err(SubmissionError::NothingToExport);
        }
        Ok(request)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Drives `call` to completion while firing `on_tick` every `period`.
///
/// The ticker is dropped the moment `call` resolves, so no tick is observed
/// after the response. When both are ready at once the response wins.
pub async fn with_progress<F, T>(call: F, period: Duration, mut on_tick: impl FnMut()) -> T
where
    F: Future<Output = T>,
{
    let mut ticker = interval_at(Instant::now() + period, period);
    tokio::pin!(call);
    loop {
        tokio::select! {
            biased;
            output = &mut call => return output,
            _ = ticker.tick() => on_tick(),
        }
    }
}

pub struct SubmissionService {
    gateway: Arc<dyn ReconciliationGateway>,
}

impl SubmissionService {
    pub fn new(gateway: Arc<dyn ReconciliationGateway>) -> Self {
        Self { gateway }
    }

    /// Full primary flow including the delayed return to `Idle`.
    pub async fn submit<P: WorkflowPresenter>(
        &self,
        presenter: &P,
        kind: SubmissionKind,
    ) -> Result<usize, SubmissionError> {
        let started = presenter.update(|wf| {
            wf.begin(kind)
                .map(|request| (request, wf.generation(), wf.settings()))
        });
        let (request, generation, settings) = match started {
            Ok(started) => started,
            Err(err) => {
                warn!(?kind, %err, "submission rejected");
                presenter.notify(Notification::from(&err));
                return Err(err);
            }
        };

        info!(
            ?kind,
            date_start = %request.date_start,
            date_end = %request.date_end,
            file = request.file.as_ref().map(|f| f.name.as_str()).unwrap_or("-"),
            bytes = request.file.as_ref().map(|f| f.size_bytes()).unwrap_or(0),
            "submitting reconciliation"
        );

        let outcome = with_progress(self.gateway.reconcile(&request), settings.interval(), || {
            presenter.update(|wf| wf.tick());
        })
        .await;

        let completed = presenter.update(|wf| wf.complete(outcome));
        let result = match completed {
            Ok(result) => {
                let missing = result.missing.len();
                info!(missing, "reconciliation succeeded");
                let description = match kind {
                    SubmissionKind::Compare => {
                        format!("Comparação concluída! {missing} notas faltantes encontradas.")
                    }
                    SubmissionKind::Query => "Dados consultados com sucesso!".to_string(),
                };
                presenter.publish(result);
                presenter.notify(Notification::success("Sucesso", description));
                Ok(missing)
            }
            Err(err) => {
                error!(?kind, ?err, "reconciliation failed");
                presenter.notify(Notification::from(&err));
                Err(err)
            }
        };

        tokio::time::sleep(settings.reset_delay()).await;
        presenter.update(|wf| wf.reset_after_terminal(generation));
        result
    }

    /// Remote spreadsheet rendering offered as a save-as; independent of `phase`.
    pub async fn export<P: WorkflowPresenter, T: ExportTarget + ?Sized>(
        &self,
        presenter: &P,
        target: &T,
    ) -> Result<SaveOutcome, SubmissionError> {
        let outcome = self.export_inner(presenter, target).await;
        match &outcome {
            Ok(SaveOutcome::Saved(path)) => {
                info!(path = %path.display(), "export saved");
                presenter.notify(Notification::success(
                    "Sucesso",
                    "Arquivo Excel exportado com sucesso!",
                ));
            }
            Ok(SaveOutcome::Cancelled) => info!("export cancelled by user"),
            Err(err) => {
                warn!(?err, "export failed");
                let description = match err {
                    SubmissionError::TransportFailure(_) | SubmissionError::MalformedResponse(_) => {
                        "Erro ao exportar Excel.".to_string()
                    }
                    other => other.to_string(),
                };
                presenter.notify(Notification::error("Erro", description));
            }
        }
        outcome
    }

    async fn export_inner<P: WorkflowPresenter, T: ExportTarget + ?Sized>(
        &self,
        presenter: &P,
        target: &T,
    ) -> Result<SaveOutcome, SubmissionError> {
        let request = presenter.update(|wf| wf.begin_export())?;
        let bytes = self.gateway.export(&request).await?;
        let file_name = comparison_file_name(&request.date_start, &request.date_end);
        target
            .save(&file_name, &bytes)
            .map_err(|err| SubmissionError::SaveFailed(format!("{err:#}")))
    }
}
