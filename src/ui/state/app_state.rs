use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::drilldown::DrilldownController;
use crate::domain::entities::notification::Notification;
use crate::domain::entities::record::ReconciliationResult;
use crate::domain::entities::submission::ProgressSettings;
use crate::usecase::ports::presenter::WorkflowPresenter;
use crate::usecase::services::submission_service::SubmissionWorkflow;

const TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTab {
    Details,
    Comparison,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub workflow: Signal<SubmissionWorkflow>,
    pub result: Signal<Option<ReconciliationResult>>,
    pub drilldown: Signal<DrilldownController>,
    pub search: Signal<String>,
    pub toasts: Signal<Vec<Toast>>,
    pub next_toast_id: Signal<u64>,
    pub drag_active: Signal<bool>,
    pub active_tab: Signal<ResultTab>,
}

impl AppState {
    pub fn new(settings: ProgressSettings) -> Self {
        Self {
            workflow: use_signal(|| SubmissionWorkflow::new(settings)),
            result: use_signal(|| None::<ReconciliationResult>),
            drilldown: use_signal(DrilldownController::new),
            search: use_signal(String::new),
            toasts: use_signal(Vec::<Toast>::new),
            next_toast_id: use_signal(|| 0_u64),
            drag_active: use_signal(|| false),
            active_tab: use_signal(|| ResultTab::Details),
        }
    }

    pub fn dismiss_toast(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|toast| toast.id != id);
    }
}

impl WorkflowPresenter for AppState {
    fn update<R>(&self, f: impl FnOnce(&mut SubmissionWorkflow) -> R) -> R {
        let mut workflow = self.workflow;
        let mut guard = workflow.write();
        f(&mut guard)
    }

    fn publish(&self, result: ReconciliationResult) {
        let mut current = self.result;
        current.set(Some(result));
    }

    fn notify(&self, notification: Notification) {
        let mut next_toast_id = self.next_toast_id;
        let mut toasts = self.toasts;
        let id = next_toast_id();
        next_toast_id.set(id + 1);
        toasts.write().push(Toast { id, notification });

        let state = *self;
        spawn(async move {
            tokio::time::sleep(TOAST_TTL).await;
            state.dismiss_toast(id);
        });
    }
}
