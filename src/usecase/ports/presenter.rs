use crate::domain::entities::notification::Notification;
use crate::domain::entities::record::ReconciliationResult;
use crate::usecase::services::submission_service::SubmissionWorkflow;

/// Owner of the workflow state and of everything derived from a result.
///
/// Calls happen on one logical thread; `update` must not be re-entered from
/// inside its own closure.
pub trait WorkflowPresenter {
    fn update<R>(&self, f: impl FnOnce(&mut SubmissionWorkflow) -> R) -> R;
    fn publish(&self, result: ReconciliationResult);
    fn notify(&self, notification: Notification);
}
