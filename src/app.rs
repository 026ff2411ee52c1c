use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use tracing::error;

use crate::domain::entities::notification::Notification;
use crate::domain::entities::submission::SubmissionKind;
use crate::domain::summary::summarize;
use crate::infra::config::resolve_config;
use crate::infra::http::client::HttpReconciliationGateway;
use crate::platform::desktop::dialogs::DialogExportTarget;
use crate::ui::components::companies::CompanyStats;
use crate::ui::components::records::RecordsTable;
use crate::ui::components::summary::SummaryCards;
use crate::ui::components::toasts::ToastStack;
use crate::ui::components::upload::UploadPanel;
use crate::ui::state::app_state::{AppState, ResultTab};
use crate::usecase::ports::presenter::WorkflowPresenter;
use crate::usecase::services::submission_service::SubmissionService;

fn tab_style(active: bool) -> &'static str {
    if active {
        "flex: 1; padding: 10px; border: none; border-bottom: 3px solid #2563eb; background: #fff; font-weight: 600;"
    } else {
        "flex: 1; padding: 10px; border: none; border-bottom: 3px solid transparent; background: #f1f5f9;"
    }
}

#[component]
pub fn App() -> Element {
    let (config, config_error) = use_hook(|| {
        let (config, err) = resolve_config();
        (config, err.map(|err| format!("{err:#}")))
    });
    let service = use_hook(|| {
        HttpReconciliationGateway::new(&config.api)
            .map(|gateway| Rc::new(SubmissionService::new(Arc::new(gateway))))
            .map_err(|err| err.to_string())
    });

    let state = AppState::new(config.progress);
    use_context_provider(|| state);
    use_hook(move || {
        if let Some(err) = config_error {
            error!("config: {err}");
            state.notify(Notification::error("Configuração", err));
        }
    });

    let service = match service {
        Ok(service) => service,
        Err(err) => {
            return rsx! {
                div {
                    p { "Não foi possível iniciar o cliente da API: {err}" }
                }
            };
        }
    };

    let submit_service = service.clone();
    let on_submit = move |kind: SubmissionKind| {
        let service = submit_service.clone();
        spawn(async move {
            let _ = service.submit(&state, kind).await;
        });
    };
    let query_service = service.clone();
    let export_service = service.clone();

    let workflow = state.workflow.read();
    let busy = workflow.phase().is_busy();
    let querying = workflow.active_kind() == Some(SubmissionKind::Query);
    let date_start = workflow.state().date_start.clone().unwrap_or_default();
    let date_end = workflow.state().date_end.clone().unwrap_or_default();
    let dates = (
        workflow.state().date_start.clone(),
        workflow.state().date_end.clone(),
    );
    drop(workflow);

    let summary = state
        .result
        .read()
        .as_ref()
        .map(|result| summarize(result, dates.0.as_deref(), dates.1.as_deref()));
    let mut active_tab = state.active_tab;

    rsx! {
        div {
            style: "min-height: 100vh; background: #f8fafc; font-family: sans-serif;",
            header {
                style: "background: #fff; border-bottom: 1px solid #e2e8f0; padding: 16px 32px;",
                h1 { style: "margin: 0; font-size: 22px;", "Conferência de Notas de Entrada" }
            }

            div {
                style: "max-width: 1200px; margin: 0 auto; padding: 24px 32px;",
                div {
                    style: "background: #fff; border: 1px solid #e2e8f0; border-radius: 10px; padding: 16px; margin-bottom: 24px;",
                    h3 { "Filtros de Data" }
                    div {
                        style: "display: flex; gap: 16px; align-items: flex-end; flex-wrap: wrap;",
                        label {
                            "Data Início "
                            input {
                                r#type: "date",
                                value: "{date_start}",
                                oninput: move |event| state.update(|wf| wf.set_date_start(&event.value())),
                            }
                        }
                        label {
                            "Data Fim "
                            input {
                                r#type: "date",
                                value: "{date_end}",
                                oninput: move |event| state.update(|wf| wf.set_date_end(&event.value())),
                            }
                        }
                        button {
                            style: "padding: 8px 16px; background: #2563eb; color: #fff; border: none; border-radius: 6px;",
                            disabled: busy,
                            onclick: move |_| {
                                let service = query_service.clone();
                                spawn(async move {
                                    let _ = service.submit(&state, SubmissionKind::Query).await;
                                });
                            },
                            if querying { "Consultando..." } else { "Consultar Dados" }
                        }
                    }
                }

                if let Some(summary) = summary {
                    SummaryCards {
                        summary,
                        date_start: dates.0.clone(),
                        date_end: dates.1.clone(),
                    }
                }

                CompanyStats {}

                div {
                    style: "display: flex; margin-bottom: 16px;",
                    button {
                        style: tab_style(active_tab() == ResultTab::Details),
                        onclick: move |_| active_tab.set(ResultTab::Details),
                        "Notas Detalhadas"
                    }
                    button {
                        style: tab_style(active_tab() == ResultTab::Comparison),
                        onclick: move |_| active_tab.set(ResultTab::Comparison),
                        "Comparação (Arquivo x Banco)"
                    }
                }

                {
                    match active_tab() {
                        ResultTab::Details => rsx! { RecordsTable {} },
                        ResultTab::Comparison => rsx! {
                            UploadPanel {
                                on_submit,
                                on_export: move |_| {
                                    let service = export_service.clone();
                                    spawn(async move {
                                        let _ = service.export(&state, &DialogExportTarget).await;
                                    });
                                },
                            }
                        },
                    }
                }
            }

            ToastStack {}
        }
    }
}
