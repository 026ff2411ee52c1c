use dioxus::prelude::*;
use dioxus::html::HasFileData;
use tracing::warn;

use crate::domain::entities::notification::Notification;
use crate::domain::entities::submission::{has_accepted_extension, Phase, SubmissionKind};
use crate::platform::desktop::dialogs::{pick_spreadsheet, read_picked_file};
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::presenter::WorkflowPresenter;
use crate::usecase::services::submission_service::SubmissionError;

const CARD_STYLE: &str = "background: #fff; border: 1px solid #e2e8f0; border-radius: 10px; padding: 16px; margin-bottom: 16px;";

fn accept_file(state: AppState, name: String, bytes: Vec<u8>) {
    if let Err(err) = state.update(|wf| wf.select_file(name, bytes)) {
        state.notify(Notification::from(&err));
    }
}

#[component]
pub fn UploadPanel(on_submit: EventHandler<SubmissionKind>, on_export: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let mut drag_active = state.drag_active;

    let workflow = state.workflow.read();
    let phase = workflow.phase();
    let progress = workflow.progress();
    let comparing = workflow.active_kind() == Some(SubmissionKind::Compare);
    let date_start = workflow.state().date_start.clone().unwrap_or_default();
    let date_end = workflow.state().date_end.clone().unwrap_or_default();
    let file_label = workflow
        .state()
        .file
        .as_ref()
        .map(|file| (file.name.clone(), file.size_mb_label()));
    drop(workflow);

    let busy = phase.is_busy();
    let drop_border = if drag_active() { "#60a5fa" } else { "#cbd5e1" };
    let drop_background = if drag_active() { "#eff6ff" } else { "transparent" };

    rsx! {
        div {
            style: "{CARD_STYLE} background: #eff6ff; border-color: #bfdbfe; color: #1e40af;",
            h3 { "Instruções para Upload" }
            p { "Faça upload de um arquivo Excel com as colunas: numero, serie, quantidade." }
            p { style: "font-size: 13px;",
                "Tamanho máximo: 200MB (arquivos muito grandes podem levar mais de 30 minutos para processar)"
            }
        }

        div {
            style: CARD_STYLE,
            h3 { "Período para Comparação" }
            div {
                style: "display: flex; gap: 16px; flex-wrap: wrap;",
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
            }
        }

        div {
            style: CARD_STYLE,
            h3 { "Upload do Arquivo Excel" }
            div {
                style: "border: 2px dashed {drop_border}; background: {drop_background}; border-radius: 8px; padding: 32px; text-align: center;",
                ondragenter: move |event| {
                    event.prevent_default();
                    drag_active.set(true);
                },
                ondragover: move |event| {
                    event.prevent_default();
                    drag_active.set(true);
                },
                ondragleave: move |_| drag_active.set(false),
                ondrop: move |event: DragEvent| async move {
                    event.prevent_default();
                    drag_active.set(false);
                    let files = event.files();
                    let Some(file) = files.first() else {
                        return;
                    };
                    let name = file.name();
                    if !has_accepted_extension(&name) {
                        state.notify(Notification::from(&SubmissionError::UnsupportedFileType(name)));
                        return;
                    }
                    match file.read_bytes().await {
                        Ok(bytes) => accept_file(state, name, bytes.to_vec()),
                        Err(err) => {
                            warn!(file = %name, "failed to read dropped file: {err}");
                            state.notify(Notification::error("Erro", format!("Não foi possível ler {name}.")));
                        }
                    }
                },
                h4 { "Selecione um arquivo Excel" }
                p { style: "color: #64748b;", "Arraste e solte aqui ou clique para selecionar" }
                button {
                    disabled: busy,
                    onclick: move |_| {
                        let Some(path) = pick_spreadsheet() else {
                            return;
                        };
                        match read_picked_file(&path) {
                            Ok((name, bytes)) => accept_file(state, name, bytes),
                            Err(err) => {
                                warn!("{err:#}");
                                state.notify(Notification::error("Erro", format!("{err:#}")));
                            }
                        }
                    },
                    "Escolher arquivo"
                }
                if let Some((name, size)) = file_label {
                    div {
                        style: "margin-top: 16px; padding: 10px; background: #f0fdf4; border: 1px solid #bbf7d0; border-radius: 8px; color: #166534;",
                        strong { "{name}" }
                        span { " ({size}) " }
                        button {
                            disabled: busy,
                            onclick: move |_| state.update(|wf| wf.clear_file()),
                            "Remover"
                        }
                    }
                }
            }

            if progress > 0 {
                ProgressBar { progress, phase }
            }

            div {
                style: "display: flex; gap: 16px; margin-top: 20px;",
                button {
                    style: "flex: 1; padding: 10px; background: #2563eb; color: #fff; border: none; border-radius: 6px;",
                    disabled: busy,
                    onclick: move |_| on_submit.call(SubmissionKind::Compare),
                    if comparing { "Verificando Notas..." } else { "Verificar Notas" }
                }
                button {
                    style: "flex: 1; padding: 10px; background: #fff; border: 1px solid #cbd5e1; border-radius: 6px;",
                    onclick: move |_| on_export.call(()),
                    "Exportar Resultado para Excel"
                }
            }
        }
    }
}

#[component]
fn ProgressBar(progress: u8, phase: Phase) -> Element {
    let label = match phase {
        Phase::Succeeded => "Concluído",
        Phase::Failed => "Falhou",
        _ => "Processando...",
    };

    rsx! {
        div {
            style: "margin-top: 16px;",
            div {
                style: "display: flex; justify-content: space-between; font-size: 13px; color: #475569;",
                span { "{label}" }
                span { "{progress}%" }
            }
            div {
                style: "width: 100%; height: 8px; background: #e2e8f0; border-radius: 999px;",
                div {
                    style: "width: {progress}%; height: 8px; background: #2563eb; border-radius: 999px; transition: width 0.3s;",
                }
            }
        }
    }
}
