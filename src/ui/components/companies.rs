use dioxus::prelude::*;

use crate::domain::aggregate::{aggregate, CompanyGroup};
use crate::domain::drilldown::total_pages;
use crate::domain::summary::format_br_date;
use crate::platform::desktop::dialogs::DialogExportTarget;
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::presenter::WorkflowPresenter;
use crate::usecase::services::export_service::CompanyExportService;

const PREVIEW_LIMIT: usize = 5;

#[component]
pub fn CompanyStats() -> Element {
    let state = use_context::<AppState>();
    let groups = state
        .result
        .read()
        .as_ref()
        .map(|result| aggregate(&result.missing))
        .unwrap_or_default();

    if groups.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "margin-bottom: 24px;",
            h2 { "Estatísticas por Empresa" }
            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px;",
                for group in groups {
                    CompanyCard { key: "{group.key}", group: group.clone() }
                }
            }
        }
    }
}

#[component]
fn CompanyCard(group: CompanyGroup) -> Element {
    let state = use_context::<AppState>();
    let mut drilldown = state.drilldown;
    let expanded = drilldown.read().is_expanded(&group.key);
    let page = drilldown.read().current_page(&group.key);
    let pages = total_pages(&group);
    let window: Vec<_> = drilldown.read().page(&group.key, &group).to_vec();
    let hidden = group.hidden_after_preview(PREVIEW_LIMIT);

    let toggle_key = group.key.clone();
    let prev_group = group.clone();
    let next_group = group.clone();
    let export_group = group.clone();

    rsx! {
        div {
            style: "background: #fff; border: 1px solid #e2e8f0; border-radius: 10px; padding: 16px;",
            h3 { "Empresa {group.key}" }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; text-align: center;",
                div {
                    style: "background: #fef2f2; border-radius: 8px; padding: 10px; color: #dc2626;",
                    p { style: "font-size: 22px; font-weight: 700; margin: 0;", "{group.record_count}" }
                    p { style: "font-size: 13px; margin: 0;", "Notas Não Encontradas" }
                }
                div {
                    style: "background: #fff7ed; border-radius: 8px; padding: 10px; color: #ea580c;",
                    p { style: "font-size: 22px; font-weight: 700; margin: 0;", "{group.quantity_total}" }
                    p { style: "font-size: 13px; margin: 0;", "Total de Itens" }
                }
            }

            h4 { "Notas Faltantes:" }
            for record in group.preview(PREVIEW_LIMIT).iter() {
                div {
                    style: "display: flex; justify-content: space-between; font-size: 12px; background: #f8fafc; padding: 6px; margin-bottom: 4px;",
                    span { "NF: {record.number}" }
                    span { "Série: {record.model}" }
                }
            }
            if hidden > 0 {
                p { style: "font-size: 12px; color: #64748b; text-align: center;", "+{hidden} notas" }
            }

            div {
                style: "display: flex; gap: 8px; margin-top: 12px;",
                button {
                    style: "flex: 1;",
                    onclick: move |_| {
                        drilldown.write().toggle(&toggle_key);
                    },
                    if expanded { "Ocultar notas" } else { "Ver todas as notas" }
                }
                button {
                    style: "flex: 1; background: #16a34a; color: #fff; border: none; border-radius: 6px;",
                    onclick: move |_| {
                        let target = DialogExportTarget;
                        if let Some(notification) =
                            CompanyExportService::new(&target).export_and_notify(&export_group)
                        {
                            state.notify(notification);
                        }
                    },
                    "Exportar CSV"
                }
            }

            if expanded {
                table {
                    style: "width: 100%; margin-top: 12px; font-size: 12px; border-collapse: collapse;",
                    thead {
                        tr {
                            th { style: "text-align: left;", "Número" }
                            th { style: "text-align: left;", "Emissão" }
                            th { style: "text-align: left;", "Modelo" }
                            th { style: "text-align: right;", "Qtd." }
                        }
                    }
                    tbody {
                        for record in window.iter() {
                            tr {
                                td { "{record.number}" }
                                td { {format_br_date(&record.issue_date)} }
                                td { "{record.model}" }
                                td { style: "text-align: right;", "{record.quantity}" }
                            }
                        }
                    }
                }
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-top: 8px;",
                    button {
                        disabled: page <= 1,
                        onclick: move |_| {
                            drilldown.write().previous_page(&prev_group.key, &prev_group);
                        },
                        "Anterior"
                    }
                    span { "Página {page} de {pages}" }
                    button {
                        disabled: page >= pages,
                        onclick: move |_| {
                            drilldown.write().next_page(&next_group.key, &next_group);
                        },
                        "Próxima"
                    }
                }
            }
        }
    }
}
