use dioxus::prelude::*;

use crate::domain::entities::record::Record;
use crate::domain::search::{empty_state_message, filter_records};
use crate::domain::summary::format_br_date;
use crate::ui::state::app_state::AppState;

#[component]
pub fn RecordsTable() -> Element {
    let state = use_context::<AppState>();
    let mut search = state.search;
    let query = search();

    let (total, filtered): (usize, Vec<Record>) = match state.result.read().as_ref() {
        Some(result) => (
            result.missing.len(),
            filter_records(&result.missing, &query)
                .into_iter()
                .cloned()
                .collect(),
        ),
        None => (0, Vec::new()),
    };

    rsx! {
        div {
            style: "background: #fff; border: 1px solid #e2e8f0; border-radius: 10px; padding: 16px;",
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                h3 { "Detalhes das Notas Fiscais" }
                span {
                    style: "background: #f1f5f9; border-radius: 999px; padding: 2px 10px; font-size: 12px;",
                    "{total} notas"
                }
            }
            input {
                style: "width: 100%; padding: 8px; margin: 8px 0 16px;",
                placeholder: "Buscar por número, série ou empresa...",
                value: "{query}",
                oninput: move |event| search.set(event.value()),
            }

            if filtered.is_empty() {
                div {
                    style: "text-align: center; padding: 32px; color: #64748b;",
                    {empty_state_message(total)}
                }
            } else {
                table {
                    style: "width: 100%; border-collapse: collapse;",
                    thead {
                        tr {
                            th { style: "text-align: left;", "Número da Nota" }
                            th { style: "text-align: left;", "Data de Emissão" }
                            th { style: "text-align: left;", "Empresa" }
                            th { style: "text-align: left;", "Modelo" }
                            th { style: "text-align: center;", "Quantidade" }
                            th { style: "text-align: left;", "Org ID" }
                        }
                    }
                    tbody {
                        for record in filtered.iter() {
                            tr {
                                style: "border-bottom: 1px solid #e2e8f0;",
                                td { style: "color: #2563eb; font-weight: 600;", "{record.number}" }
                                td { {format_br_date(&record.issue_date)} }
                                td { "{record.company}" }
                                td { "{record.model}" }
                                td { style: "text-align: center;", "{record.quantity}" }
                                td { style: "color: #64748b; font-size: 13px;", "{record.org_id}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
