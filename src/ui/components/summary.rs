use dioxus::prelude::*;

use crate::domain::summary::{format_br_date, format_thousands, Summary};

#[component]
pub fn SummaryCards(summary: Summary, date_start: Option<String>, date_end: Option<String>) -> Element {
    let period = match (&date_start, &date_end) {
        (Some(start), Some(end)) => format!("{} - {}", format_br_date(start), format_br_date(end)),
        _ => "dias de análise".to_string(),
    };

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; margin-bottom: 24px;",
            SummaryCard {
                title: "Total de Notas no Banco",
                value: format_thousands(summary.total_stored),
                caption: "notas fiscais encontradas".to_string(),
                color: "#2563eb",
            }
            SummaryCard {
                title: "Total de Itens",
                value: format_thousands(summary.quantity_total),
                caption: "itens processados".to_string(),
                color: "#16a34a",
            }
            SummaryCard {
                title: "Total de Notas no Arquivo",
                value: format_thousands(summary.total_in_file),
                caption: "notas no arquivo".to_string(),
                color: "#9333ea",
            }
            SummaryCard {
                title: "Período Analisado",
                value: summary.day_count.to_string(),
                caption: period,
                color: "#ea580c",
            }
        }
    }
}

#[component]
fn SummaryCard(title: &'static str, value: String, caption: String, color: &'static str) -> Element {
    rsx! {
        div {
            style: "background: {color}; color: #fff; border-radius: 10px; padding: 20px;",
            p { style: "font-size: 13px; opacity: 0.85; margin: 0;", "{title}" }
            p { style: "font-size: 28px; font-weight: 700; margin: 4px 0;", "{value}" }
            p { style: "font-size: 12px; opacity: 0.85; margin: 0;", "{caption}" }
        }
    }
}
