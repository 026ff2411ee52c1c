use dioxus::prelude::*;

use crate::ui::state::app_state::AppState;

#[component]
pub fn ToastStack() -> Element {
    let state = use_context::<AppState>();
    let toasts = state.toasts.read().clone();

    rsx! {
        div {
            style: "position: fixed; right: 16px; bottom: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 1500;",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    style: if toast.notification.is_error() {
                        "background: #fef2f2; border: 1px solid #fecaca; color: #991b1b; border-radius: 8px; padding: 10px 14px; min-width: 260px; cursor: pointer;"
                    } else {
                        "background: #f0fdf4; border: 1px solid #bbf7d0; color: #166534; border-radius: 8px; padding: 10px 14px; min-width: 260px; cursor: pointer;"
                    },
                    onclick: move |_| state.dismiss_toast(toast.id),
                    strong { "{toast.notification.title}" }
                    p { style: "margin: 4px 0 0;", "{toast.notification.description}" }
                }
            }
        }
    }
}
