use dioxus::prelude::*;

use crate::hooks::use_toaster::use_toaster;
use crate::hooks::use_toaster::ToastKind;

/// Renders the current toasts in the bottom corner of the window.
#[component]
pub fn ToastStack() -> Element {
    let mut toaster = use_toaster();
    let toasts = toaster.toasts();

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts.read().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: if toast.kind.is_error() { "toast toast-error" } else { "toast toast-success" },
                    role: "status",
                    onclick: move |_| toaster.dismiss(toast.id),
                    "{icon(toast.kind)} {toast.message}"
                }
            }
        }
    }
}

fn icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✔",
        ToastKind::Error => "✖",
    }
}
