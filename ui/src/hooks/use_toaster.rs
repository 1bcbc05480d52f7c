use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::compat;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, PartialEq, Debug, strum::EnumIs)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of transient notifications shown over every screen.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        dioxus_logger::tracing::error!("{}", message);
        self.push(ToastKind::Error, message);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|t| t.id != id);
    }

    /// Call .read() on this in a component to subscribe to changes.
    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast { id, kind, message });

        // The toast outlives the screen that raised it, e.g. across navigation.
        let mut toaster = *self;
        spawn_forever(async move {
            compat::sleep(TOAST_LIFETIME).await;
            toaster.dismiss(id);
        });
    }
}

/// Creates the toaster and provides it to every descendant.
pub fn use_toaster_provider() -> Toaster {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 0);
    use_context_provider(|| Toaster { toasts, next_id })
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}
