//! Non-blocking toast notifications

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Receiver of user-facing outcome messages
pub trait Notifier {
    fn notify(&self, level: ToastLevel, message: String);

    fn success(&self, message: String) {
        self.notify(ToastLevel::Success, message);
    }

    fn error(&self, message: String) {
        self.notify(ToastLevel::Error, message);
    }
}

/// Toast stack shared through context
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    /// Add a toast without scheduling its removal
    pub fn push(&self, level: ToastLevel, message: String) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| list.push(Toast { id, level, message }));
        id
    }

    /// Add a toast that disappears on its own
    pub fn dispatch(&self, level: ToastLevel, message: String) {
        let id = self.push(level, message);
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastService {
    fn notify(&self, level: ToastLevel, message: String) {
        match level {
            ToastLevel::Success => log::info!("{}", message),
            ToastLevel::Error => log::warn!("{}", message),
        }
        self.dispatch(level, message);
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the toast stack in the top-right corner
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_toasts();
    let toasts = service.toasts();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.get()
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.level {
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" title="Close" on:click=move |_| service.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Collects notifications instead of showing them
    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        events: Rc<RefCell<Vec<(ToastLevel, String)>>>,
    }

    impl RecordingNotifier {
        pub fn events(&self) -> Vec<(ToastLevel, String)> {
            self.events.borrow().clone()
        }

        pub fn errors(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter(|(level, _)| *level == ToastLevel::Error)
                .map(|(_, m)| m)
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, level: ToastLevel, message: String) {
            self.events.borrow_mut().push((level, message));
        }
    }
}
