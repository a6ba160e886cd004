// web_app/notify.rs - Transient user notifications
//
// The data service reports failures through a Notifier handed to it at
// construction, so it never touches UI state itself. In the browser the
// notifier is a signal-backed toast store provided through context.

use crate::web_app::error::ApiError;

/// Statuses that are logged but never shown as a toast.
///
/// A missing addiction already renders an in-page "not found" state.
pub const DEFAULT_SILENT_STATUSES: &[u16] = &[404];

/// A failure message for the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Sink for user-facing notices
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Drops every notice. Used where nobody is watching.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _notice: Notice) {}
}

/// Decides which failures reach the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationPolicy {
    silent_statuses: Vec<u16>,
}

impl Default for NotificationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_SILENT_STATUSES.to_vec())
    }
}

impl NotificationPolicy {
    pub fn new(silent_statuses: Vec<u16>) -> Self {
        Self { silent_statuses }
    }

    pub fn silent_statuses(&self) -> &[u16] {
        &self.silent_statuses
    }

    pub fn should_notify(&self, error: &ApiError) -> bool {
        match error.status() {
            Some(status) => !self.silent_statuses.contains(&status),
            None => true,
        }
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use toasts::{Toast, ToastStore, TOAST_LIFETIME_MS};

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod toasts {
    use super::{Notice, Notifier};
    use leptos::prelude::*;
    use uuid::Uuid;

    /// How long a toast stays on screen in the browser
    pub const TOAST_LIFETIME_MS: u32 = 4_000;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Toast {
        pub id: Uuid,
        pub notice: Notice,
    }

    /// Queue of visible toasts
    #[derive(Clone, Copy)]
    pub struct ToastStore {
        toasts: RwSignal<Vec<Toast>>,
    }

    impl Default for ToastStore {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ToastStore {
        pub fn new() -> Self {
            Self {
                toasts: RwSignal::new(Vec::new()),
            }
        }

        /// The store provided by the app shell, or a detached one
        pub fn from_context() -> Self {
            use_context::<ToastStore>().unwrap_or_default()
        }

        pub fn toasts(&self) -> Signal<Vec<Toast>> {
            self.toasts.into()
        }

        pub fn push(&self, notice: Notice) -> Uuid {
            let id = Uuid::new_v4();
            self.toasts.update(|t| t.push(Toast { id, notice }));

            #[cfg(feature = "hydrate")]
            {
                let store = *self;
                gloo_timers::callback::Timeout::new(TOAST_LIFETIME_MS, move || store.dismiss(id))
                    .forget();
            }

            id
        }

        pub fn dismiss(&self, id: Uuid) {
            self.toasts.update(|t| t.retain(|toast| toast.id != id));
        }
    }

    impl Notifier for ToastStore {
        fn notify(&self, notice: Notice) {
            self.push(notice);
        }
    }
}
