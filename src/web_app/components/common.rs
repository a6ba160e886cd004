// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::ev;
use leptos::prelude::*;

use crate::web_app::notify::ToastStore;

/// Spinner sizes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl SpinnerSize {
    pub fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Sm => "h-4 w-4",
            SpinnerSize::Md => "h-8 w-8",
            SpinnerSize::Lg => "h-12 w-12",
        }
    }
}

/// Loading spinner component
///
/// Displays a centered spinner with an optional message.
#[component]
pub fn LoadingSpinner(
    #[prop(default = SpinnerSize::Md)]
    size: SpinnerSize,
    /// Message below the spinner; hidden when empty
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center space-y-4 py-8">
            <div class=format!(
                "{} animate-spin border-4 border-primary-200 border-t-primary-600 rounded-full",
                size.class()
            )></div>
            {(!message.is_empty()).then(|| view! {
                <p class="text-gray-600 text-sm font-medium text-center px-4">{message}</p>
            })}
        </div>
    }
}

pub const DEFAULT_ERROR_TITLE: &str = "Something went wrong";
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred while loading the content.";

/// Error banner with an optional retry button
///
/// The button shows only when `show_retry` is set and a callback exists.
#[component]
pub fn ErrorMessage(
    #[prop(into, default = DEFAULT_ERROR_TITLE.to_string())]
    title: String,
    #[prop(into, default = DEFAULT_ERROR_MESSAGE.to_string())]
    message: String,
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
    #[prop(default = true)]
    show_retry: bool,
) -> impl IntoView {
    let retry = on_retry.filter(|_| show_retry);

    view! {
        <div class="flex flex-col items-center justify-center py-12 px-4 text-center">
            <div class="bg-red-100 p-3 rounded-full mb-4">
                <span class="text-2xl text-red-600 font-bold">"⚠"</span>
            </div>
            <h3 class="text-lg font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600 mb-6 max-w-md leading-relaxed">{message}</p>
            {retry.map(|handler| view! {
                <button
                    type="button"
                    class="btn-primary inline-flex items-center space-x-2"
                    on:click=move |_| handler.run(())
                >
                    <span>"↻"</span>
                    <span>"Try Again"</span>
                </button>
            })}
        </div>
    }
}

/// Primary button component
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn-primary"
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn-secondary inline-flex items-center"
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Modal wrapper component
///
/// Provides the backdrop and the title bar. Open/close state belongs to
/// the parent; this closes on backdrop click, the X button or Escape.
#[component]
pub fn ModalWrapper(
    children: Children,
    on_close: Callback<()>,
    #[prop(default = "")]
    title: &'static str,
) -> impl IntoView {
    // Escape closes the modal wherever focus is
    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div
            class="modal-overlay"
            role="dialog"
            aria-modal="true"
            on:click=move |_| on_close.run(())
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-2xl font-display font-bold text-gray-900">{title}</h2>
                    <button
                        type="button"
                        class="p-2 hover:bg-gray-100 rounded-full transition-colors"
                        title="Close"
                        on:click=move |_| on_close.run(())
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                        </svg>
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Renders the toasts queued in the context ToastStore
#[component]
pub fn ToastHost() -> impl IntoView {
    let store = ToastStore::from_context();

    view! {
        <div class="fixed top-4 right-4 z-[60] flex flex-col gap-2" aria-live="polite">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                let:toast
            >
                {
                    let id = toast.id;
                    view! {
                        <div class="toast toast-error" role="status">
                            <span class="flex-1">{toast.notice.message.clone()}</span>
                            <button
                                type="button"
                                class="ml-3 text-sm opacity-70 hover:opacity-100"
                                title="Dismiss"
                                on:click=move |_| store.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
