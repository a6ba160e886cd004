// web_app/components/search.rs - Home page search field
//
// Filtering happens on the already-loaded list, so every keystroke is
// forwarded as-is; there is no submit step.

use leptos::prelude::*;

pub const SEARCH_PLACEHOLDER: &str = "Search addiction types...";

/// Search box with a leading icon
#[component]
pub fn SearchInput(
    /// Current term, shown in the input
    #[prop(into)]
    value: Signal<String>,
    /// Called with the raw text on every input event
    on_input: Callback<String>,
    #[prop(default = SEARCH_PLACEHOLDER)]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto mb-12">
            <div class="relative">
                <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                    <span class="text-gray-400">"🔍"</span>
                </div>
                <input
                    type="search"
                    placeholder=placeholder
                    aria-label=placeholder
                    class="w-full pl-10 pr-4 py-3 border border-gray-300 rounded-lg \
                           focus:ring-2 focus:ring-primary-500 focus:border-transparent \
                           outline-none transition-all"
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

/// Shown when a search matches nothing in any category
#[component]
pub fn NoResults() -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <div class="text-6xl mb-4">"🔍"</div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">"No results found"</h3>
            <p class="text-gray-600">
                "Try searching with different keywords or browse all addiction types above."
            </p>
        </div>
    }
}
