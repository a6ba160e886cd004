// web_app/pages/solution.rs - Recovery guide for one addiction
//
// Reloads whenever the `addiction_id` route parameter changes. Responses
// for an identifier the user already navigated away from are dropped by
// the SolutionState ticket check.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::web_app::components::*;
use crate::web_app::model::{Addiction, Tab};
use crate::web_app::notify::ToastStore;
use crate::web_app::service::{AddictionService, ServerFnBackend};
use crate::web_app::state::{SolutionState, SolutionView, Ticket};

use super::go_back;

pub const NOT_FOUND_TITLE: &str = "Addiction Not Found";
pub const NOT_FOUND_MESSAGE: &str = "The requested addiction type could not be found.";

#[component]
pub fn SolutionPage() -> impl IntoView {
    let params = use_params_map();
    let addiction_id = Memo::new(move |_| params.with(|p| p.get("addiction_id")).unwrap_or_default());

    let state = RwSignal::new(SolutionState::new(addiction_id.get_untracked()));
    let service = AddictionService::new(ServerFnBackend, ToastStore::from_context());

    let load = Callback::new(move |(ticket, id): (Ticket, String)| {
        let service = service.clone();
        spawn_local(async move {
            let result = service.get_addiction(&id).await;
            state.update(|s| {
                s.finish_load(ticket, result);
            });
        });
    });

    Effect::new(move |_| {
        let id = addiction_id.get();
        if let Some(ticket) = state.try_update(|s| s.navigate(id.clone())) {
            load.run((ticket, id));
        }
    });

    let on_retry = Callback::new(move |()| {
        if let Some(ticket) = state.try_update(|s| s.retry()).flatten() {
            let id = state.with_untracked(|s| s.addiction_id().to_string());
            load.run((ticket, id));
        }
    });

    let on_select = Callback::new(move |tab: Tab| {
        state.update(|s| {
            s.select_tab(tab);
        });
    });

    // Tab switches must not rebuild the whole page
    let page_view = Memo::new(move |_| state.with(|s| s.view().clone()));
    let active_tab = Signal::derive(move || state.with(|s| s.active_tab()));

    move || match page_view.get() {
        SolutionView::Loading => view! {
            <div class="min-h-screen flex items-center justify-center">
                <LoadingSpinner size=SpinnerSize::Lg message="Loading addiction information..." />
            </div>
        }
        .into_any(),
        SolutionView::Error(message) => view! {
            <div class="min-h-screen flex items-center justify-center">
                <ErrorMessage title="Failed to Load" message=message on_retry=on_retry />
            </div>
        }
        .into_any(),
        SolutionView::NotFound => view! {
            <div class="min-h-screen flex items-center justify-center">
                <ErrorMessage title=NOT_FOUND_TITLE message=NOT_FOUND_MESSAGE show_retry=false />
            </div>
        }
        .into_any(),
        SolutionView::Ready(addiction) => view! {
            <SolutionContent addiction=addiction active_tab=active_tab on_select=on_select />
        }
        .into_any(),
    }
}

/// Sub-heading under the hero title
pub fn hero_tagline(name: &str) -> String {
    format!(
        "Evidence-based strategies and professional support for overcoming {} addiction",
        name
    )
}

pub fn cta_heading(name: &str) -> String {
    format!("Ready to Overcome {} Addiction?", name)
}

#[component]
fn SolutionContent(
    addiction: Addiction,
    active_tab: Signal<Option<Tab>>,
    on_select: Callback<Tab>,
) -> impl IntoView {
    let badge = format!("{} Addiction", addiction.category.hero_label());
    let title = addiction.display_title();
    let emoji = addiction.display_emoji().to_string();
    let tagline = hero_tagline(&addiction.name);
    let cta = cta_heading(&addiction.name);
    let tabs = addiction.tabs();
    let name = addiction.name.clone();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-green-50">
            <div class="bg-white shadow-sm border-b">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
                    <button
                        type="button"
                        class="inline-flex items-center text-gray-600 hover:text-primary-600 transition-colors"
                        on:click=move |_| go_back()
                    >
                        <span class="mr-2">"←"</span>
                        "Back to Addictions"
                    </button>
                </div>
            </div>

            <section class="py-12 bg-gradient-to-r from-primary-600 to-secondary-600 text-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <div class="inline-flex items-center bg-white/10 backdrop-blur-sm rounded-full px-6 py-2 mb-6">
                        <span class="text-3xl mr-3" role="img" aria-label=name>{emoji}</span>
                        <span class="text-sm font-medium">{badge}</span>
                    </div>
                    <h1 class="text-4xl md:text-5xl font-display font-bold mb-4">{title}</h1>
                    <p class="text-xl text-primary-100 max-w-2xl mx-auto">{tagline}</p>
                </div>
            </section>

            <section class="py-12">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <TabNav tabs=tabs active=active_tab on_select=on_select />
                    {move || active_tab.get().map(|tab| view! {
                        <TabPanel addiction=addiction.clone() tab=tab />
                    })}
                </div>
            </section>

            <section class="py-16 bg-gradient-to-r from-primary-600 to-secondary-600 text-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-3xl font-display font-bold mb-4">{cta}</h2>
                    <p class="text-xl text-primary-100 mb-8 max-w-2xl mx-auto">
                        "Take the first step toward recovery. You don't have to face this alone."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <button
                            type="button"
                            class="bg-white text-primary-600 px-8 py-4 rounded-xl font-semibold hover:bg-gray-50 transition-colors inline-flex items-center"
                        >
                            <span class="mr-2">"♥"</span>
                            "Get Professional Help"
                        </button>
                        <a
                            href="/"
                            class="border-2 border-white/30 text-white px-8 py-4 rounded-xl font-semibold hover:bg-white/10 transition-colors inline-flex items-center justify-center"
                        >
                            "Explore Other Addictions"
                        </a>
                    </div>
                </div>
            </section>
        </div>
    }
}
