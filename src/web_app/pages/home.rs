// web_app/pages/home.rs - Landing page
//
// Hero, features, the searchable list of addiction types and a closing
// call to action. The list is fetched once after hydration; the server
// renders the loading state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::notify::ToastStore;
use crate::web_app::service::{AddictionService, ServerFnBackend};
use crate::web_app::state::{HomeState, Ticket};

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "⚡",
        "Fast & Effective",
        "Our proven methods help you see results quickly with evidence-based strategies tailored to your needs.",
    ),
    (
        "🛡",
        "Safe & Confidential",
        "Your privacy is protected. All consultations and treatment plans are completely confidential and secure.",
    ),
    (
        "👥",
        "24/7 Support",
        "Round-the-clock support from our team of professionals and peer community when you need it most.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let state = RwSignal::new(HomeState::new());
    let service = AddictionService::new(ServerFnBackend, ToastStore::from_context());

    let load = Callback::new(move |ticket: Ticket| {
        let service = service.clone();
        spawn_local(async move {
            let result = service.list_types().await;
            state.update(|s| {
                s.finish_load(ticket, result);
            });
        });
    });

    // Runs once on the client after hydration
    Effect::new(move |_| {
        if let Some(ticket) = state.try_update(|s| s.begin_load()) {
            load.run(ticket);
        }
    });

    let on_retry = Callback::new(move |()| {
        if let Some(ticket) = state.try_update(|s| s.retry()).flatten() {
            load.run(ticket);
        }
    });

    let on_search = Callback::new(move |term: String| {
        state.update(|s| s.set_search_term(term));
    });

    let search_term = Signal::derive(move || state.with(|s| s.search_term().to_string()));

    view! {
        <section class="relative overflow-hidden bg-gradient-to-br from-primary-600 via-primary-700 to-secondary-600 text-white">
            <div class="absolute inset-0 bg-black/10"></div>
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 lg:py-28">
                <div class="text-center max-w-4xl mx-auto">
                    <div class="inline-flex items-center bg-white/10 backdrop-blur-sm rounded-full px-6 py-2 mb-8">
                        <span class="mr-2 text-red-300">"♥"</span>
                        <span class="text-sm font-medium">"Trusted Recovery Partner"</span>
                    </div>

                    <h1 class="text-4xl md:text-6xl lg:text-7xl font-display font-bold leading-tight mb-8">
                        "Best way to live life is "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-yellow-300 to-orange-300">
                            "free from addiction"
                        </span>
                    </h1>

                    <p class="text-xl md:text-2xl text-primary-100 mb-12 max-w-3xl mx-auto leading-relaxed">
                        "Comprehensive Care and Support for Mental Health and Substance Abuse"
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href="#addiction-types"
                            class="bg-white text-primary-600 px-8 py-4 rounded-xl font-semibold hover:bg-gray-50 transition-colors inline-flex items-center justify-center shadow-xl"
                        >
                            <span>"Start Your Recovery"</span>
                            <span class="ml-2">"→"</span>
                        </a>
                        <a
                            href="#about"
                            class="border-2 border-white/30 text-white px-8 py-4 rounded-xl font-semibold hover:bg-white/10 transition-colors"
                        >
                            "Learn More"
                        </a>
                    </div>
                </div>
            </div>
        </section>

        <section id="about" class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-display font-bold text-gray-900 mb-4">
                        "Why Choose My Rehab Centre?"
                    </h2>
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                        "We combine evidence-based treatment methods with compassionate care to help you overcome addiction"
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {FEATURES.into_iter().map(|(icon, title, body)| view! {
                        <div class="text-center p-6">
                            <div class="bg-primary-100 w-16 h-16 rounded-full flex items-center justify-center mx-auto mb-4 text-2xl">
                                {icon}
                            </div>
                            <h3 class="text-xl font-semibold text-gray-900 mb-3">{title}</h3>
                            <p class="text-gray-600">{body}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>

        <section id="addiction-types" class="py-20 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-display font-bold text-gray-900 mb-4">
                        "Types of Addiction We Treat"
                    </h2>
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto mb-8">
                        "Comprehensive support for various forms of addiction with personalized treatment approaches"
                    </p>
                    <SearchInput value=search_term on_input=on_search />
                </div>

                {move || state.with(|s| {
                    let load_state = s.load_state();
                    if load_state.is_loading() {
                        view! { <LoadingSpinner message="Loading addiction types..." /> }.into_any()
                    } else if let Some(message) = load_state.error() {
                        view! {
                            <ErrorMessage
                                title="Failed to Load Content"
                                message=message.to_string()
                                on_retry=on_retry
                            />
                        }.into_any()
                    } else if s.show_no_results() {
                        view! { <NoResults /> }.into_any()
                    } else {
                        view! {
                            <div class="space-y-16">
                                {s.sections().into_iter().map(|section| view! {
                                    <CategoryBlock info=section.info addictions=section.addictions />
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                })}
            </div>
        </section>

        <section class="py-20 bg-gradient-to-r from-primary-600 to-secondary-600 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="text-3xl md:text-4xl font-display font-bold mb-6">
                    "Ready to Start Your Recovery Journey?"
                </h2>
                <p class="text-xl text-primary-100 mb-8 max-w-2xl mx-auto">
                    "Take the first step toward a healthier, addiction-free life. Our team is here to support you every step of the way."
                </p>
                <a
                    href="#addiction-types"
                    class="bg-white text-primary-600 px-8 py-4 rounded-xl font-semibold hover:bg-gray-50 transition-colors inline-flex items-center shadow-xl"
                >
                    <span class="mr-2">"♥"</span>
                    "Get Help Today"
                </a>
            </div>
        </section>
    }
}
