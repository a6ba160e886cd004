// web_app/pages/not_found.rs - Router fallback

use leptos::prelude::*;

use super::go_back;
use crate::web_app::components::SecondaryButton;

/// 404 page for unknown routes
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_actix::ResponseOptions>() {
        resp.set_status(actix_web::http::StatusCode::NOT_FOUND);
    }

    view! {
        <div class="min-h-[60vh] flex items-center justify-center px-4">
            <div class="text-center">
                <h1 class="text-6xl font-display font-bold text-primary-600 mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-gray-900 mb-4">"Page Not Found"</h2>
                <p class="text-gray-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist. It might have been moved or deleted."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a href="/" class="btn-primary inline-flex items-center">
                        <span class="mr-2">"⌂"</span>
                        "Go Home"
                    </a>
                    <SecondaryButton on_click=Callback::new(move |_| go_back())>
                        <span class="mr-2">"←"</span>
                        "Go Back"
                    </SecondaryButton>
                </div>
            </div>
        </div>
    }
}
