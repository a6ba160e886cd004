// web_app/app.rs - Root application component
//
// Sets up meta tags, the toast store, routing and the shared page layout.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::Layout;
use crate::web_app::notify::ToastStore;
use crate::web_app::pages::{HomePage, NotFoundPage, SolutionPage};

pub const PAGE_TITLE: &str = "My Rehab Centre - Best way to live life is free from addiction";
pub const STYLESHEET_HREF: &str = "/pkg/recovery_site.css";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    // One toast queue for the whole app; the service reports failures here
    provide_context(ToastStore::new());

    view! {
        <Title text=PAGE_TITLE />
        <Meta
            name="description"
            content="Comprehensive care and support for mental health and substance abuse. Practical guides for overcoming substance, behavioral and emotional addictions."
        />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href=STYLESHEET_HREF />

        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/solution/:addiction_id") view=SolutionPage />
                </Routes>
            </Layout>
        </Router>
    }
}
