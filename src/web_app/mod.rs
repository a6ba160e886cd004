// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - error.rs, notify.rs: Error taxonomy and failure notifications
// - service.rs: Addiction data service over a pluggable backend
// - state/: Home and solution page state machines
// - config.rs, api/: Site configuration and backend HTTP client (SSR only)
// - server_fns.rs: Server function declarations (both client and server)
// - components/, pages/, app.rs: UI (both SSR and hydrate)

pub mod error;
pub mod model;
pub mod notify;
pub mod service;
pub mod state;

cfg_if::cfg_if! {
    if #[cfg(feature = "ssr")] {
        pub mod api;
        pub mod config;
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(feature = "ssr", feature = "hydrate"))] {
        // The #[server] macro generates client stubs that call the server via HTTP
        pub mod server_fns;
        pub mod components;
        pub mod pages;
        pub mod app;

        pub use app::App;
    }
}
