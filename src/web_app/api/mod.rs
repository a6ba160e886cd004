// web_app/api/mod.rs - Server-side access to the backend API
//
// Only compiled for SSR: the browser never talks to the backend directly,
// it calls the server functions in server_fns.rs instead.

pub mod client;

pub use client::{get_client, init_client, set_test_client, ApiClient};
