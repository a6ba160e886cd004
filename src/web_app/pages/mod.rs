// web_app/pages/mod.rs - Page components module
//
// - HomePage: categories of addiction with a search filter
// - SolutionPage: tabbed recovery guide for one addiction
// - NotFoundPage: router fallback

pub mod home;
pub mod not_found;
pub mod solution;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use solution::SolutionPage;

/// Step back in browser history. Does nothing on the server.
pub fn go_back() {
    #[cfg(feature = "hydrate")]
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            if let Err(e) = history.back() {
                tracing::warn!("history.back() failed: {:?}", e);
            }
        }
    }
}
