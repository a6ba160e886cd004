// web_app/state/mod.rs - Page controllers
//
// Plain state machines behind the home and solution pages. Pages keep one
// of these in a signal and feed it results; everything here is testable
// without a Leptos runtime.
//
// Each load hands out a Ticket. A result is applied only while its ticket
// is the newest one, so a slow response for a page the user already left
// cannot overwrite the current page.

use crate::web_app::error::ApiError;
use crate::web_app::model::{
    Addiction, AddictionSummary, AddictionTypes, Category, CategoryInfo, Tab, CATEGORIES,
};

pub const HOME_LOAD_ERROR: &str = "Failed to load addiction types. Please try again.";
pub const SOLUTION_LOAD_ERROR: &str = "Failed to load addiction information. Please try again.";

/// Identifies one in-flight request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic request generation counter
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestTracker {
    generation: u64,
}

impl RequestTracker {
    /// Start a new request, superseding every earlier ticket
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}

/// Tri-state shared by both pages
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Case-insensitive substring match on addiction names
///
/// An empty term keeps everything.
pub fn filter_by_name<'a>(addictions: &'a [AddictionSummary], term: &str) -> Vec<&'a AddictionSummary> {
    if term.is_empty() {
        return addictions.iter().collect();
    }
    let needle = term.to_lowercase();
    addictions
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&needle))
        .collect()
}

/// One visible home page section after filtering
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySection {
    pub info: CategoryInfo,
    pub addictions: Vec<AddictionSummary>,
}

/// Home page: list of categories with a search filter
#[derive(Clone, Debug, PartialEq)]
pub struct HomeState {
    load: LoadState<AddictionTypes>,
    search_term: String,
    tracker: RequestTracker,
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeState {
    pub fn new() -> Self {
        Self {
            load: LoadState::Loading,
            search_term: String::new(),
            tracker: RequestTracker::default(),
        }
    }

    pub fn load_state(&self) -> &LoadState<AddictionTypes> {
        &self.load
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Enter Loading and return the ticket for the new request
    pub fn begin_load(&mut self) -> Ticket {
        self.load = LoadState::Loading;
        self.tracker.begin()
    }

    /// Re-issue the load after a failure
    ///
    /// Returns None outside the error state, so a stray click never
    /// starts a second request.
    pub fn retry(&mut self) -> Option<Ticket> {
        if self.load.error().is_some() {
            Some(self.begin_load())
        } else {
            None
        }
    }

    /// Apply a result. Returns false if the ticket was stale.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<AddictionTypes, ApiError>) -> bool {
        if !self.tracker.is_current(ticket) {
            tracing::debug!("Dropping stale addiction types response");
            return false;
        }
        self.load = match result {
            Ok(types) => LoadState::Ready(types),
            Err(e) => {
                tracing::error!("Error loading addiction types: {}", e);
                LoadState::Error(HOME_LOAD_ERROR.to_string())
            }
        };
        true
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    fn has_search(&self) -> bool {
        !self.search_term.is_empty()
    }

    /// Sections to render, in category order
    ///
    /// Empty sections are hidden only while a search term is active.
    pub fn sections(&self) -> Vec<CategorySection> {
        let Some(types) = self.load.ready() else {
            return Vec::new();
        };
        CATEGORIES
            .iter()
            .filter_map(|info| {
                let filtered = filter_by_name(types.get(info.category), &self.search_term);
                if filtered.is_empty() && self.has_search() {
                    return None;
                }
                Some(CategorySection {
                    info: *info,
                    addictions: filtered.into_iter().cloned().collect(),
                })
            })
            .collect()
    }

    /// True when a search is active and nothing in any category matches
    pub fn show_no_results(&self) -> bool {
        let Some(types) = self.load.ready() else {
            return false;
        };
        self.has_search()
            && Category::DISPLAYED
                .iter()
                .all(|c| filter_by_name(types.get(*c), &self.search_term).is_empty())
    }
}

/// What the solution page renders
#[derive(Clone, Debug, PartialEq)]
pub enum SolutionView {
    Loading,
    Error(String),
    NotFound,
    Ready(Addiction),
}

/// Solution page: one addiction with tabbed content
#[derive(Clone, Debug, PartialEq)]
pub struct SolutionState {
    addiction_id: String,
    view: SolutionView,
    active_tab: Option<Tab>,
    tracker: RequestTracker,
}

impl SolutionState {
    pub fn new(addiction_id: impl Into<String>) -> Self {
        Self {
            addiction_id: addiction_id.into(),
            view: SolutionView::Loading,
            active_tab: None,
            tracker: RequestTracker::default(),
        }
    }

    pub fn addiction_id(&self) -> &str {
        &self.addiction_id
    }

    pub fn view(&self) -> &SolutionView {
        &self.view
    }

    pub fn active_tab(&self) -> Option<Tab> {
        self.active_tab
    }

    pub fn addiction(&self) -> Option<&Addiction> {
        match &self.view {
            SolutionView::Ready(addiction) => Some(addiction),
            _ => None,
        }
    }

    /// Tabs for the loaded addiction; empty until loaded
    pub fn tabs(&self) -> &'static [Tab] {
        self.addiction().map(|a| a.tabs()).unwrap_or(&[])
    }

    /// Route parameter changed (or first mount): reset and start loading
    pub fn navigate(&mut self, addiction_id: impl Into<String>) -> Ticket {
        self.addiction_id = addiction_id.into();
        self.begin_load()
    }

    fn begin_load(&mut self) -> Ticket {
        self.view = SolutionView::Loading;
        self.active_tab = None;
        self.tracker.begin()
    }

    /// Re-issue the fetch for the current identifier
    ///
    /// Only the error state offers a retry; not-found does not.
    pub fn retry(&mut self) -> Option<Ticket> {
        if matches!(self.view, SolutionView::Error(_)) {
            Some(self.begin_load())
        } else {
            None
        }
    }

    /// Apply a result. Returns false if the ticket was stale.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<Addiction, ApiError>) -> bool {
        if !self.tracker.is_current(ticket) {
            tracing::debug!("Dropping stale response for a previous addiction");
            return false;
        }
        match result {
            Ok(addiction) => {
                self.active_tab = Some(addiction.default_tab());
                self.view = SolutionView::Ready(addiction);
            }
            Err(e) if e.is_not_found() => {
                self.view = SolutionView::NotFound;
            }
            Err(e) => {
                tracing::error!("Error loading addiction {}: {}", self.addiction_id, e);
                self.view = SolutionView::Error(SOLUTION_LOAD_ERROR.to_string());
            }
        }
        true
    }

    /// Switch tabs. Ignores tabs the current addiction doesn't have.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.tabs().contains(&tab) {
            self.active_tab = Some(tab);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, name: &str) -> AddictionSummary {
        AddictionSummary {
            id: id.to_string(),
            name: name.to_string(),
            emoji: String::new(),
            category: None,
        }
    }

    #[test]
    fn test_tracker_supersedes_old_tickets() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_filter_by_name_case_insensitive() {
        let list = vec![summary("gambling", "Gambling"), summary("alcohol", "Alcohol")];
        let found: Vec<_> = filter_by_name(&list, "GAM").iter().map(|a| a.id.as_str()).collect();
        assert_eq!(found, ["gambling"]);
        assert_eq!(filter_by_name(&list, "").len(), 2);
    }

    #[test]
    fn test_load_state_accessors() {
        let state: LoadState<u8> = LoadState::Error("nope".into());
        assert_eq!(state.error(), Some("nope"));
        assert!(state.ready().is_none());
        assert!(LoadState::<u8>::Loading.is_loading());
    }

    #[test]
    fn test_home_sections_empty_until_ready() {
        let home = HomeState::new();
        assert!(home.sections().is_empty());
        assert!(!home.show_no_results());
    }

    #[test]
    fn test_solution_tabs_empty_while_loading() {
        let state = SolutionState::new("alcohol");
        assert!(state.tabs().is_empty());
        assert_eq!(state.active_tab(), None);
    }
}
