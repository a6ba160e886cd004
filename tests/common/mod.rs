// tests/common/mod.rs - Shared fixtures for the integration tests
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use recovery_site::web_app::error::ApiError;
use recovery_site::web_app::model::*;
use recovery_site::web_app::notify::{Notice, Notifier};
use recovery_site::web_app::service::AddictionBackend;
use recovery_site::web_app::state::filter_by_name;

pub fn summary(id: &str, name: &str, emoji: &str) -> AddictionSummary {
    AddictionSummary {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        category: None,
    }
}

/// Small catalogue: two substance, two behavioral, one emotional
pub fn sample_types() -> AddictionTypes {
    AddictionTypes {
        substance: vec![
            summary("alcohol", "Alcohol", "🍺"),
            summary("nicotine", "Nicotine", "🚬"),
        ],
        behavioral: vec![
            summary("gambling", "Gambling", "🎰"),
            summary("social-media", "Social Media", "📱"),
        ],
        emotional: vec![summary("overthinking", "Overthinking", "🌀")],
    }
}

pub fn addiction(id: &str, name: &str, category: Category) -> Addiction {
    Addiction {
        id: id.to_string(),
        name: name.to_string(),
        emoji: String::new(),
        category,
        content: AddictionContent {
            title: String::new(),
            reasons: if category == Category::Emotional {
                Vec::new()
            } else {
                vec![format!("{} harms your health.", name)]
            },
            methods: vec![format!("Cut back on {} gradually.", name)],
            benefits: vec!["More energy.".to_string(), "Better sleep.".to_string()],
        },
    }
}

/// In-memory backend that counts every call
pub struct FakeBackend {
    types: Mutex<Result<AddictionTypes, ApiError>>,
    addictions: Vec<Addiction>,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            types: Mutex::new(Ok(sample_types())),
            addictions: vec![
                addiction("alcohol", "Alcohol", Category::Substance),
                addiction("gambling", "Gambling", Category::Behavioral),
                addiction("overthinking", "Overthinking", Category::Emotional),
            ],
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        let backend = Self::new();
        backend.set_types(Err(error));
        backend
    }

    pub fn set_types(&self, result: Result<AddictionTypes, ApiError>) {
        *self.types.lock().unwrap() = result;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Identifiers and queries received, in order
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    fn record(&self, value: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(value.to_string());
    }
}

impl AddictionBackend for FakeBackend {
    async fn fetch_types(&self) -> Result<AddictionTypes, ApiError> {
        self.record("types");
        self.types.lock().unwrap().clone()
    }

    async fn fetch_addiction(&self, id: &str) -> Result<Addiction, ApiError> {
        self.record(id);
        self.addictions
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Addiction '{}' was not found", id)))
    }

    async fn fetch_search(&self, query: &str) -> Result<Vec<AddictionSummary>, ApiError> {
        self.record(query);
        let types = self.types.lock().unwrap().clone()?;
        let all: Vec<AddictionSummary> = Category::DISPLAYED
            .iter()
            .flat_map(|c| types.get(*c).to_vec())
            .collect();
        Ok(filter_by_name(&all, query).into_iter().cloned().collect())
    }
}

/// Notifier that keeps every notice for inspection
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
