// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the backend's addiction API and are used on both
// sides of the server function boundary.

use serde::{Deserialize, Serialize};

/// Addiction category
///
/// Decides which content tabs a solution page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Substance,
    Behavioral,
    Emotional,
    /// Anything the backend sends that we don't know about
    #[serde(other)]
    Other,
}

impl Category {
    /// The three categories the home page renders, in display order
    pub const DISPLAYED: [Category; 3] = [
        Category::Substance,
        Category::Behavioral,
        Category::Emotional,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Substance => "substance",
            Category::Behavioral => "behavioral",
            Category::Emotional => "emotional",
            Category::Other => "other",
        }
    }

    /// Static presentation data for the category
    ///
    /// Unknown categories borrow the substance entry, matching the
    /// hero label fallback.
    pub fn info(&self) -> &'static CategoryInfo {
        match self {
            Category::Behavioral => &CATEGORIES[1],
            Category::Emotional => &CATEGORIES[2],
            Category::Substance | Category::Other => &CATEGORIES[0],
        }
    }

    /// Label used in the solution page hero badge
    pub fn hero_label(&self) -> &'static str {
        match self {
            Category::Emotional => "Emotional & Thought-Pattern",
            Category::Behavioral => "Behavioral",
            Category::Substance | Category::Other => "Substance",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Display data for one home page category section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryInfo {
    pub category: Category,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

impl CategoryInfo {
    /// Short label printed at the bottom of an addiction card
    ///
    /// "Substance Addictions" becomes "Substance addiction".
    pub fn card_label(&self) -> String {
        let first = self.title.split_whitespace().next().unwrap_or_default();
        format!("{} addiction", first)
    }
}

pub const CATEGORIES: [CategoryInfo; 3] = [
    CategoryInfo {
        category: Category::Substance,
        title: "Substance Addictions",
        icon: "🧪",
        description: "Physical dependencies on substances like drugs, alcohol, and nicotine",
    },
    CategoryInfo {
        category: Category::Behavioral,
        title: "Behavioral Addictions",
        icon: "📱",
        description: "Compulsive behaviors affecting daily life and relationships",
    },
    CategoryInfo {
        category: Category::Emotional,
        title: "Emotional & Thought-Pattern Addictions",
        icon: "🧠",
        description: "Mental patterns that create cycles of negative thinking and emotions",
    },
];

/// Lightweight listing record returned by the types and search endpoints
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddictionSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub category: Option<Category>,
}

/// Long-form content behind the solution page tabs
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddictionContent {
    #[serde(default)]
    pub title: String,
    /// Absent for emotional addictions
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

/// Full addiction record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Addiction {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    pub category: Category,
    #[serde(default)]
    pub content: AddictionContent,
}

pub const FALLBACK_EMOJI: &str = "💊";

impl Addiction {
    /// Page heading: the content title, or "{name} Recovery Guide"
    pub fn display_title(&self) -> String {
        if self.content.title.trim().is_empty() {
            format!("{} Recovery Guide", self.name)
        } else {
            self.content.title.clone()
        }
    }

    pub fn display_emoji(&self) -> &str {
        if self.emoji.is_empty() {
            FALLBACK_EMOJI
        } else {
            &self.emoji
        }
    }

    pub fn tabs(&self) -> &'static [Tab] {
        tabs_for(self.category)
    }

    pub fn default_tab(&self) -> Tab {
        default_tab(self.category)
    }

    /// Lines shown under a tab
    pub fn entries(&self, tab: Tab) -> &[String] {
        match tab {
            Tab::Reasons => &self.content.reasons,
            Tab::Methods => &self.content.methods,
            Tab::Benefits => &self.content.benefits,
        }
    }
}

/// Addiction listings keyed by category
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddictionTypes {
    #[serde(default)]
    pub substance: Vec<AddictionSummary>,
    #[serde(default)]
    pub behavioral: Vec<AddictionSummary>,
    #[serde(default)]
    pub emotional: Vec<AddictionSummary>,
}

impl AddictionTypes {
    pub fn get(&self, category: Category) -> &[AddictionSummary] {
        match category {
            Category::Substance => &self.substance,
            Category::Behavioral => &self.behavioral,
            Category::Emotional => &self.emotional,
            Category::Other => &[],
        }
    }

    pub fn total(&self) -> usize {
        self.substance.len() + self.behavioral.len() + self.emotional.len()
    }
}

/// Solution page content tab
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Reasons,
    Methods,
    Benefits,
}

impl Tab {
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Reasons => "reasons",
            Tab::Methods => "methods",
            Tab::Benefits => "benefits",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Reasons => "Why Quit",
            Tab::Methods => "How to Quit",
            Tab::Benefits => "Benefits",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Reasons => "🎯",
            Tab::Methods => "❤",
            Tab::Benefits => "🏆",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

const EMOTIONAL_TABS: [Tab; 2] = [Tab::Methods, Tab::Benefits];
const STANDARD_TABS: [Tab; 3] = [Tab::Reasons, Tab::Methods, Tab::Benefits];

/// Tabs shown for a category, in navigation order
pub fn tabs_for(category: Category) -> &'static [Tab] {
    match category {
        Category::Emotional => &EMOTIONAL_TABS,
        _ => &STANDARD_TABS,
    }
}

/// Tab that is active right after a successful load
pub fn default_tab(category: Category) -> Tab {
    match category {
        Category::Emotional => Tab::Methods,
        _ => Tab::Reasons,
    }
}

/// Backend responses carry the payload at the top level or under `data`
///
/// Returns the payload itself; a `null` payload stays `null` so callers can
/// tell "no such record" apart from a decode failure. A `success` wrapper
/// without `data` carries no payload and also yields `null`.
pub fn extract_payload(body: serde_json::Value) -> serde_json::Value {
    match body {
        serde_json::Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or_default()
        }
        serde_json::Value::Object(map) if map.contains_key("success") => serde_json::Value::Null,
        other => other,
    }
}

/// Error body sent by the backend on non-2xx responses
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_lowercase() {
        let c: Category = serde_json::from_str("\"emotional\"").unwrap();
        assert_eq!(c, Category::Emotional);
        assert_eq!(serde_json::to_string(&Category::Behavioral).unwrap(), "\"behavioral\"");
    }

    #[test]
    fn test_unknown_category_decodes_as_other() {
        let c: Category = serde_json::from_str("\"spiritual\"").unwrap();
        assert_eq!(c, Category::Other);
        assert_eq!(tabs_for(c), &[Tab::Reasons, Tab::Methods, Tab::Benefits]);
        assert_eq!(c.hero_label(), "Substance");
    }

    #[test]
    fn test_card_label() {
        assert_eq!(CATEGORIES[0].card_label(), "Substance addiction");
        assert_eq!(CATEGORIES[2].card_label(), "Emotional addiction");
    }

    #[test]
    fn test_category_info_order() {
        let ids: Vec<_> = CATEGORIES.iter().map(|c| c.category.id()).collect();
        assert_eq!(ids, ["substance", "behavioral", "emotional"]);
        for category in Category::DISPLAYED {
            assert_eq!(category.info().category, category);
        }
    }

    #[test]
    fn test_display_title_fallback() {
        let mut addiction = Addiction {
            id: "alcohol".to_string(),
            name: "Alcohol".to_string(),
            emoji: String::new(),
            category: Category::Substance,
            content: AddictionContent::default(),
        };
        assert_eq!(addiction.display_title(), "Alcohol Recovery Guide");
        assert_eq!(addiction.display_emoji(), FALLBACK_EMOJI);

        addiction.content.title = "Breaking Free From Alcohol".to_string();
        addiction.emoji = "🍺".to_string();
        assert_eq!(addiction.display_title(), "Breaking Free From Alcohol");
        assert_eq!(addiction.display_emoji(), "🍺");
    }

    #[test]
    fn test_payload_wrapped_and_bare() {
        let wrapped = serde_json::json!({"data": {"substance": [{"id": "a", "name": "Alcohol"}]}});
        let bare = serde_json::json!({"substance": [{"id": "a", "name": "Alcohol"}]});
        let wrapped: AddictionTypes = serde_json::from_value(extract_payload(wrapped)).unwrap();
        let bare: AddictionTypes = serde_json::from_value(extract_payload(bare)).unwrap();
        assert_eq!(wrapped, bare);
        assert_eq!(wrapped.substance[0].name, "Alcohol");
    }

    #[test]
    fn test_payload_null_data() {
        let payload = extract_payload(serde_json::json!({"success": true, "data": null}));
        assert!(payload.is_null());
    }

    #[test]
    fn test_payload_wrapper_without_data() {
        assert!(extract_payload(serde_json::json!({"success": true})).is_null());
    }

    #[test]
    fn test_types_get_other_is_empty() {
        let types = AddictionTypes::default();
        assert!(types.get(Category::Other).is_empty());
        assert_eq!(types.total(), 0);
    }
}
