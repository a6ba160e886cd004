// web_app/components/addiction.rs - Addiction display components
//
// - AddictionCard: grid card linking to a solution page
// - CategoryBlock: one category heading plus its cards
// - TabNav / TabPanel: solution page tabs

use leptos::prelude::*;
use crate::web_app::model::{Addiction, AddictionSummary, CategoryInfo, Tab};

/// Path of the solution page for an addiction
pub fn solution_href(id: &str) -> String {
    format!("/solution/{}", id)
}

/// Card blurb: "... overcoming {lowercased name} addiction."
pub fn card_blurb(name: &str) -> String {
    format!(
        "Learn effective strategies and get professional support for overcoming {} addiction.",
        name.to_lowercase()
    )
}

/// Addiction card for the home page grid
#[component]
pub fn AddictionCard(
    addiction: AddictionSummary,
    /// Category label shown at the bottom of the card
    #[prop(into)]
    category_label: String,
) -> impl IntoView {
    let href = solution_href(&addiction.id);
    let blurb = card_blurb(&addiction.name);

    view! {
        <div class="group h-full">
            <a href=href class="block h-full">
                <div class="card group-hover:shadow-2xl group-hover:border-primary-200 h-full flex flex-col">
                    <div class="flex items-center justify-between mb-4">
                        <span class="text-3xl" role="img" aria-label=addiction.name.clone()>
                            {addiction.emoji.clone()}
                        </span>
                        <span class="text-gray-400 group-hover:text-primary-600 transition-all">"→"</span>
                    </div>

                    <h3 class="font-display font-semibold text-lg text-gray-900 mb-2 group-hover:text-primary-700 transition-colors">
                        {addiction.name.clone()}
                    </h3>

                    <p class="text-gray-600 text-sm leading-relaxed flex-grow">{blurb}</p>

                    <div class="mt-4 pt-4 border-t border-gray-100">
                        <span class="text-xs text-primary-600 font-medium uppercase tracking-wide">
                            {category_label}
                        </span>
                    </div>
                </div>
            </a>
        </div>
    }
}

/// One category section: heading, description and card grid
#[component]
pub fn CategoryBlock(
    info: CategoryInfo,
    addictions: Vec<AddictionSummary>,
) -> impl IntoView {
    let label = info.card_label();

    view! {
        <div id=info.category.id()>
            <div class="text-center mb-8">
                <div class="inline-flex items-center bg-white rounded-full px-6 py-3 shadow-lg mb-4">
                    <span class="text-3xl mr-3">{info.icon}</span>
                    <h3 class="text-2xl font-display font-bold text-gray-900">{info.title}</h3>
                </div>
                <p class="text-gray-600 max-w-2xl mx-auto">{info.description}</p>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                {addictions.into_iter().map(|addiction| {
                    let label = label.clone();
                    view! { <AddictionCard addiction=addiction category_label=label /> }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Tab buttons for the solution page
#[component]
pub fn TabNav(
    tabs: &'static [Tab],
    active: Signal<Option<Tab>>,
    on_select: Callback<Tab>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-center mb-12 bg-white rounded-xl p-2 shadow-lg" role="tablist">
            {tabs.iter().copied().map(|tab| {
                let is_active = move || active.get() == Some(tab);
                view! {
                    <button
                        type="button"
                        role="tab"
                        aria-selected=move || is_active().to_string()
                        class=move || if is_active() {
                            "flex items-center space-x-2 px-6 py-3 rounded-lg font-medium transition-all bg-primary-600 text-white shadow-lg"
                        } else {
                            "flex items-center space-x-2 px-6 py-3 rounded-lg font-medium transition-all text-gray-600 hover:text-primary-600 hover:bg-primary-50"
                        }
                        on:click=move |_| on_select.run(tab)
                    >
                        <span>{tab.icon()}</span>
                        <span>{tab.label()}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Heading above a tab's entries
pub fn tab_heading(tab: Tab, name: &str) -> String {
    match tab {
        Tab::Reasons => format!("1. Strong reasons to leave {} addiction", name),
        Tab::Methods => format!("1. How to overcome {} addiction", name),
        Tab::Benefits => format!("Benefits of Quitting {}", name),
    }
}

/// Content of the active tab
///
/// The reasons panel renders nothing when there are no reasons.
#[component]
pub fn TabPanel(addiction: Addiction, tab: Tab) -> impl IntoView {
    let entries = addiction.entries(tab).to_vec();
    let heading = tab_heading(tab, &addiction.name);
    let title = addiction.display_title();

    match tab {
        Tab::Reasons if entries.is_empty() => ().into_any(),
        Tab::Reasons | Tab::Methods => view! {
            <div class="max-w-4xl mx-auto">
                <div class="bg-white rounded-xl shadow-lg p-8 md:p-12">
                    <h2 class="text-3xl md:text-4xl font-display font-bold text-gray-900 mb-8 text-center">
                        {title}
                    </h2>
                    <div class="border-t border-gray-200 pt-8">
                        <h3 class="text-2xl font-bold text-gray-900 mb-6">{heading}</h3>
                        <div class="space-y-6">
                            {entries.into_iter().map(|entry| view! {
                                <div class="text-gray-700 leading-relaxed text-base md:text-lg">
                                    <p>{entry}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        }.into_any(),
        Tab::Benefits => view! {
            <div class="card max-w-4xl mx-auto">
                <h2 class="text-2xl font-display font-bold text-gray-900 mb-6">{heading}</h2>
                <div class="space-y-4">
                    {entries.into_iter().map(|benefit| view! {
                        <div class="flex items-start space-x-4 p-4 bg-green-50 border border-green-100 rounded-lg">
                            <div class="bg-green-100 p-2 rounded-full mt-1 flex-shrink-0 text-green-600">"✓"</div>
                            <p class="text-gray-800 font-medium leading-relaxed">{benefit}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_href() {
        assert_eq!(solution_href("social-media"), "/solution/social-media");
    }

    #[test]
    fn test_card_blurb_lowercases_name() {
        assert!(card_blurb("Social Media").ends_with("overcoming social media addiction."));
    }

    #[test]
    fn test_tab_headings() {
        assert_eq!(tab_heading(Tab::Reasons, "Alcohol"), "1. Strong reasons to leave Alcohol addiction");
        assert_eq!(tab_heading(Tab::Methods, "Alcohol"), "1. How to overcome Alcohol addiction");
        assert_eq!(tab_heading(Tab::Benefits, "Alcohol"), "Benefits of Quitting Alcohol");
    }
}
