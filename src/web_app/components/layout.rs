// web_app/components/layout.rs - Site chrome
//
// Header, footer, the About/Contact modals and the Layout shell that
// wraps every page with them.

use chrono::Datelike;
use leptos::prelude::*;

use super::common::{Button, ModalWrapper, ToastHost};

pub const SITE_NAME: &str = "My Rehab Centre";
pub const TAGLINE: &str = "Best way to live life is free from addiction";
pub const CONTACT_EMAIL: &str = "myrehabcenter1@gmail.com";

/// Which static modal is open, if any
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenModal {
    About,
    Contact,
}

/// Top navigation bar
///
/// The mobile menu closes after any choice.
#[component]
pub fn Header(on_about: Callback<()>, on_contact: Callback<()>) -> impl IntoView {
    let menu_open = RwSignal::new(false);

    let about = move |_| {
        menu_open.set(false);
        on_about.run(());
    };
    let contact = move |_| {
        menu_open.set(false);
        on_contact.run(());
    };

    let link_class = "text-gray-700 hover:text-primary-600 font-medium transition-colors";

    view! {
        <header class="bg-white/80 backdrop-blur-md border-b border-gray-100 sticky top-0 z-40">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="flex items-center space-x-2 group">
                        <div class="bg-gradient-to-r from-primary-500 to-secondary-500 p-2 rounded-lg text-white">"♥"</div>
                        <span class="font-display font-bold text-xl text-gray-900 hidden sm:block">{SITE_NAME}</span>
                    </a>

                    <nav class="hidden md:flex items-center space-x-8">
                        <a href="/" class=link_class>"Home"</a>
                        <button type="button" class=link_class on:click=about>"About Us"</button>
                        <button type="button" class=link_class on:click=contact>"Contact"</button>
                    </nav>

                    <button
                        type="button"
                        class="md:hidden p-2 rounded-lg hover:bg-gray-100 transition-colors"
                        aria-label="Toggle menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>

                <Show when=move || menu_open.get()>
                    <div class="md:hidden py-4 border-t border-gray-100">
                        <div class="flex flex-col space-y-4">
                            <a href="/" class=format!("{} py-2", link_class) on:click=move |_| menu_open.set(false)>
                                "Home"
                            </a>
                            <button type="button" class=format!("{} text-left py-2", link_class) on:click=about>
                                "About Us"
                            </button>
                            <button type="button" class=format!("{} text-left py-2", link_class) on:click=contact>
                                "Contact"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </header>
    }
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, SITE_NAME)
}

/// Page footer
#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="bg-gray-900 text-white mt-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div class="space-y-4">
                        <span class="font-display font-bold text-xl">{SITE_NAME}</span>
                        <p class="text-gray-400 text-sm max-w-md leading-relaxed">
                            "Comprehensive Care and Support for Mental Health and Substance Abuse. "
                            "Your trusted partner in overcoming addiction and building a healthier future."
                        </p>
                    </div>

                    <div class="space-y-4">
                        <h3 class="font-semibold text-lg">"Quick Links"</h3>
                        <ul class="space-y-2 text-gray-400">
                            <li><a href="/#substance" class="hover:text-white transition-colors">"Substance Addictions"</a></li>
                            <li><a href="/#behavioral" class="hover:text-white transition-colors">"Behavioral Addictions"</a></li>
                            <li><a href="/#emotional" class="hover:text-white transition-colors">"Emotional Addictions"</a></li>
                        </ul>
                    </div>

                    <div class="space-y-4">
                        <h3 class="font-semibold text-lg">"Contact Information"</h3>
                        <div class="space-y-3 text-gray-400 text-sm">
                            <p>"✉ " {CONTACT_EMAIL}</p>
                            <p>"☎ Available 24/7 for support"</p>
                            <p>"⌖ Serving globally online"</p>
                        </div>
                    </div>
                </div>

                <div class="border-t border-gray-800 mt-8 pt-8 text-center text-gray-400">
                    <p class="text-sm">{copyright_line(year)}</p>
                    <p class="text-xs mt-2">{TAGLINE} ". Seek professional help when needed."</p>
                </div>
            </div>
        </footer>
    }
}

/// About us modal (static content)
#[component]
pub fn AboutModal(on_close: Callback<()>) -> impl IntoView {
    let pillars = [
        ("Compassionate Care", "We provide empathetic support with understanding and without judgment, recognizing that every journey is unique."),
        ("Evidence-Based Methods", "Our strategies are grounded in proven, scientific approaches to addiction recovery and mental health support."),
        ("Community Support", "Join a supportive community where you can share experiences and find encouragement from others on similar journeys."),
        ("Professional Expertise", "Access to professional resources and guidance from experienced addiction recovery specialists."),
    ];

    view! {
        <ModalWrapper title="About My Rehab Centre" on_close=on_close>
            <div class="space-y-6">
                <div class="bg-gradient-to-r from-primary-50 to-secondary-50 p-6 rounded-xl">
                    <p class="text-gray-700 leading-relaxed">
                        "Welcome to " <strong>{SITE_NAME}</strong>
                        ", your trusted partner in overcoming addiction. We understand the many forms addiction "
                        "can take and how challenging it can be to break free. Our mission is to provide compassionate "
                        "support, expert guidance, and practical solutions tailored to your recovery journey."
                    </p>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                    {pillars.into_iter().map(|(title, body)| view! {
                        <div>
                            <h3 class="font-semibold text-gray-900 mb-2">{title}</h3>
                            <p class="text-gray-600 text-sm leading-relaxed">{body}</p>
                        </div>
                    }).collect_view()}
                </div>

                <div class="bg-gray-50 p-6 rounded-xl">
                    <h3 class="font-semibold text-gray-900 mb-3">"Our Commitment"</h3>
                    <p class="text-gray-700 leading-relaxed">
                        "With evidence-based strategies and a supportive community, we help you regain control, "
                        "rebuild your life, and find hope for lasting change. You don't have to face addiction "
                        "alone. Take the first step toward a healthier, happier future today."
                    </p>
                </div>
            </div>

            <div class="mt-8 flex justify-end">
                <Button on_click=on_close>
                    "Get Started"
                </Button>
            </div>
        </ModalWrapper>
    }
}

/// Contact modal (static content)
#[component]
pub fn ContactModal(on_close: Callback<()>) -> impl IntoView {
    let channels = [
        ("Email Support", CONTACT_EMAIL, "Send us your questions anytime"),
        ("24/7 Support", "Always Available", "We're here when you need us most"),
        ("Online Services", "Global Reach", "Serving clients worldwide through digital platforms"),
    ];

    view! {
        <ModalWrapper title="Contact Us" on_close=on_close>
            <div class="space-y-6">
                <div class="bg-gradient-to-r from-primary-50 to-secondary-50 p-6 rounded-xl">
                    <p class="text-gray-700 leading-relaxed">
                        "We're here to support you on your recovery journey. Reach out to us for any queries, "
                        "support, or guidance you need. Our team is committed to helping you find the path to healing."
                    </p>
                </div>

                <div class="grid grid-cols-1 gap-6">
                    {channels.into_iter().map(|(title, highlight, detail)| view! {
                        <div class="p-4 bg-white border border-gray-200 rounded-lg">
                            <h3 class="font-semibold text-gray-900">{title}</h3>
                            <p class="text-primary-600 font-medium break-all">{highlight}</p>
                            <p class="text-gray-600 text-sm">{detail}</p>
                        </div>
                    }).collect_view()}
                </div>

                <div class="bg-yellow-50 border border-yellow-200 p-6 rounded-xl">
                    <h3 class="font-semibold text-yellow-800 mb-2">"Crisis Support"</h3>
                    <p class="text-yellow-700 text-sm leading-relaxed">
                        "If you're experiencing a mental health crisis, please contact your local emergency services "
                        "or a crisis helpline immediately. Your safety is our top priority."
                    </p>
                </div>
            </div>

            <div class="mt-8 flex justify-end">
                <Button on_click=on_close>
                    "Start Your Journey"
                </Button>
            </div>
        </ModalWrapper>
    }
}

/// Common shell: header, page content, footer, modals and toasts
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let open_modal = RwSignal::new(None::<OpenModal>);
    let close = Callback::new(move |()| open_modal.set(None));

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-green-50">
            <Header
                on_about=Callback::new(move |()| open_modal.set(Some(OpenModal::About)))
                on_contact=Callback::new(move |()| open_modal.set(Some(OpenModal::Contact)))
            />

            <main class="relative">{children()}</main>

            <Footer />

            {move || match open_modal.get() {
                Some(OpenModal::About) => view! { <AboutModal on_close=close /> }.into_any(),
                Some(OpenModal::Contact) => view! { <ContactModal on_close=close /> }.into_any(),
                None => ().into_any(),
            }}

            <ToastHost />
        </div>
    }
}
