//! Home page component
//!
//! The single-page marketing site for DebreTech featuring:
//! - SEO meta tags for search engine optimization
//! - Hero section with calls to action scrolling to the page sections
//! - Services section with priced offering cards
//! - About section explaining why to pick the company
//! - Contact section with the validated enquiry form
//! - Footer, floating chat widget and scroll-to-top button
//! - Scroll-reveal styles and script plus load-time reporting

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::chat_widget::ChatbotWidget;
use crate::ui::contact_form::ContactSection;
use crate::ui::nav::{Logo, SiteHeader};
use crate::ui::perf::LoadMetrics;
use crate::ui::reveal::{RevealScript, RevealStyles};
use crate::ui::scroll::{ScrollToTopButton, scroll_to_section};

/// Home page with the full single-page site
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        // SEO Meta Tags
        <SeoMeta />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <SiteHeader />

            // Hero Section
            <section id="home" class="min-h-screen flex items-center justify-center relative pt-16">
                <div class="text-center px-4 max-w-4xl mx-auto">
                    <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold text-theme-primary mb-6 tracking-tight">
                        "DebreTech"
                    </h1>
                    <p class="text-xl sm:text-2xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed">
                        "AI chatbotok, automatizálás és megbízható IT háttér vállalkozásoknak. Helyi szakértelem Debrecenből, országos lefedettséggel."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <button
                            class="px-8 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-semibold rounded-xl
                                   shadow-lg transition-all duration-200 hover:-translate-y-0.5"
                            on:click=move |_| scroll_to_section("contact")
                            aria-label="Ugrás a kapcsolati űrlaphoz"
                        >
                            "Kérjen Ajánlatot"
                        </button>
                        <button
                            class="px-8 py-3 border-2 border-theme hover:border-accent-primary text-theme-primary font-semibold
                                   rounded-xl transition-colors"
                            on:click=move |_| scroll_to_section("services")
                            aria-label="Ugrás a szolgáltatásokhoz"
                        >
                            "Szolgáltatásaink"
                        </button>
                    </div>

                    // Scroll indicator
                    <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce text-theme-tertiary" aria-hidden="true">
                        "↓"
                    </div>
                </div>

                // Background decoration
                <div class="absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
                    <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-accent-primary/5 rounded-full blur-3xl"></div>
                    <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-blue-500/5 rounded-full blur-3xl"></div>
                </div>
            </section>

            // Services Section
            <section id="services" class="py-20 px-4 bg-theme-secondary/10">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16 reveal-on-scroll">
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "Szolgáltatásaink"
                        </h2>
                        <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                            "Átlátható havidíjas csomagok az automatizálástól a teljes IT háttérig."
                        </p>
                    </div>

                    <div class="grid sm:grid-cols-2 gap-8 max-w-4xl mx-auto">
                        <ServiceCard
                            glyph="🤖"
                            title="AI Chatbot & Automatizálás"
                            description="Ügyfélszolgálat, lead gyűjtés és üzleti folyamatok automatizálása Make.com alapú workflow-kkal."
                            price="25.000 Ft"
                        />
                        <ServiceCard
                            glyph="💻"
                            title="IT Rendszerintegráció & Support"
                            description="Windows telepítés, PC karbantartás, hálózat kiépítés és folyamatos IT támogatás vállalkozásoknak."
                            price="15.000 Ft"
                        />
                        <ServiceCard
                            glyph="⭐"
                            title="Online Jelenlét & Review Management"
                            description="Google és Facebook értékelések kezelése, SEO optimalizálás és digitális marketing megoldások."
                            price="10.000 Ft"
                        />
                        <ServiceCard
                            glyph="📅"
                            title="Időpontfoglalási Rendszerek"
                            description="Calendly és SimplyBook integráció, webhook automatizálás, CRM kapcsolatok és értesítések."
                            price="8.000 Ft"
                        />
                    </div>

                    <p class="text-center text-theme-tertiary text-sm mt-8 reveal-on-scroll">
                        "Kombinált csomagok 20% kedvezménnyel!"
                    </p>
                </div>
            </section>

            // About Section
            <section id="about" class="py-20 px-4">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16 reveal-on-scroll">
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "Miért a DebreTech?"
                        </h2>
                        <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                            "Egy partner az összes digitális megoldáshoz, a bevezetéstől a napi üzemeltetésig."
                        </p>
                    </div>

                    <div class="grid md:grid-cols-3 gap-8">
                        <AboutCard
                            glyph="🏢"
                            title="Helyi szakértelem"
                            description="Debrecenben székelünk, de az egész országban dolgozunk. Személyes kapcsolat, gyors reakcióidő."
                        />
                        <AboutCard
                            glyph="🔧"
                            title="Minden egy kézből"
                            description="Az AI automatizálástól az IT infrastruktúráig egyetlen partnerrel dolgozik, nem öt különbözővel."
                        />
                        <AboutCard
                            glyph="💬"
                            title="Folyamatos támogatás"
                            description="Kérdés esetén hívható csapat és chatbot, amely a hét minden napján azonnal válaszol."
                        />
                    </div>
                </div>
            </section>

            // Contact Section
            <ContactSection />

            <Footer />

            // Floating widgets
            <ScrollToTopButton />
            <ChatbotWidget />
        </div>

        // Scroll-reveal styles and behavior
        <RevealStyles />
        <RevealScript />

        // Load-time reporting
        <LoadMetrics />
    }
}

/// Offering card with a monthly price tag
#[component]
fn ServiceCard(
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
    price: &'static str,
) -> impl IntoView {
    view! {
        <div class="reveal-on-scroll bg-theme-primary p-6 rounded-xl border border-theme hover:border-accent-primary/50
                    transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
            <div class="w-12 h-12 rounded-lg bg-accent-primary/10 flex items-center justify-center mb-4 text-2xl">
                <span aria-hidden="true">{glyph}</span>
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{title}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed mb-4">{description}</p>
            <div class="flex items-baseline gap-1">
                <span class="text-2xl font-bold text-theme-primary">{price}</span>
                <span class="text-theme-secondary text-sm">"/hó"</span>
            </div>
        </div>
    }
}

#[component]
fn AboutCard(
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="reveal-on-scroll bg-theme-primary p-6 rounded-xl border border-theme hover:border-accent-primary/50
                    transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
            <div class="w-12 h-12 rounded-lg bg-accent-primary/10 flex items-center justify-center mb-4 text-2xl">
                <span aria-hidden="true">{glyph}</span>
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{title}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed">{description}</p>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        // Page title
        <Title text="DebreTech - AI és IT Megoldások Debrecenben" />

        // Basic meta tags
        <Meta name="description" content="AI chatbotok, workflow automatizálás, IT rendszerintegráció és időpontfoglalási rendszerek vállalkozásoknak. Debreceni székhely, országos lefedettség." />
        <Meta name="keywords" content="AI chatbot, automatizálás, IT support, rendszerintegráció, review management, időpontfoglalás, Debrecen" />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://debretech.hu/" />
        <Meta property="og:title" content="DebreTech - AI és IT Megoldások Debrecenben" />
        <Meta property="og:description" content="AI chatbotok, workflow automatizálás, IT rendszerintegráció és időpontfoglalási rendszerek vállalkozásoknak." />
        <Meta property="og:image" content="https://debretech.hu/og-image.png" />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:url" content="https://debretech.hu/" />
        <Meta property="twitter:title" content="DebreTech - AI és IT Megoldások Debrecenben" />
        <Meta property="twitter:description" content="AI chatbotok, workflow automatizálás, IT rendszerintegráció és időpontfoglalási rendszerek vállalkozásoknak." />
        <Meta property="twitter:image" content="https://debretech.hu/og-image.png" />

        // Canonical URL
        <Link rel="canonical" href="https://debretech.hu/" />

        // JSON-LD Structured Data (inline script)
        <script type="application/ld+json" inner_html=r#"{"@context":"https://schema.org","@type":"LocalBusiness","name":"DebreTech","description":"AI és IT megoldások vállalkozásoknak","url":"https://debretech.hu","telephone":"+36301234567","email":"info@debretech.hu","address":{"@type":"PostalAddress","addressLocality":"Debrecen","addressCountry":"HU"},"areaServed":"HU","makesOffer":[{"@type":"Offer","name":"AI Chatbot & Automatizálás"},{"@type":"Offer","name":"IT Rendszerintegráció & Support"},{"@type":"Offer","name":"Online Jelenlét & Review Management"},{"@type":"Offer","name":"Időpontfoglalási Rendszerek"}]}"#></script>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    // Brand
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3 mb-4">
                            <Logo />
                            <span class="text-xl font-bold text-theme-primary">"DebreTech"</span>
                        </div>
                        <p class="text-sm text-theme-secondary max-w-md">
                            "AI és IT megoldások vállalkozásoknak. Debreceni székhely, országos lefedettség."
                        </p>
                    </div>

                    // Section links
                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Oldaltérkép"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a
                                    href="#services"
                                    class="text-sm text-theme-secondary hover:text-accent-primary transition-colors"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        scroll_to_section("services");
                                    }
                                >
                                    "Szolgáltatások"
                                </a>
                            </li>
                            <li>
                                <a
                                    href="#about"
                                    class="text-sm text-theme-secondary hover:text-accent-primary transition-colors"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        scroll_to_section("about");
                                    }
                                >
                                    "Rólunk"
                                </a>
                            </li>
                            <li>
                                <a
                                    href="#contact"
                                    class="text-sm text-theme-secondary hover:text-accent-primary transition-colors"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        scroll_to_section("contact");
                                    }
                                >
                                    "Kapcsolat"
                                </a>
                            </li>
                        </ul>
                    </div>

                    // Contact details
                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Elérhetőség"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a href="tel:+36301234567" class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "+36 30 123 4567"
                                </a>
                            </li>
                            <li>
                                <a href="mailto:info@debretech.hu" class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "info@debretech.hu"
                                </a>
                            </li>
                            <li class="text-sm text-theme-secondary">"Debrecen, Magyarország"</li>
                        </ul>
                    </div>
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-theme/50 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-theme-tertiary">
                        "© 2026 DebreTech. Minden jog fenntartva."
                    </span>
                    <span class="text-sm text-theme-tertiary">
                        "Készült Rust & Leptos alapokon."
                    </span>
                </div>
            </div>
        </footer>
    }
}
