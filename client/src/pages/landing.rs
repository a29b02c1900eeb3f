//! Public marketing page: hero, features, steps, pricing, call to action and
//! footer.
//!
//! Every "get started" control applies `Intent::GetStarted`, which opens the
//! login modal for visitors and goes straight to the dashboard for users with
//! a session.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::brand::Brand;
use crate::state::app::{AppState, Intent, dispatch};
use crate::util::dom;

/// Pricing toggle. Annual billing is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    #[default]
    Annual,
}

impl BillingCycle {
    pub const ALL: [Self; 2] = [Self::Monthly, Self::Annual];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Annual => "Annual",
        }
    }
}

/// A pricing tier with its per-month price under each billing cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub tagline: &'static str,
    pub monthly_price: u32,
    pub annual_price: u32,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

impl Plan {
    /// Dollars per month shown for `cycle`.
    #[must_use]
    pub fn price(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Annual => self.annual_price,
        }
    }
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        tagline: "Perfect for solo businesses",
        monthly_price: 49,
        annual_price: 39,
        features: &["1 QuickBooks Connection", "Financial Dashboard", "Monthly Reports", "5 AI Insights/month", "Email Support"],
        cta: "Start Free Trial",
        popular: false,
    },
    Plan {
        name: "Professional",
        tagline: "For growing businesses",
        monthly_price: 99,
        annual_price: 79,
        features: &[
            "3 QuickBooks Connections",
            "Advanced Dashboard",
            "Weekly Reports",
            "Unlimited AI Insights",
            "Trend Analysis",
            "Priority Support",
            "Custom Date Ranges",
        ],
        cta: "Start Free Trial",
        popular: true,
    },
    Plan {
        name: "Enterprise",
        tagline: "For multi-entity operations",
        monthly_price: 249,
        annual_price: 199,
        features: &[
            "Unlimited Connections",
            "White-Label Dashboard",
            "Daily Reports",
            "Unlimited AI Insights",
            "Advanced Analytics",
            "Dedicated Support",
            "API Access",
            "Custom Integrations",
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

/// `(icon, title, description)`
const FEATURES: [(&str, &str, &str); 8] = [
    (
        "⇄",
        "QuickBooks Integration",
        "One-click secure connection to your QuickBooks Online account. OAuth 2.0 authentication with automatic token refresh.",
    ),
    (
        "▦",
        "Financial Dashboard",
        "Real-time metrics, trend charts, and period comparisons. See your revenue, expenses, profit, and cash position at a glance.",
    ),
    (
        "✦",
        "AI-Powered Insights",
        "Plain-English analysis of your financial data. Understand trends, risks, and opportunities without being an accountant.",
    ),
    (
        "≡",
        "Automated Reports",
        "Profit & Loss, Balance Sheet, and Cash Flow statements pulled and organized automatically from QuickBooks.",
    ),
    (
        "↗",
        "Trend Analysis",
        "Track month-over-month and year-over-year performance. Identify seasonal patterns and growth trajectories.",
    ),
    (
        "⛨",
        "Enterprise Security",
        "Bank-level encryption, SOC 2 compliance, and secure data isolation. Your financial data is always protected.",
    ),
    (
        "↻",
        "Auto-Sync",
        "Financial data syncs automatically on a schedule. Always see the latest numbers without manual refreshes.",
    ),
    (
        "◫",
        "Multi-Client Support",
        "Manage multiple businesses from a single dashboard. Perfect for consultants and multi-entity owners.",
    ),
];

/// `(number, title, description)`
const STEPS: [(&str, &str, &str); 4] = [
    (
        "01",
        "Connect QuickBooks",
        "Securely link your QuickBooks Online account with one click. We use Intuit's official OAuth flow, so your credentials never touch our servers.",
    ),
    (
        "02",
        "We Pull Your Data",
        "PrimeCFO.ai automatically retrieves your Profit & Loss, Balance Sheet, Cash Flow, and other key reports from QuickBooks.",
    ),
    (
        "03",
        "AI Analyzes Everything",
        "Our AI engine processes your financial data, calculates key metrics, identifies trends, and generates plain-English insights.",
    ),
    (
        "04",
        "You Make Better Decisions",
        "View your financial dashboard, read actionable insights, and understand exactly where your business stands. No accounting degree needed.",
    ),
];

/// `(label, value, change)` for the hero preview card.
const PREVIEW_METRICS: [(&str, &str, &str); 4] = [
    ("Revenue", "$487.3K", "+11.8%"),
    ("Net Profit", "$145.1K", "+24.1%"),
    ("Cash Position", "$128.5K", "+8.2%"),
    ("Profit Margin", "29.8%", "+2.9pp"),
];

const TRUST_SIGNALS: [&str; 3] = ["Bank-Level Security", "Real-Time Sync", "SOC 2 Compliant"];

const INTEGRATIONS: [&str; 5] = ["QuickBooks Online", "Intuit", "Stripe", "Plaid", "Xero"];

/// Footer columns as `(heading, links)`.
const FOOTER_COLUMNS: [(&str, &[&str]); 4] = [
    ("Product", &["Features", "Pricing", "Integrations", "Changelog", "API Docs"]),
    ("Company", &["About Us", "Careers", "Blog", "Press", "Contact"]),
    ("Resources", &["Help Center", "Getting Started", "QuickBooks Guide", "Financial Glossary", "Webinars"]),
    ("Legal", &["Privacy Policy", "Terms of Service", "Security", "Cookie Policy", "GDPR"]),
];

const SOCIAL_LINKS: [&str; 3] = ["Twitter", "LinkedIn", "GitHub"];

/// Page section a footer link scrolls to, if it has one.
fn footer_anchor(link: &str) -> Option<&'static str> {
    match link {
        "Features" => Some("features"),
        "Pricing" => Some("pricing"),
        _ => None,
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="landing">
            <Hero />
            <FeatureGrid />
            <HowItWorks />
            <Pricing />
            <CallToAction />
            <Footer />
        </main>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    view! {
        <section class="hero">
            <div class="hero__copy">
                <span class="hero__badge">"AI-Powered Financial Intelligence"</span>
                <h1 class="hero__title">
                    "Connect Your Books. "
                    <span class="hero__title-accent">"Unlock Your Insights."</span>
                </h1>
                <p class="hero__lead">
                    "PrimeCFO.ai connects to your QuickBooks account and translates your financial data into clear, actionable insights, so you can make smarter business decisions without being an accountant."
                </p>
                <div class="hero__actions">
                    <button class="hero__primary" on:click=move |_| dispatch(app, Intent::GetStarted)>
                        "Connect QuickBooks →"
                    </button>
                    <button class="hero__secondary" on:click=move |_| dom::scroll_to_section("how-it-works")>
                        "See How It Works"
                    </button>
                </div>
                <ul class="hero__trust">
                    {TRUST_SIGNALS.into_iter().map(|signal| view! { <li>"✓ " {signal}</li> }).collect_view()}
                </ul>
            </div>

            <div class="hero__preview" aria-hidden="true">
                <div class="preview-card">
                    <div class="preview-card__header">
                        <div>
                            <p class="preview-card__eyebrow">"Financial Overview"</p>
                            <p class="preview-card__company">"GreenLeaf Landscaping"</p>
                        </div>
                        <span class="status-badge status-badge--success">"QB Connected"</span>
                    </div>
                    <div class="preview-card__metrics">
                        {PREVIEW_METRICS
                            .into_iter()
                            .map(|(label, value, change)| {
                                view! {
                                    <div class="preview-card__metric">
                                        <span class="preview-card__change">{change}</span>
                                        <p class="preview-card__value">{value}</p>
                                        <p class="preview-card__label">{label}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="preview-card__insight">
                        <p class="preview-card__insight-title">"AI Insight"</p>
                        <p class="preview-card__insight-text">
                            "Revenue grew 11.8% YoY, outpacing industry average. Profit margins improved 2.9 percentage points."
                        </p>
                    </div>
                </div>
            </div>

            <div class="hero__integrations">
                <p class="hero__integrations-title">"Trusted Integrations"</p>
                <div class="hero__integrations-list">
                    {INTEGRATIONS.into_iter().map(|name| view! { <span>{name}</span> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureGrid() -> impl IntoView {
    view! {
        <section id="features" class="landing-section">
            <p class="landing-section__eyebrow">"Features"</p>
            <h2 class="landing-section__title">"Everything You Need to Understand Your Finances"</h2>
            <p class="landing-section__lead">
                "From automated data retrieval to AI-powered analysis, PrimeCFO.ai gives you a complete financial intelligence toolkit."
            </p>
            <div class="feature-grid">
                {FEATURES
                    .into_iter()
                    .map(|(icon, title, description)| {
                        view! {
                            <article class="feature-grid__item">
                                <span class="feature-grid__icon">{icon}</span>
                                <h3 class="feature-grid__title">{title}</h3>
                                <p class="feature-grid__text">{description}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="landing-section landing-section--alt">
            <p class="landing-section__eyebrow">"How It Works"</p>
            <h2 class="landing-section__title">"From QuickBooks to Insights in Minutes"</h2>
            <p class="landing-section__lead">
                "Four simple steps to transform your raw financial data into actionable business intelligence."
            </p>
            <ol class="steps">
                {STEPS
                    .into_iter()
                    .map(|(number, title, description)| {
                        view! {
                            <li class="steps__item">
                                <span class="steps__number">{number}</span>
                                <h3 class="steps__title">{title}</h3>
                                <p class="steps__text">{description}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn Pricing() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let cycle = RwSignal::new(BillingCycle::default());

    view! {
        <section id="pricing" class="landing-section">
            <p class="landing-section__eyebrow">"Pricing"</p>
            <h2 class="landing-section__title">"Simple, Transparent Pricing"</h2>
            <p class="landing-section__lead">"Start with a 14-day free trial. No credit card required."</p>

            <div class="billing-toggle">
                {BillingCycle::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                class="billing-toggle__option"
                                class:billing-toggle__option--active={move || cycle.get() == option}
                                on:click=move |_| cycle.set(option)
                            >
                                {option.label()}
                                {(option == BillingCycle::Annual)
                                    .then(|| view! { <span class="billing-toggle__save">"Save 20%"</span> })}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="plans">
                {PLANS
                    .into_iter()
                    .map(|plan| {
                        view! {
                            <article class="plan" class:plan--popular=plan.popular>
                                {plan.popular.then(|| view! { <span class="plan__ribbon">"Most Popular"</span> })}
                                <h3 class="plan__name">{plan.name}</h3>
                                <p class="plan__tagline">{plan.tagline}</p>
                                <p class="plan__price">
                                    <span class="plan__amount">{move || format!("${}", plan.price(cycle.get()))}</span>
                                    <span class="plan__period">"/month"</span>
                                </p>
                                <ul class="plan__features">
                                    {plan.features.iter().map(|f| view! { <li>"✓ " {*f}</li> }).collect_view()}
                                </ul>
                                <button class="plan__cta" on:click=move |_| dispatch(app, Intent::GetStarted)>
                                    {plan.cta}
                                </button>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    view! {
        <section class="landing-cta">
            <span class="landing-cta__badge">"14-Day Free Trial"</span>
            <h2 class="landing-cta__title">"Ready to Understand Your Finances?"</h2>
            <p class="landing-cta__lead">
                "Join hundreds of business owners who use PrimeCFO.ai to make smarter financial decisions every day."
            </p>
            <button class="landing-cta__button" on:click=move |_| dispatch(app, Intent::GetStarted)>
                "Get Started Free →"
            </button>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__about">
                    <Brand />
                    <p class="footer__blurb">
                        "AI-powered financial intelligence that transforms your QuickBooks data into clear, actionable business insights."
                    </p>
                    <div class="footer__badges">
                        <span>"SOC 2"</span>
                        <span>"256-bit SSL"</span>
                    </div>
                </div>
                {FOOTER_COLUMNS
                    .into_iter()
                    .map(|(heading, links)| {
                        view! {
                            <div class="footer__column">
                                <h4 class="footer__heading">{heading}</h4>
                                <ul class="footer__links">
                                    {links
                                        .iter()
                                        .map(|&link| {
                                            let anchor = footer_anchor(link);
                                            view! {
                                                <li>
                                                    <button
                                                        class="footer__link"
                                                        on:click=move |_| {
                                                            if let Some(id) = anchor {
                                                                dom::scroll_to_section(id);
                                                            }
                                                        }
                                                    >
                                                        {link}
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="footer__bottom">
                <p class="footer__copyright">"© 2026 PrimeCFO.ai. All rights reserved."</p>
                <div class="footer__social">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|name| view! { <a class="footer__social-link" href="#" aria-label=name>{name}</a> })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
