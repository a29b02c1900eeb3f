//! AI insight cards with urgency filter chips and a refresh control.
//!
//! The same component renders the full insights view and the compact card on
//! the dashboard. Compact mode hides the chips and caps the list.

use leptos::prelude::*;

use crate::state::app::{AppState, Intent, dispatch};
use crate::state::insights::{COMPACT_LIMIT, Insight, UrgencyFilter};
use crate::state::router::View;
use crate::util::display::urgency_style;

#[component]
pub fn InsightsPanel(#[prop(optional)] compact: bool) -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    let generating = move || app.with(|s| s.insights.generating);
    let count = move || app.with(|s| s.insights.items.len());
    let visible = move || {
        app.with(|s| s.insights.visible(compact).into_iter().cloned().collect::<Vec<Insight>>())
    };

    let on_refresh = move |_| {
        if app.with_untracked(|s| s.insights.generating) {
            return;
        }
        dispatch(app, Intent::RefreshInsightsStarted);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let snapshot = crate::net::types::FinancialSnapshot::from_fixture();
            let outcome = crate::net::api::generate_insights(&snapshot).await;
            dispatch(app, Intent::RefreshInsightsFinished(outcome));
        });

        #[cfg(not(feature = "hydrate"))]
        dispatch(app, Intent::RefreshInsightsFinished(Err("not available on server".to_owned())));
    };

    view! {
        <section class="insights-panel" class:insights-panel--compact=compact>
            <div class="insights-panel__header">
                <div>
                    <h2 class="insights-panel__title">"AI Insights"</h2>
                    <p class="insights-panel__subtitle">{move || format!("{} insights generated", count())}</p>
                </div>
                <button class="insights-panel__refresh" on:click=on_refresh disabled=generating>
                    <span class="insights-panel__spinner" class:insights-panel__spinner--active=generating>
                        "↻"
                    </span>
                    {move || if generating() { "Analyzing..." } else { "Refresh" }}
                </button>
            </div>

            {move || {
                app.with(|s| s.insights.notice.clone())
                    .map(|text| view! { <div class="insights-panel__notice">{text}</div> })
            }}

            <Show when=move || !compact>
                <div class="insights-panel__chips">
                    {UrgencyFilter::CHIPS
                        .into_iter()
                        .map(|chip| {
                            let active = move || app.with(|s| s.insights.filter == chip);
                            view! {
                                <button
                                    class="insights-panel__chip"
                                    class:insights-panel__chip--active=active
                                    on:click=move |_| dispatch(app, Intent::FilterInsights(chip))
                                >
                                    {chip.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>

            <div class="insights-panel__list">
                {move || {
                    let items = visible();
                    if items.is_empty() {
                        return view! {
                            <p class="insights-panel__empty">"No insights match this filter."</p>
                        }
                            .into_any();
                    }
                    items.into_iter().map(|insight| render_card(app, insight)).collect_view().into_any()
                }}
            </div>

            <Show when={move || compact && count() > COMPACT_LIMIT}>
                <button
                    class="insights-panel__more"
                    on:click=move |_| dispatch(app, Intent::Navigate(View::Insights))
                >
                    {move || format!("View all {} insights →", count())}
                </button>
            </Show>
        </section>
    }
}

fn render_card(app: RwSignal<AppState>, insight: Insight) -> impl IntoView {
    let style = urgency_style(insight.urgency);
    let id = insight.id.clone();
    let expanded = Memo::new(move |_| app.with(|s| s.insights.expanded.as_deref() == Some(id.as_str())));
    let Insight { id, title, description, category, metric, metric_value, .. } = insight;
    let summary = description.clone();

    view! {
        <article
            class=style.class("insight-card")
            class:insight-card--expanded=move || expanded.get()
            on:click=move |_| dispatch(app, Intent::ToggleInsight(id.clone()))
        >
            <div class="insight-card__head">
                <div class="insight-card__body">
                    <div class="insight-card__meta">
                        <span class="insight-card__icon">{style.icon}</span>
                        <span class="insight-card__label">{style.label}</span>
                        <span class="insight-card__divider">"|"</span>
                        <span class="insight-card__category">{category}</span>
                    </div>
                    <h3 class="insight-card__title">{title}</h3>
                    <Show when=move || !expanded.get()>
                        <p class="insight-card__summary">{summary.clone()}</p>
                    </Show>
                </div>
                {metric
                    .map(|name| {
                        view! {
                            <div class="insight-card__metric">
                                <span class="insight-card__metric-name">{name}</span>
                                <span class="insight-card__metric-value">{metric_value.unwrap_or_default()}</span>
                            </div>
                        }
                    })}
            </div>
            <Show when=move || expanded.get()>
                <p class="insight-card__description">{description.clone()}</p>
            </Show>
        </article>
    }
}
