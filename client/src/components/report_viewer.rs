//! Financial statements: tabbed P&L, balance sheet and cash flow tables.

use leptos::prelude::*;

use crate::state::app::{AppState, Intent, NoticeKind, dispatch};
use crate::util::report::{ChangeDirection, ReportPeriod, ReportRowView, ReportTab, statement_rows};

#[component]
pub fn ReportViewer() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let tab = RwSignal::new(ReportTab::default());
    let period = RwSignal::new(ReportPeriod::default());

    let company = move || {
        app.with(|s| s.clients.selected().map_or_else(|| "No client selected".to_owned(), |c| c.company_name.clone()))
    };

    let on_period = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        if let Some(found) = ReportPeriod::ALL.into_iter().find(|p| p.value() == raw) {
            period.set(found);
        }
    };

    // Export is not wired to a file writer yet; acknowledge the click.
    let on_export = move |_| {
        let label = tab.get_untracked().label();
        dispatch(
            app,
            Intent::Notify {
                kind: NoticeKind::Info,
                title: "Export queued".into(),
                description: format!("{label} export will be available soon."),
            },
        );
    };

    view! {
        <div class="report-viewer">
            <div class="report-viewer__header">
                <div>
                    <h1 class="report-viewer__title">"Financial Reports"</h1>
                    <p class="report-viewer__subtitle">{company}</p>
                </div>
                <div class="report-viewer__controls">
                    <select class="report-viewer__period" on:change=on_period prop:value=move || period.get().value()>
                        {ReportPeriod::ALL
                            .into_iter()
                            .map(|p| view! { <option value=p.value()>{p.label()}</option> })
                            .collect_view()}
                    </select>
                    <button class="report-viewer__export" on:click=on_export>
                        "Export"
                    </button>
                </div>
            </div>

            <div class="report-viewer__tabs" role="tablist">
                {ReportTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="report-viewer__tab"
                                class:report-viewer__tab--active={move || tab.get() == t}
                                role="tab"
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <table class="report-table">
                <thead>
                    <tr>
                        <th class="report-table__label">"Account"</th>
                        <th class="report-table__amount">{move || period.get().label()}</th>
                        <th class="report-table__amount">"Previous"</th>
                        <th class="report-table__amount">"Change"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || statement_rows(tab.get()).into_iter().map(render_row).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

fn render_row(row: ReportRowView) -> impl IntoView {
    let padding = format!("padding-left: {}px", row.padding_px);
    let change_class = match row.direction {
        ChangeDirection::Up => "report-table__change report-table__change--up",
        ChangeDirection::Down => "report-table__change report-table__change--down",
        ChangeDirection::Flat => "report-table__change",
    };
    let arrow = match row.direction {
        ChangeDirection::Up => "↑ ",
        ChangeDirection::Down => "↓ ",
        ChangeDirection::Flat => "",
    };
    let change = row.change.map(|text| if text == "-" { text } else { format!("{arrow}{text}") });

    view! {
        <tr
            class="report-table__row"
            class:report-table__row--header=row.is_header
            class:report-table__row--total=row.is_total
        >
            <td class="report-table__label" style=padding>{row.label}</td>
            <td class="report-table__amount">{row.current}</td>
            <td class="report-table__amount">{row.previous}</td>
            <td class=change_class>{change.unwrap_or_default()}</td>
        </tr>
    }
}
