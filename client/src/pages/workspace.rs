//! Authenticated layout: sidebar plus the panel for the active view.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::client_manager::ClientManager;
use crate::components::dashboard_view::DashboardView;
use crate::components::insights_panel::InsightsPanel;
use crate::components::quickbooks_connect::QuickBooksConnect;
use crate::components::report_viewer::ReportViewer;
use crate::components::settings_panel::SettingsPanel;
use crate::components::sidebar::Sidebar;
use crate::state::app::AppState;
use crate::state::router::View;

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let active = Memo::new(move |_| app.with(AppState::active_view));

    view! {
        <div class="workspace">
            <Sidebar />
            <main class="workspace__main">
                {move || match active.get() {
                    View::Dashboard | View::Landing => view! { <DashboardView /> }.into_any(),
                    View::Reports => view! { <ReportViewer /> }.into_any(),
                    View::Insights => view! { <InsightsPanel /> }.into_any(),
                    View::Clients => view! { <ClientManager /> }.into_any(),
                    View::Connect => view! { <QuickBooksConnect /> }.into_any(),
                    View::Settings => view! { <SettingsPanel /> }.into_any(),
                }}
            </main>
        </div>
    }
}
