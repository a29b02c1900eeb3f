//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and the workspace panels while
//! reading/writing shared state from Leptos context providers.

pub mod brand;
pub mod client_manager;
pub mod dashboard_view;
pub mod icons;
pub mod insights_panel;
pub mod login_modal;
pub mod navbar;
pub mod notice_tray;
pub mod quickbooks_connect;
pub mod report_viewer;
pub mod settings_panel;
pub mod sidebar;
pub mod trend_charts;
