//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `home` is the only route. It picks the landing page or the workspace from
//! `AppState` and delegates rendering details to `components`.

pub mod home;
pub mod landing;
pub mod workspace;
