//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads the shared `SiteContext` and owns only route-local UI
//! state such as the projects status filter.

pub mod about;
pub mod projects;
pub mod skills;
