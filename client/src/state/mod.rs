//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Catalog records (`catalog`), the derived-view store over them
//! (`portfolio`), the theme store (`theme`), and the read-only bundle
//! components consume (`site`) are kept apart so each can be tested without
//! the others.

pub mod catalog;
pub mod portfolio;
pub mod site;
pub mod theme;
