//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and landing body while reading shared
//! state from the `SiteContext` context provider.

pub mod footer;
pub mod header;
pub mod landing;
