//! Reusable HTML components for page generation
//!
//! Maud component functions shared by the home, listing, detail, and
//! standalone document pages.

pub mod cards;
pub mod comments;
pub mod footer;
pub mod icons;
pub mod layout;
pub mod metadata;
pub mod nav;
