//! Markup output for timeline rows.

pub mod html;
pub mod markup;
