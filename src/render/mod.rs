//! Calendar presentation for leave plans.
//!
//! Turns a computed [`crate::models::LeavePlan`] into an HTML page of month
//! tables and a short plain-text summary.

mod html;
mod summary;

pub use html::{escape_html, format_month, render_page, status_class};
pub use summary::summary_lines;
