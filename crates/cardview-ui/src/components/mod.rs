//! Reusable UI components
//!
//! All components render plain elements with theme classes:
//! - `btn-*` for buttons
//! - `icon-link` for round external link buttons
//! - `icon` for inline SVG icons

mod button;
mod icon;

pub use button::*;
pub use icon::*;
