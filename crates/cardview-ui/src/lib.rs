//! cardview UI Components
//!
//! This crate provides the Dioxus primitives the business card is built
//! from: buttons, external icon links and inline SVG icons.
//!
//! ## Design Philosophy
//!
//! A light card floating on a dark slate backdrop:
//! - **Slate 900 (#0f172a)**: Primary text and filled buttons
//! - **Slate 600 (#475569)**: Secondary text
//! - **Slate 100 (#f1f5f9)**: Icon bubbles and outline hovers
//!
//! Styles live in the application theme; components only attach classes.

pub mod components;

pub use components::*;
