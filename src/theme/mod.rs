//! Visual theme for the card view.

mod styles;

pub use styles::GLOBAL_STYLES;
