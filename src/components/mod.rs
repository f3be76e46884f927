//! UI Components for the business card.
//!
//! Presentational pieces that display the profile and trigger the export.

mod avatar;
mod business_card;
mod contact_row;
mod save_contact;

pub use avatar::Avatar;
pub use business_card::BusinessCard;
pub use contact_row::ContactRow;
pub use save_contact::SaveContactButton;
