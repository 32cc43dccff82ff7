//! # Domain Models
//!
//! Pure data shared by the composition kernel, the site facade and the preview app.
//! Keep it lean: no I/O, networking, or heavy logic. Just data and simple helpers.

pub mod category;
pub mod config;
pub mod settings;
