//! Report generation
//!
//! Renders an [`profile_report::Analysis`] to the console and mirrors the
//! profile rows into a plain-text export.

pub mod console;
pub mod txt;
