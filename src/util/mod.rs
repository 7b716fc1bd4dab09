//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep number and date handling out of page and component
//! logic so the form rules stay testable without a browser.

pub mod dates;
pub mod money;
