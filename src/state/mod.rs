//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `invoice` holds the draft model and totals, `invoice_form` the form
//! lifecycle built on it, and `nav` the host menu highlight. Components read
//! them from Leptos context as `RwSignal`s.

pub mod invoice;
pub mod invoice_form;
pub mod nav;
