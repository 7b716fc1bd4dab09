//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces of the invoice form and read/write the shared
//! `RwSignal<InvoiceForm>` provided by the page.

pub mod entry_table;
pub mod error_banner;
pub mod header_form;
pub mod nav_bar;
