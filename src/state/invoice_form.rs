//! Invoice form controller: headers, pending entry, committed entries, and
//! load/save lifecycle flags.
//!
//! DESIGN
//! ======
//! Every transition is a synchronous method so the page can drive it from a
//! single `RwSignal<InvoiceForm>`. Async work is split in two: a `begin_*`
//! call that flips flags and hands back a ticket, and a `finish_*` call that
//! applies the outcome. Tickets carry the generation they were issued under;
//! a route change bumps the generation so late responses for a previous
//! invoice are dropped instead of overwriting newer state.
//!
//! Lifecycle: `Idle -> Loading -> {Ready | LoadError}`, then
//! `Ready -> Saving -> {Ready | SaveError}`.

#[cfg(test)]
#[path = "invoice_form_test.rs"]
mod invoice_form_test;

use chrono::{DateTime, Utc};

use super::invoice::{EntryField, HeaderField, HeaderRecord, InvoiceDraft, LineItem, TaxRate, grand_total};
use crate::net::api::{ApiError, SaveTarget};
use crate::net::types::InvoiceBody;

pub const LOAD_ERROR: &str = "could not load invoice";
pub const ENTRY_ERROR: &str = "fill in numbers where required";
pub const HEADERS_ERROR: &str = "missing contact details";
pub const SAVE_ERROR: &str = "could not save, try again later";

/// Handle for an in-flight load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub id: String,
}

/// Handle for an in-flight save, carrying the body to send.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveTicket {
    pub generation: u64,
    pub body: InvoiceBody,
    pub target: SaveTarget,
}

/// Why `begin_save` did not produce a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SaveRejected {
    #[error("a save is already in flight")]
    InFlight,
    #[error("invoice is still loading")]
    Loading,
    #[error("invoice failed to load")]
    LoadFailed,
    #[error("missing contact details")]
    MissingHeaders,
}

/// Complete form state for creating or editing one invoice.
#[derive(Clone, Debug)]
pub struct InvoiceForm {
    pub headers: HeaderRecord,
    /// Footer-row entry being typed, not yet part of `entries`.
    pub entry: LineItem,
    pub entries: Vec<LineItem>,
    /// Route id when editing an existing invoice.
    pub invoice_id: Option<String>,
    pub edit: bool,
    pub loading: bool,
    pub saving: bool,
    /// Validation or save failure; cleared on the next attempt.
    pub error_message: Option<String>,
    /// Fetch failure; stays until the route changes.
    pub loading_error: Option<String>,
    generation: u64,
}

impl Default for InvoiceForm {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl InvoiceForm {
    /// Empty create-mode form with both dates at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            headers: HeaderRecord::new(now),
            entry: LineItem::default(),
            entries: Vec::new(),
            invoice_id: None,
            edit: false,
            loading: false,
            saving: false,
            error_message: None,
            loading_error: None,
            generation: 0,
        }
    }

    /// Clear everything back to defaults. The generation is kept so it keeps
    /// increasing across route changes.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        let generation = self.generation;
        *self = Self::new(now);
        self.generation = generation;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // =========================================================================
    // ROUTE LIFECYCLE
    // =========================================================================

    /// Switch to an empty create-mode form, abandoning any in-flight request.
    pub fn begin_create(&mut self, now: DateTime<Utc>) {
        self.reset(now);
        self.generation += 1;
        log::debug!("invoice form: create mode (generation {})", self.generation);
    }

    /// Switch to edit mode for `id` and start loading it.
    pub fn begin_load(&mut self, id: &str, now: DateTime<Utc>) -> LoadTicket {
        self.reset(now);
        self.generation += 1;
        self.edit = true;
        self.loading = true;
        self.invoice_id = Some(id.to_owned());
        log::debug!("invoice form: loading {id} (generation {})", self.generation);
        LoadTicket {
            generation: self.generation,
            id: id.to_owned(),
        }
    }

    /// Apply a fetch result. Returns `false` if the ticket is stale and
    /// nothing changed.
    pub fn finish_load(&mut self, ticket: &LoadTicket, result: Result<InvoiceBody, ApiError>) -> bool {
        if ticket.generation != self.generation {
            log::warn!("invoice form: dropping stale load of {}", ticket.id);
            return false;
        }
        self.loading = false;
        let draft = result.map_err(|e| e.to_string()).and_then(|body| {
            InvoiceDraft::try_from(body).map_err(|e| e.to_string())
        });
        match draft {
            Ok(draft) => {
                self.headers = draft.headers;
                self.entries = draft.entries;
            }
            Err(e) => {
                log::warn!("invoice form: load of {} failed: {e}", ticket.id);
                self.loading_error = Some(LOAD_ERROR.to_owned());
            }
        }
        true
    }

    // =========================================================================
    // FIELD EDITS
    // =========================================================================

    pub fn set_header(&mut self, field: HeaderField, value: String) {
        *self.headers.field_mut(field) = value;
    }

    pub fn set_invoice_date(&mut self, date: DateTime<Utc>) {
        self.headers.invoice_date = date;
    }

    pub fn set_expire_date(&mut self, date: DateTime<Utc>) {
        self.headers.expire_date = date;
    }

    pub fn set_entry(&mut self, field: EntryField, value: String) {
        *self.entry.field_mut(field) = value;
    }

    /// Set the pending entry's tax from a dropdown value. Values outside the
    /// offered rates are ignored. Returns whether the tax changed.
    pub fn select_tax_rate(&mut self, raw: &str) -> bool {
        let Some(rate) = TaxRate::parse(raw) else {
            log::warn!("invoice form: ignoring unknown tax rate {raw:?}");
            return false;
        };
        self.entry.tax = rate.as_str().to_owned();
        true
    }

    /// Commit the pending entry if its numeric fields are numbers.
    /// Returns whether the entry was added.
    pub fn submit_entry(&mut self) -> bool {
        self.error_message = None;
        if let Err(e) = self.entry.validate() {
            log::debug!("invoice form: entry rejected: {e}");
            self.error_message = Some(ENTRY_ERROR.to_owned());
            return false;
        }
        let entry = std::mem::take(&mut self.entry);
        self.entries.push(entry);
        true
    }

    // =========================================================================
    // SAVE
    // =========================================================================

    /// Validate and start a save.
    ///
    /// # Errors
    ///
    /// Rejects while another save is in flight, while loading, after a
    /// failed load, or when a header field is empty. Only the last case
    /// touches state (it sets the error banner).
    pub fn begin_save(&mut self) -> Result<SaveTicket, SaveRejected> {
        if self.saving {
            return Err(SaveRejected::InFlight);
        }
        if self.loading {
            return Err(SaveRejected::Loading);
        }
        if self.loading_error.is_some() {
            return Err(SaveRejected::LoadFailed);
        }

        self.saving = true;
        self.error_message = None;
        if !self.headers.is_complete() {
            self.saving = false;
            self.error_message = Some(HEADERS_ERROR.to_owned());
            return Err(SaveRejected::MissingHeaders);
        }

        let target = match (&self.invoice_id, self.edit) {
            (Some(id), true) => SaveTarget::Update(id.clone()),
            _ => SaveTarget::Create,
        };
        log::debug!("invoice form: saving {target:?}");
        Ok(SaveTicket {
            generation: self.generation,
            body: InvoiceBody::from(&self.draft()),
            target,
        })
    }

    /// Apply a save result. Returns `false` if the ticket is stale.
    pub fn finish_save(&mut self, ticket: &SaveTicket, result: Result<(), ApiError>) -> bool {
        if ticket.generation != self.generation {
            log::warn!("invoice form: dropping stale save result");
            return false;
        }
        self.saving = false;
        if let Err(e) = result {
            log::warn!("invoice form: save failed: {e}");
            self.error_message = Some(SAVE_ERROR.to_owned());
        }
        true
    }

    // =========================================================================
    // DERIVED
    // =========================================================================

    /// Current headers and committed entries.
    pub fn draft(&self) -> InvoiceDraft {
        InvoiceDraft {
            headers: self.headers.clone(),
            entries: self.entries.clone(),
        }
    }

    pub fn total(&self) -> f64 {
        grand_total(&self.entries)
    }

    /// Message for the error banner: explicit errors win over load errors.
    pub fn banner_message(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .filter(|msg| !msg.is_empty())
            .or(self.loading_error.as_deref())
    }

    pub fn can_save(&self) -> bool {
        !self.loading && self.loading_error.is_none() && !self.saving
    }
}
