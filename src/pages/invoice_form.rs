//! Invoice form page for both create (`/new`) and edit (`/invoices/:id`).
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the `RwSignal<InvoiceForm>` for its route and drives the
//! async side of loading and saving. When the `id` param changes the form is
//! reset and, in edit mode, reloaded; completions from an earlier id are
//! discarded by the form's generation check.

#[cfg(test)]
#[path = "invoice_form_test.rs"]
mod invoice_form_test;

use chrono::Utc;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::entry_table::EntryTable;
use crate::components::error_banner::ErrorBanner;
use crate::components::header_form::HeaderForm;
use crate::state::invoice_form::{InvoiceForm, LoadTicket, SaveTicket};
use crate::state::nav::{NEW_INVOICE_MENU, NavState};

fn page_title(edit: bool) -> &'static str {
    if edit { "Edit invoice" } else { "New invoice" }
}

fn save_button_label(saving: bool, edit: bool) -> &'static str {
    match (saving, edit) {
        (true, _) => "Saving...",
        (false, true) => "Update",
        (false, false) => "Create",
    }
}

/// Fetch the ticket's invoice and apply the result to `form`.
#[cfg(feature = "hydrate")]
fn spawn_load(form: RwSignal<InvoiceForm>, ticket: LoadTicket) {
    use crate::net::api::{HttpInvoiceStore, InvoiceStore};

    leptos::task::spawn_local(async move {
        let result = HttpInvoiceStore::default().get_invoice(&ticket.id).await;
        let _ = form.try_update(|f| f.finish_load(&ticket, result));
    });
}

#[cfg(not(feature = "hydrate"))]
fn spawn_load(_form: RwSignal<InvoiceForm>, _ticket: LoadTicket) {}

/// Send the ticket's body and apply the result to `form`.
#[cfg(feature = "hydrate")]
fn spawn_save(form: RwSignal<InvoiceForm>, ticket: SaveTicket) {
    use crate::net::api::{HttpInvoiceStore, submit_invoice};

    leptos::task::spawn_local(async move {
        let result = submit_invoice(&HttpInvoiceStore::default(), &ticket.body, &ticket.target).await;
        if result.is_ok() {
            log::info!("invoice saved ({:?})", ticket.target);
        }
        let _ = form.try_update(|f| f.finish_save(&ticket, result));
    });
}

#[cfg(not(feature = "hydrate"))]
fn spawn_save(_form: RwSignal<InvoiceForm>, _ticket: SaveTicket) {}

#[component]
pub fn InvoiceFormPage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    nav.update(|n| n.set_active_menu(NEW_INVOICE_MENU));

    let form = RwSignal::new(InvoiceForm::default());
    provide_context(form);

    let params = use_params_map();

    Effect::new(move || {
        let id = params.read().get("id");
        let Some(id) = id else {
            form.update(|f| f.begin_create(Utc::now()));
            return;
        };
        if let Some(ticket) = form.try_update(|f| f.begin_load(&id, Utc::now())) {
            spawn_load(form, ticket);
        }
    });

    let on_save = move |_| {
        if let Some(Ok(ticket)) = form.try_update(InvoiceForm::begin_save) {
            spawn_save(form, ticket);
        }
    };

    let title = move || page_title(form.with(|f| f.edit));
    let button_label = move || form.with(|f| save_button_label(f.saving, f.edit));
    let button_class = move || {
        if form.with(|f| f.saving) {
            "btn btn--primary btn--busy"
        } else {
            "btn btn--primary"
        }
    };

    view! {
        <section class="invoice-page">
            <Show when=move || form.with(|f| f.loading)>
                <div class="invoice-page__loader">"Loading invoice..."</div>
            </Show>
            <h2 class="invoice-page__title">{title}</h2>
            <HeaderForm/>
            <EntryTable/>
            <ErrorBanner/>
            <div class="invoice-page__actions">
                <button
                    class=button_class
                    disabled=move || !form.with(InvoiceForm::can_save)
                    on:click=on_save
                >
                    {button_label}
                </button>
            </div>
        </section>
    }
}
