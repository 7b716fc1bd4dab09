//! Header form: seller identity, invoice number, and the two dates.

use leptos::prelude::*;

use crate::state::invoice::HeaderField;
use crate::state::invoice_form::InvoiceForm;
use crate::util::dates;

/// Which header date an input edits.
#[derive(Clone, Copy)]
enum DateField {
    Invoice,
    Expire,
}

/// Header inputs bound to the page's form state.
///
/// Company, street and town share the first row; VAT number, invoice number
/// and the dates share the second.
#[component]
pub fn HeaderForm() -> impl IntoView {
    let form = expect_context::<RwSignal<InvoiceForm>>();

    let text_input = move |field: HeaderField| {
        view! {
            <label class="invoice-field">
                <span class="invoice-field__label">{field.label()}</span>
                <input
                    class="invoice-field__input"
                    type="text"
                    required=true
                    placeholder=field.label()
                    prop:value=move || form.with(|f| f.headers.field(field).to_owned())
                    on:input=move |ev| form.update(|f| f.set_header(field, event_target_value(&ev)))
                />
            </label>
        }
    };

    let date_input = move |label: &'static str, which: DateField| {
        let current = move || {
            form.with(|f| match which {
                DateField::Invoice => f.headers.invoice_date,
                DateField::Expire => f.headers.expire_date,
            })
        };
        view! {
            <label class="invoice-field invoice-field--date">
                <span class="invoice-field__label">{label}</span>
                <input
                    class="invoice-field__input"
                    type="date"
                    required=true
                    title=move || dates::to_display(&current())
                    prop:value=move || dates::to_input_value(&current())
                    on:change=move |ev| {
                        let Some(date) = dates::parse_input_value(&event_target_value(&ev)) else {
                            return;
                        };
                        form.update(|f| match which {
                            DateField::Invoice => f.set_invoice_date(date),
                            DateField::Expire => f.set_expire_date(date),
                        });
                    }
                />
            </label>
        }
    };

    view! {
        <form class="invoice-headers" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
            <div class="invoice-headers__row">
                {text_input(HeaderField::Company)}
                {text_input(HeaderField::Street)}
                {text_input(HeaderField::Town)}
            </div>
            <div class="invoice-headers__row">
                {text_input(HeaderField::VatNumber)}
                {text_input(HeaderField::InvoiceNumber)}
                {date_input("Invoice date", DateField::Invoice)}
                {date_input("Expire date", DateField::Expire)}
            </div>
        </form>
    }
}
