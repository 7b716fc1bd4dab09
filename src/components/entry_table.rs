//! Line-item table: committed entries, running total, and the entry row.

use leptos::prelude::*;

use crate::state::invoice::{EntryField, TaxRate};
use crate::state::invoice_form::InvoiceForm;
use crate::util::money::format_amount;

/// Table of committed entries with a grand-total row and a footer row for
/// typing the next entry.
#[component]
pub fn EntryTable() -> impl IntoView {
    let form = expect_context::<RwSignal<InvoiceForm>>();

    let rows = move || {
        form.with(|f| {
            f.entries
                .iter()
                .map(|entry| {
                    let total = format_amount(entry.total());
                    view! {
                        <tr class="entry-table__row">
                            <td>{entry.description.clone()}</td>
                            <td>{entry.amount.clone()}</td>
                            <td>{entry.price.clone()}</td>
                            <td>{entry.tax.clone()}</td>
                            <td class="entry-table__total">{total}</td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>()
        })
    };
    let grand_total = move || format_amount(form.with(InvoiceForm::total));

    let entry_input = move |field: EntryField, placeholder: &'static str| {
        view! {
            <input
                class="entry-table__input"
                type="text"
                placeholder=placeholder
                prop:value=move || form.with(|f| f.entry.field(field).to_owned())
                on:input=move |ev| form.update(|f| f.set_entry(field, event_target_value(&ev)))
            />
        }
    };

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            f.submit_entry();
        });
    };

    view! {
        <table class="entry-table">
            <thead>
                <tr>
                    <th>"Description"</th>
                    <th>"Amount"</th>
                    <th>"Price"</th>
                    <th>"Tax %"</th>
                    <th>"Total"</th>
                </tr>
            </thead>
            <tbody>
                {rows}
                <tr class="entry-table__grand-total">
                    <td colspan="5">{grand_total}</td>
                </tr>
            </tbody>
            <tfoot>
                <tr>
                    <th>{entry_input(EntryField::Description, "Description")}</th>
                    <th>{entry_input(EntryField::Amount, "Amount")}</th>
                    <th>{entry_input(EntryField::Price, "Price")}</th>
                    <th>
                        <select
                            class="entry-table__tax"
                            prop:value=move || form.with(|f| f.entry.tax.clone())
                            on:change=move |ev| form.update(|f| {
                                f.select_tax_rate(&event_target_value(&ev));
                            })
                        >
                            {TaxRate::ALL
                                .into_iter()
                                .map(move |rate| {
                                    view! {
                                        <option
                                            value=rate.as_str()
                                            prop:selected=move || form.with(|f| f.entry.tax == rate.as_str())
                                        >
                                            {rate.as_str()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </th>
                    <th class="entry-table__add">
                        <form on:submit=on_add>
                            <button
                                class="btn btn--primary entry-table__add-button"
                                type="submit"
                                title="Add entry"
                                disabled=move || form.with(|f| f.loading)
                            >
                                "+"
                            </button>
                        </form>
                    </th>
                </tr>
            </tfoot>
        </table>
    }
}
