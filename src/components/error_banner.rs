//! Error banner for validation, load, and save failures.

use leptos::prelude::*;

use crate::state::invoice_form::InvoiceForm;

/// Shows the form's banner message, if any.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let form = expect_context::<RwSignal<InvoiceForm>>();
    let message = move || form.with(|f| f.banner_message().map(str::to_owned));

    view! {
        <Show when=move || message().is_some()>
            <div class="error-banner" role="alert">
                <strong class="error-banner__title">"Oops"</strong>
                <p class="error-banner__content">{move || message().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
