//! Top navigation bar with the active-section highlight.

use leptos::prelude::*;

use crate::state::nav::{NEW_INVOICE_MENU, NavState};

#[component]
pub fn NavBar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    let new_class = move || {
        if nav.with(|n| n.is_active(NEW_INVOICE_MENU)) {
            "nav-bar__link nav-bar__link--active"
        } else {
            "nav-bar__link"
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Invoices"</span>
            <a class=new_class href="/new">
                "New invoice"
            </a>
        </nav>
    }
}
