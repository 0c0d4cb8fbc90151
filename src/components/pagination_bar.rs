//! Pagination Bar Component
//!
//! Prev/next, page size changer and quick jumper.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::Msg;
use crate::query::{last_page, PAGE_SIZES};
use crate::store::{use_recycle_store, RecycleStateStoreFields};

#[component]
pub fn PaginationBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_recycle_store();

    let current = move || store.query().with(|q| q.current);
    let last = move || store.query().with(|q| last_page(store.total().get(), q.page_size));

    let go_to = move |page: u32| {
        let total = store.total().get_untracked();
        store.query().write().go_to(page, total);
    };

    let on_size = move |ev: web_sys::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
            store.query().write().set_page_size(size);
        }
    };

    let on_jump = move |ev: web_sys::Event| {
        if let Ok(page) = event_target_value(&ev).trim().parse::<u32>() {
            go_to(page);
        }
    };

    let total_label = {
        let ctx = ctx.clone();
        move || format!("{} {}", ctx.t(Msg::Total), store.total().get())
    };
    let per_page = {
        let ctx = ctx.clone();
        move || ctx.t(Msg::PerPage)
    };

    view! {
        <div class="pagination">
            <span class="pagination-total">{total_label}</span>
            <button
                class="page-btn"
                prop:disabled=move || current() <= 1
                on:click=move |_| go_to(current().saturating_sub(1))
            >
                "‹"
            </button>
            <span class="page-current">{move || format!("{} / {}", current(), last())}</span>
            <button
                class="page-btn"
                prop:disabled=move || current() >= last()
                on:click=move |_| go_to(current() + 1)
            >
                "›"
            </button>
            <select class="page-size" on:change=on_size>
                {PAGE_SIZES.iter().map(|&size| {
                    let per_page = per_page.clone();
                    view! {
                        <option
                            value=size.to_string()
                            prop:selected=move || store.query().with(|q| q.page_size == size)
                        >
                            {move || format!("{} {}", size, per_page())}
                        </option>
                    }
                }).collect_view()}
            </select>
            <label class="page-jumper">
                {let ctx = ctx.clone(); move || ctx.t(Msg::GoTo)}
                <input type="number" min="1" on:change=on_jump />
            </label>
        </div>
    }
}
