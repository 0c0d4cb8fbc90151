//! Column Settings Component
//!
//! Popover to show/hide table columns. Persisted in localStorage.

use leptos::prelude::*;

use crate::columns::{Column, LocalStorage};
use crate::context::use_app_context;
use crate::i18n::Msg;
use crate::store::{store_reset_columns, store_toggle_column, use_recycle_store, RecycleStateStoreFields};

#[component]
pub fn ColumnSettings() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_recycle_store();
    let (open, set_open) = signal(false);

    let toggle = move |column: Column| store_toggle_column(&store, column, &LocalStorage);
    let reset = move |_| store_reset_columns(&store, &LocalStorage);

    let label = {
        let ctx = ctx.clone();
        move || ctx.t(Msg::Columns)
    };

    view! {
        <div class="column-settings">
            <button class="btn btn-small" on:click=move |_| set_open.update(|o| *o = !*o)>
                {label}
            </button>
            <Show when=move || open.get()>
                <div class="column-popover">
                    {
                        let ctx = ctx.clone();
                        Column::ALL.into_iter().map(move |column| {
                            let name = column.label().map(|msg| ctx.t(msg)).unwrap_or("ID");
                            view! {
                                <label class="column-option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || store.columns().with(|c| c.is_visible(column))
                                        on:change=move |_| toggle(column)
                                    />
                                    {name}
                                </label>
                            }
                        }).collect_view()
                    }
                    <button class="btn btn-link btn-small" on:click=reset>
                        {let ctx = ctx.clone(); move || ctx.t(Msg::Reset)}
                    </button>
                </div>
            </Show>
        </div>
    }
}
