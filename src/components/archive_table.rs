//! Archive Table Component
//!
//! Selectable table of recycled archives with per-row actions.

use leptos::prelude::*;

use crate::actions::open_preview;
use crate::batch::BatchAction;
use crate::columns::Column;
use crate::context::use_app_context;
use crate::i18n::Msg;
use crate::models::Archive;
use crate::query::IdSort;
use crate::store::{store_request_action, use_recycle_store, RecycleStateStoreFields};

fn sort_indicator(sort: Option<IdSort>) -> &'static str {
    match sort {
        None => " ↕",
        Some(IdSort::Ascend) => " ↑",
        Some(IdSort::Descend) => " ↓",
    }
}

#[component]
pub fn ArchiveTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_recycle_store();

    let page_checked = move || {
        let rows = store.rows().get();
        store.selection().with(|s| s.covers(&rows))
    };
    let toggle_page = move |_| {
        let rows = store.rows().get_untracked();
        store.selection().write().toggle_page(&rows);
    };

    let header = {
        let ctx = ctx.clone();
        move || {
            store.columns().get().visible().into_iter().map(|column| {
                let label = column.label().map(|msg| ctx.t(msg)).unwrap_or("ID");
                match column {
                    Column::Id => view! {
                        <th class="col-id sortable" on:click=move |_| store.query().write().toggle_sort()>
                            {label}
                            <span class="sort-indicator">{move || sort_indicator(store.query().get().sort)}</span>
                        </th>
                    }.into_any(),
                    other => view! {
                        <th class=format!("col-{:?}", other).to_lowercase()>{label}</th>
                    }.into_any(),
                }
            }).collect_view()
        }
    };

    let empty_text = {
        let ctx = ctx.clone();
        move || {
            if store.loading().get() { ctx.t(Msg::Loading) } else { ctx.t(Msg::Empty) }
        }
    };

    view! {
        <div class="table-wrapper" class:loading=move || store.loading().get()>
            <table class="recycle-table">
                <thead>
                    <tr>
                        <th class="col-check">
                            <input type="checkbox" prop:checked=page_checked on:change=toggle_page />
                        </th>
                        {header}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.rows().get()
                        key=|row| row.id
                        children=move |row| view! { <ArchiveRow row=row /> }
                    />
                </tbody>
            </table>
            <Show when=move || store.rows().with(|rows| rows.is_empty())>
                <div class="table-empty">{empty_text.clone()}</div>
            </Show>
        </div>
    }
}

/// One table row, rendering only the visible columns
#[component]
fn ArchiveRow(row: Archive) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_recycle_store();
    let id = row.id;

    let cells = move || {
        let ctx = ctx.clone();
        let row = row.clone();
        store.columns().get().visible().into_iter().map(move |column| {
            let ctx = ctx.clone();
            let row = row.clone();
            match column {
                Column::Id => view! { <td class="col-id">{row.id}</td> }.into_any(),
                Column::Title => {
                    let title = row.title.clone();
                    view! {
                        <td class="col-title">
                            <a class="archive-title" on:click=move |_| open_preview(&ctx, store, row.clone())>
                                {title}
                            </a>
                        </td>
                    }.into_any()
                }
                Column::Thumb => {
                    let thumb = row.has_thumb().then(|| view! { <img src=row.thumb.clone() class="list-thumb" alt="" /> });
                    view! { <td class="col-thumb">{thumb}</td> }.into_any()
                }
                Column::ModuleName => view! { <td class="col-module">{row.module_name.clone()}</td> }.into_any(),
                Column::Actions => {
                    let recover = ctx.t(Msg::ActionRecover);
                    let delete = ctx.t(Msg::ActionDelete);
                    view! {
                        <td class="col-actions">
                            <a class="text-red" class:disabled=move || store.running().get() on:click=move |_| store_request_action(&store, BatchAction::Recover, vec![id])>
                                {recover}
                            </a>
                            <a class="text-red" class:disabled=move || store.running().get() on:click=move |_| store_request_action(&store, BatchAction::Delete, vec![id])>
                                {delete}
                            </a>
                        </td>
                    }.into_any()
                }
            }
        }).collect_view()
    };

    view! {
        <tr class:selected=move || store.selection().with(|s| s.contains(id))>
            <td class="col-check">
                <input
                    type="checkbox"
                    prop:checked=move || store.selection().with(|s| s.contains(id))
                    on:change=move |_| store.selection().write().toggle(id)
                />
            </td>
            {cells}
        </tr>
    }
}
