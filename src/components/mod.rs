//! UI Components
//!
//! Leptos components of the recycle page.

mod archive_table;
mod batch_toolbar;
mod column_settings;
mod confirm_dialog;
mod pagination_bar;
mod preview_modal;
mod recycle_page;
mod toast_host;

pub use archive_table::ArchiveTable;
pub use batch_toolbar::BatchToolbar;
pub use column_settings::ColumnSettings;
pub use confirm_dialog::ConfirmDialog;
pub use pagination_bar::PaginationBar;
pub use preview_modal::PreviewModal;
pub use recycle_page::RecyclePage;
pub use toast_host::ToastHost;
