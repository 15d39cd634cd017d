//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog and admin surfaces from state owned by the
//! pages, plus the app-wide toast host and navigation drawer.

pub mod image_picker;
pub mod price_tag;
pub mod product_card;
pub mod product_dialog;
pub mod product_form_dialog;
pub mod product_table;
pub mod sidebar;
pub mod tag_list_editor;
pub mod toast_host;
