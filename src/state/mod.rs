pub mod catalog;
pub mod dashboard;
pub mod image_source;
pub mod login;
pub mod notify;
pub mod product_form;
pub mod sidebar;
pub mod tag_list;
