pub mod api_utils;
pub mod cache;
pub mod components;
pub mod format;
pub mod icons;
pub mod modal_stack;
pub mod toast;
