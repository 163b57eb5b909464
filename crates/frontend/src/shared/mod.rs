pub mod api_utils;
pub mod components;
pub mod config;
pub mod data_table;
pub mod date_utils;
pub mod forms;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
pub mod resource;
pub mod toast;
pub mod visibility;
