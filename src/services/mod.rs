pub mod api;
pub mod http;
pub mod render;
pub mod view;
