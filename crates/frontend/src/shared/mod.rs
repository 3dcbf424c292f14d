pub mod api_utils;
pub mod list_utils;
pub mod request_guard;
