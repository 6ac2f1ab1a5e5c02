pub mod api_client;
pub mod api_utils;
pub mod crud;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod toast;
