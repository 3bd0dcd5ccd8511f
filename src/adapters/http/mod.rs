pub mod api_error;
pub mod handlers;
pub mod router;
