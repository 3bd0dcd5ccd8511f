pub mod credential;
pub mod record;
pub mod sheets;

// Re-export commonly used types
pub use credential::*;
pub use record::*;
