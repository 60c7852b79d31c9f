pub mod file_type;
pub mod serde_helpers;
