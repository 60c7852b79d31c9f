//! The process bridge: one analyzer invocation from command line to result

pub mod decode;
pub mod process_bridge;

pub use decode::{ANALYSIS_FAILED_SENTINEL, DecodeOptions, decode_outcome};
pub use process_bridge::ProcessBridge;
