pub mod issue;
pub mod outcome;
pub mod request;
pub mod result;

// Re-export commonly used types
pub use issue::Issue;
pub use outcome::ProcessOutcome;
pub use request::{CorrelationId, InvocationRequest};
pub use result::InvocationResult;
