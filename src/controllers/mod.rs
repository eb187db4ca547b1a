pub mod allocations;
pub mod requests;

pub use allocations::{AllocationConsole, ClearResult};
pub use requests::{RequestConsole, RequestCounts, ReviewResult};
