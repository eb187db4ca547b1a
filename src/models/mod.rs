pub mod allocation;
pub mod league;
pub mod request;
pub mod slots;

// Re-export all public types for convenience
pub use allocation::{Allocation, ClearOutcome, ClearRequest, ImportSummary, Scope};
pub use league::{DivisionRecord, DivisionRef, FieldInfo, LeagueInfo};
pub use request::{PracticeRequest, RequestSlot, RequestStatus, ReviewRequest};
pub use slots::{ApplyOutcome, GenerateRequest, GeneratedSlot, SlotConflict, SlotPreview};
