//! Fieldtime League Scheduling Admin Console Library
//!
//! Client-side orchestration for a league scheduling API: CSV template
//! generation, availability-allocation import/list/clear, slot generation
//! preview/apply, and practice-request review. All business rules live
//! behind the API; this library manages the calls and the local display
//! state they feed.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fieldtime_admin::api::ScheduleApi;
//! use fieldtime_admin::config::Config;
//! use fieldtime_admin::controllers::AllocationConsole;
//! use fieldtime_admin::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let api = ScheduleApi::new(&config)?;
//!
//!     let mut console = AllocationConsole::new(api);
//!     console.load_dependencies().await;
//!     console.scope_filter = "10U".to_string();
//!     console.list().await;
//!
//!     for allocation in &console.allocations {
//!         println!("{} {}", allocation.scope, allocation.field_key);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod constants;
pub mod controllers;
pub mod csv_template;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod season;

// Re-export commonly used types for convenience
pub use api::ScheduleApi;
pub use config::Config;
pub use controllers::{AllocationConsole, RequestConsole};
pub use csv_template::{build_template_csv, template_filename};
pub use error::AppError;
pub use models::{Allocation, PracticeRequest, RequestStatus, Scope};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
