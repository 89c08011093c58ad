//! Investigator engine library.
//!
//! Storage ports, configuration and use cases around the investigator sheet
//! rules in `investigator-domain`.
//!
//! ## Structure
//!
//! - `use_cases/` - Load, edit and save orchestration
//! - `infrastructure/` - Port traits and their implementations
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
