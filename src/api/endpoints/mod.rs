//! API endpoint handlers.
//!
//! One module per resource; handlers stay thin and delegate to the
//! store, mapper and lifecycle modules.

pub mod claims;
pub mod encounters;
pub mod patients;
pub mod reports;
pub mod system;
