//! User activity aggregation.
//!
//! The admin-only side path: given the full transaction log, compute one
//! user's filtered activity and a derived net total. Independent of the
//! account-scoped role machinery; the staff gate lives at the boundary.

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::{ActivityReport, DateRange, ReportEntry};
