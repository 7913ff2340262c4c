//! One generator per dataset.
//!
//! Each module exposes `generate_with` taking an explicit RNG and a
//! `generate` convenience using the thread-local one.

pub mod balance_sheet;
pub mod cash_flow;
pub mod channel_revenue;
pub mod expenses;
pub mod income_statement;
pub mod pos;
pub mod roster;

pub use balance_sheet::RunningBalances;
pub use pos::Counters;
pub use roster::{Roster, WorkHistory};
