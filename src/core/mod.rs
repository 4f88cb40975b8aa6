//! Command logic, generic over the date granularity.

pub mod check;
pub mod convert;
pub mod show;

pub use check::{CheckLogic, CheckOutcome, RowFailure};
pub use convert::ConvertLogic;
pub use show::ShowLogic;
