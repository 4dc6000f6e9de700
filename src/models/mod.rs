pub mod report;
pub mod transaction;

pub use report::*;
pub use transaction::*;
