//! Model types for test results and their aggregation.

pub mod aggregate;
pub mod logs;
pub mod notify;
pub mod outcome;
pub mod result;

pub use logs::Log;
pub use notify::NotifyConfig;
pub use outcome::Outcome;
pub use result::{PlanResult, RunReport, TestResult};
