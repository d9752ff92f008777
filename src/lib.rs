//! Aggregates test outcomes across plans and runs, and produces report
//! documents describing the result tree.

pub mod config;
pub mod model;
pub mod report;
pub mod ux;
