pub mod processing;
pub mod report;
