pub mod advisor;
pub mod parse;
pub mod report;
