pub mod ai;
pub mod probes;
pub mod resumes;
pub mod ui;
