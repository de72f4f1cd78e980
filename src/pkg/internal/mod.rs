pub mod adaptors;
pub mod ai;
pub mod pdf;
