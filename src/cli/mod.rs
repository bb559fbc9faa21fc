pub mod answers;
pub mod batch;
pub mod clean;
pub mod exam;
pub mod scrub;
