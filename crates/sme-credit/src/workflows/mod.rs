pub mod assessment;
pub mod scoring;
pub mod statement;
