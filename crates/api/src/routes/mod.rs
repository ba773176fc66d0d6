pub mod analyze;
pub mod generate;
pub mod notify;
pub mod stats;
pub mod trending;
