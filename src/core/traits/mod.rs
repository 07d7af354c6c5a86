pub mod log_source;
pub mod sink;
