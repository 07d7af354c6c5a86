pub mod log_read;
pub mod log_record;
pub mod resolved_date;
