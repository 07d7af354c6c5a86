pub mod console_sink;
pub mod smtp_sink;
