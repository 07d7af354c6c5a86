pub mod file_log_source;
