pub mod csv_renderer;
pub mod date_resolver;
pub mod extractor;
