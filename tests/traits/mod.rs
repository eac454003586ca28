pub mod into_error_source;
