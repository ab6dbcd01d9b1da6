// Infrastructure layer - Config, codecs, and streaming adapters
pub mod config;
pub mod csv_export;
pub mod ndjson_stream;
