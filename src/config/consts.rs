// src/config/consts.rs

// Net config
pub const DEFAULT_HTTP_PORT: u16 = 80;
pub const TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("jestad_scrape/", env!("CARGO_PKG_VERSION"));

// Export
pub const CSV_SEP: char = ',';
pub const TSV_SEP: char = '\t';
