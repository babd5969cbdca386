pub mod add;
pub mod backup;
pub mod chart;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod gallery;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod status;
