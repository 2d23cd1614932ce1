pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod math;
pub mod network;
pub mod rng;
pub mod sample;
pub mod sweep;
pub mod train;
