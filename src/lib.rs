pub mod auth;
pub mod balance;
pub mod catalog;
pub mod client;
pub mod commentary;
pub mod config;
pub mod energy;
pub mod error;
pub mod firestore;
pub mod food_log;
pub mod intake;
pub mod models;
pub mod nutrients;
pub mod period;
pub mod recommendations;
pub mod report;
pub mod semaphore;

pub use client::VitaGoClient;
pub use config::ClientConfig;
pub use error::Error;
