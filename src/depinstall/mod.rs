pub mod command;
pub mod config;
pub mod error;
pub mod installer;
pub mod packages;
pub mod presentation;
pub mod runner;
