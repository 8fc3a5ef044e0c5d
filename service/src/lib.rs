#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

pub mod address;
pub mod app;
pub mod backend;
pub mod config;
pub mod http;
pub mod pokedex;
pub mod pokemon;
pub mod rest;
pub mod service_info;
