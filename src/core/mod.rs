//! Módulo core - Lógica central do build

pub mod apps;
pub mod builder;
pub mod config;
pub mod deploy;
pub mod error;
pub mod qemu;
pub mod runner;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;
