//! Módulo de comandos do ysos

pub mod build;
pub mod clean;
pub mod clippy;
pub mod launch;
pub mod run;
