// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod core;
pub mod params;
pub mod specs;

pub mod file;
pub mod net;
pub mod runner;
