// src/core/mod.rs

pub mod csv;
pub mod dedup;
pub mod html;
pub mod markup;
pub mod matcher;
pub mod pipeline;
pub mod record;
pub mod render;
