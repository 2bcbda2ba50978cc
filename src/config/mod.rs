// src/config/mod.rs
pub mod consts;
pub mod settings;
pub mod state;
