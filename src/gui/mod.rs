// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod hover;

pub use app::run;
