// src/core/mod.rs

pub mod annotate;
pub mod board;
pub mod commands;
pub mod demo;
pub mod extract;
pub mod group;
pub mod host;
pub mod speech;
