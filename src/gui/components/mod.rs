// src/gui/components/mod.rs
pub mod board_view;
pub mod command_panel;
pub mod input_bar;
pub mod pieces_modal;
