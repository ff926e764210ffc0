// src/gui/components/mod.rs
pub mod action_buttons;
pub mod capping_controls;
pub mod chart;
pub mod data_table;
pub mod tabs;
