pub mod config;
pub mod controller;
pub mod scroll;
pub mod selection;
pub mod stagger;
pub mod table;
