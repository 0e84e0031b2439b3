pub mod anim;
pub mod app;
pub mod cluster;
pub mod config;
pub mod widgets;
