pub mod admin;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod gate;
pub mod history;
pub mod log;
pub mod panel;
pub mod range;
pub mod status;
