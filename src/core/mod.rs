pub mod birthdate;
pub mod calculator;
pub mod config;
pub mod log;
pub mod logic;
