pub mod commands;
pub mod gateway;
pub mod operations;
