pub mod benchmark;
pub mod interactive;
pub mod ports;
