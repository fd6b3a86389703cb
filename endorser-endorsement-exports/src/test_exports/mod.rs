mod config;
mod tools;

pub use tools::*;
