mod client;
mod parser;
mod types;

pub use client::*;
pub use types::*;

#[cfg(test)]
mod tests;
