pub mod client;
mod employees;
pub mod types;

pub use client::*;
pub use employees::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
