mod client;
mod identity;

pub use client::*;
pub use identity::*;
