pub mod card;
pub mod aggregate;
pub mod rank;
pub mod controls;
pub mod apply;
pub mod wasm;

pub use card::*;
pub use aggregate::*;
pub use rank::*;
pub use controls::*;
pub use apply::*;

#[cfg(test)]
mod tests;
