//! Shared tile pools: bag and discard, factory displays, the center.

pub mod bag;
pub mod center;
pub mod factory;

pub use bag::{Draw, TileSupply};
pub use center::{Center, CenterTake};
pub use factory::Factory;
