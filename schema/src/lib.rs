// Pokédex Battle Schema - Shared type definitions
// This crate holds the static data shared by the battle core: the 18 elemental
// types with their effectiveness chart, and the named stat set.

// Re-export the main types
pub use pokemon_types::*;
pub use stats::*;

pub mod pokemon_types;
pub mod stats;
