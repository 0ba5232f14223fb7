/// Kantodex - first-generation creature catalog toolkit.
///
/// Core library providing catalog access over the public PokeAPI service,
/// normalized entity records, side-by-side comparison, bounded comparison
/// history, and two deterministic quiz engines.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
