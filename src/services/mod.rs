pub mod scanner;
pub mod signals;

pub use scanner::{UniverseScanner, SymbolOutcome};
pub use signals::{analyze, SignalStore};
