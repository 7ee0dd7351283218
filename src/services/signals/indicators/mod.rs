//! Technical indicator implementations.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use bollinger::{bollinger_bands, BollingerBands, BollingerResult};
pub use ema::ema;
pub use macd::{macd, Macd, MacdResult};
pub use rsi::{rsi, Rsi};
pub use sma::{sma, Sma};
