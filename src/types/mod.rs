pub mod chart;
pub mod series;
pub mod signals;

pub use chart::*;
pub use series::*;
pub use signals::*;
