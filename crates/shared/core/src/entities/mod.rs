mod applied_price;
mod key;
mod timeframe;

pub use applied_price::AppliedPrice;
pub use key::{ANY_SYMBOL, ParameterKey};
pub use timeframe::Timeframe;
