pub mod client;
pub mod error;
pub mod normalize;
mod parse;
pub mod types;

pub use client::BillboardClient;
pub use error::ChartError;
pub use normalize::{build_snapshot, split_artist_credit};
pub use types::ChartEntry;
