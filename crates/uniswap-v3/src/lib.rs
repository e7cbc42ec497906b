//! Read-only access to a single Uniswap V3 pool and the factory that
//! deployed it.
pub mod reader;

pub use reader::PoolReader;
