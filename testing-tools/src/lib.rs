//! Stand-ins for the chain client stack so the wrapper, the pool reader and
//! the dashboard can be driven without a network.
pub mod mocks;
