//! The dashboard's screens as explicit state machines.
//!
//! Every screen is a tagged union reduced by its own action type. A reducer
//! never touches the network: when a transition needs the chain it returns
//! an [`Effect`], which the [`DashboardDriver`] executes before feeding the
//! outcome back in as the next action.
pub mod app;
pub mod driver;
pub mod pool;
pub mod render;
pub mod session;
pub mod token;

pub use app::{Action, Dashboard, Effect, PoolDecimals};
pub use driver::DashboardDriver;
pub use pool::{PoolAction, PoolScreen};
pub use render::{PoolPanel, render};
pub use session::{Session, SessionAction};
pub use token::{Pending, Phase, TokenAction, TokenMeta, TokenScreen, TransferForm};
