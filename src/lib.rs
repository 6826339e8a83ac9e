pub use addr::*;
pub use link::*;
pub use route::*;
pub use select::*;
pub use state::*;
pub use tables::*;

pub mod config;
pub mod daemon;
pub mod error;
pub mod handle;
pub mod monitor;
pub mod nl_type;
pub mod reconcile;

mod addr;
mod link;
mod route;
mod select;
mod state;
mod tables;
mod utils;
