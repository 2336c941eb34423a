#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod engine;
mod fade;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
mod round;
#[cfg(feature = "std")]
pub mod screen;

pub use common::*;
pub use config::*;
pub use engine::*;
pub use fade::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use round::*;
