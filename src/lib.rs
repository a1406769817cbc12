mod components;
mod descriptor;
mod error;
mod event;
mod hooks;
mod kind;
mod validity;

pub mod demo;
pub mod logging;
pub mod style;

pub use components::*;
pub use descriptor::*;
pub use error::*;
pub use event::*;
pub use hooks::*;
pub use kind::*;
pub use validity::*;
