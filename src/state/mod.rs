//! Application state module

mod app_state;
mod content;
mod counter;
mod forms;
mod navigation;
mod reveal;
mod scroll;
mod typewriter;

pub use app_state::*;
pub use content::*;
pub use forms::*;
pub use navigation::*;
