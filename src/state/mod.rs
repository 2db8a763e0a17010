//! Application state module

mod app_state;
pub mod completion;
mod forms;
mod registration;
mod steps;
mod update;
mod wizard;

pub use app_state::*;
pub use forms::*;
pub use registration::*;
pub use steps::*;
pub use update::*;
pub use wizard::*;
