// region:    --- Modules

mod applier;
mod error;
mod fbdev;
mod patch_op;
mod patch_report;

pub use applier::*;
pub use error::*;
pub use fbdev::*;
pub use patch_op::*;
pub use patch_report::*;

// endregion: --- Modules
