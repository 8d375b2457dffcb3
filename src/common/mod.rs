/// Shared error type and result helpers
pub mod error;
pub mod result;

pub use error::PluggableScmError;
pub use result::{OptionExt, ScmResult};
