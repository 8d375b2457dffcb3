pub mod list;
pub mod show;

pub use list::*;
pub use show::*;
