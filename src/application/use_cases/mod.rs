pub mod scm_types;

pub use scm_types::{ScmTypesConfig, ScmTypesUseCase};
