pub mod source;
pub mod types;

pub use source::{Environment, ProcessEnv};
pub use types::{MetadataKey, RequestContext, NOT_SET};
