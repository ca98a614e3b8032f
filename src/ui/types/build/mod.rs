mod error;
mod estimators;
mod sources;
mod tasks;

pub use error::BuildError;

pub use estimators::build_estimator;
pub use sources::build_source;
pub use tasks::build_task;
