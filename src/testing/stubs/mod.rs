pub mod failing_source;
pub mod scripted_driver;
pub mod vec_source;

pub use failing_source::FailingSource;
pub use scripted_driver::{Scripted, ScriptedDriver};
pub use vec_source::VecSource;
