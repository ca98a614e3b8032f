pub mod core;
pub mod estimation;
pub mod sources;
pub mod tasks;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
