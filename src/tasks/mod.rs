mod latest_level;
mod response;

pub use latest_level::{LatestLevelTask, LevelReport, TaskError};
pub use response::{LevelResponse, ResponseBody};
