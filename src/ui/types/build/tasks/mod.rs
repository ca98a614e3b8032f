use crate::tasks::LatestLevelTask;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::TaskChoice;

mod latest_level;

pub fn build_task(choice: TaskChoice) -> Result<LatestLevelTask, BuildError> {
    match choice {
        TaskChoice::LatestLevel(p) => LatestLevelTask::try_from(p),
    }
}
