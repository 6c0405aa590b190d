//! Tests for the move module.

use super::*;
use plancraft_core::score::SimpleScore;
use plancraft_scoring::{RecordingScoreDirector, ScoreDirector, SimpleScoreDirector};
use plancraft_test::task::{create_task_descriptor, get_priority, set_priority};
use plancraft_test::{Task, TaskSolution};

mod arena;
mod change;
mod swap;

fn create_director(
    tasks: Vec<Task>,
) -> SimpleScoreDirector<TaskSolution, impl Fn(&TaskSolution) -> SimpleScore> {
    SimpleScoreDirector::new(TaskSolution::new(tasks), create_task_descriptor(), |_| {
        SimpleScore::of(0)
    })
}
