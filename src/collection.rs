use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::task::{RenderStyle, Task};

/// Result of [`TaskList::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// No tasks registered. Distinct from an empty entry list so callers can
    /// print a dedicated message.
    Empty,
    /// `(position, rendering)` pairs in insertion order, positions 1-based.
    Entries(Vec<(usize, String)>),
}

/// Ordered, in-memory task collection addressed by 1-based position.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    style: RenderStyle,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: RenderStyle) -> Self {
        Self {
            tasks: Vec::new(),
            style,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn get(&self, position: i64) -> Option<&Task> {
        usize::try_from(position)
            .ok()
            .and_then(|p| p.checked_sub(1))
            .and_then(|i| self.tasks.get(i))
    }

    /// Append a task and return its rendering for confirmation.
    pub fn add(&mut self, task: Task) -> String {
        let rendered = task.render_with(&self.style);
        self.tasks.push(task);
        debug!(position = self.tasks.len(), "task added");
        rendered
    }

    pub fn list(&self) -> Listing {
        if self.tasks.is_empty() {
            return Listing::Empty;
        }
        Listing::Entries(
            self.tasks
                .iter()
                .enumerate()
                .map(|(i, task)| (i + 1, task.render_with(&self.style)))
                .collect(),
        )
    }

    /// Remove and return the task at `position`. Later tasks shift down by one.
    pub fn delete_at(&mut self, position: i64) -> Result<Task> {
        let index = self.index_of(position)?;
        let task = self.tasks.remove(index);
        debug!(position, remaining = self.tasks.len(), "task deleted");
        Ok(task)
    }

    pub fn complete_at(&mut self, position: i64) -> Result<()> {
        self.task_mut(position)?.mark_completed();
        debug!(position, "task completed");
        Ok(())
    }

    pub fn edit_description(&mut self, position: i64, description: &str) -> Result<()> {
        self.task_mut(position)?.set_description(description);
        debug!(position, "description edited");
        Ok(())
    }

    pub fn edit_category(&mut self, position: i64, category: &str) -> Result<()> {
        self.task_mut(position)?.set_category(category);
        debug!(position, "category edited");
        Ok(())
    }

    /// Overwrite the completion flag directly, which allows reverting a
    /// completed task to pending.
    pub fn edit_status(&mut self, position: i64, completed: bool) -> Result<()> {
        self.task_mut(position)?.set_completed(completed);
        debug!(position, completed, "status edited");
        Ok(())
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }

    /// Share of completed tasks in `[0, 100]`; `0.0` for an empty list.
    pub fn completion_percentage(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.tasks.len() as f64 * 100.0
    }

    fn task_mut(&mut self, position: i64) -> Result<&mut Task> {
        let index = self.index_of(position)?;
        Ok(&mut self.tasks[index])
    }

    fn index_of(&self, position: i64) -> Result<usize> {
        let len = self.tasks.len();
        match usize::try_from(position) {
            Ok(p) if (1..=len).contains(&p) => Ok(p - 1),
            _ => {
                warn!(position, len, "position out of range");
                Err(Error::InvalidIndex { position, len })
            }
        }
    }
}
