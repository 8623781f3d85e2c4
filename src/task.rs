use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::locale::{Labels, Language};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Variant-specific data of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Simple,
    Deadline { due: NaiveDateTime },
    Important { priority: i32 },
}

/// Labels and date format used to turn a task into a display line.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub labels: &'static Labels,
    pub date_format: String,
}

impl RenderStyle {
    pub fn new(language: Language, date_format: impl Into<String>) -> Self {
        Self {
            labels: language.labels(),
            date_format: date_format.into(),
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::new(Language::default(), DEFAULT_DATE_FORMAT)
    }
}

/// One unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    category: String,
    completed: bool,
    kind: TaskKind,
}

impl Task {
    pub fn new(description: impl Into<String>, category: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            category: category.into(),
            completed: false,
            kind,
        }
    }

    pub fn simple(description: impl Into<String>, category: impl Into<String>) -> Self {
        Self::new(description, category, TaskKind::Simple)
    }

    pub fn deadline(
        description: impl Into<String>,
        category: impl Into<String>,
        due: NaiveDateTime,
    ) -> Self {
        Self::new(description, category, TaskKind::Deadline { due })
    }

    pub fn important(
        description: impl Into<String>,
        category: impl Into<String>,
        priority: i32,
    ) -> Self {
        Self::new(description, category, TaskKind::Important { priority })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Overwrite the completion flag. Unlike [`Task::mark_completed`] this can
    /// move a task back to pending.
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Ordering hook for sortable containers. Every pair of tasks compares
    /// equal, so stable sorts keep insertion order.
    pub fn compare(&self, _other: &Task) -> Ordering {
        Ordering::Equal
    }

    /// Render with the default Portuguese labels and date format.
    pub fn render(&self) -> String {
        self.render_with(&RenderStyle::default())
    }

    pub fn render_with(&self, style: &RenderStyle) -> String {
        let labels = style.labels;
        let status = if self.completed {
            labels.completed
        } else {
            labels.pending
        };
        let head = match &self.kind {
            TaskKind::Simple => labels.simple,
            TaskKind::Deadline { .. } => labels.deadline,
            TaskKind::Important { .. } => labels.important,
        };
        let extra = match &self.kind {
            TaskKind::Simple => String::new(),
            TaskKind::Deadline { due } => {
                format!(" | {}: {}", labels.due, due.format(&style.date_format))
            }
            TaskKind::Important { priority } => format!(" | {}: {priority}", labels.priority),
        };
        format!(
            "{head}: {} | {}: {}{extra} | {}: {status}",
            self.description, labels.category, self.category, labels.status
        )
    }
}
