use chrono::{NaiveDate, NaiveDateTime};

use crate::collection::TaskList;
use crate::task::Task;

/// Midnight on the given calendar day.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// A list holding `n` simple tasks named `task-1` .. `task-n`.
pub fn list_of(n: usize) -> TaskList {
    let mut list = TaskList::new();
    for i in 1..=n {
        list.add(Task::simple(format!("task-{i}"), "test"));
    }
    list
}
