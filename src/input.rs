use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Error, Result};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    List,
    Delete,
    Complete,
    EditDescription,
    EditCategory,
    EditStatus,
    Percentage,
    Exit,
    Unknown(i64),
}

/// Task variant picked when adding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindChoice {
    Simple,
    Deadline,
    Important,
}

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

fn parse_integer(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| Error::MalformedInput(format!("not an integer: {trimmed:?}")))
}

pub fn parse_menu_action(raw: &str) -> Result<MenuAction> {
    let action = match parse_integer(raw)? {
        1 => MenuAction::Add,
        2 => MenuAction::List,
        3 => MenuAction::Delete,
        4 => MenuAction::Complete,
        5 => MenuAction::EditDescription,
        6 => MenuAction::EditCategory,
        7 => MenuAction::EditStatus,
        8 => MenuAction::Percentage,
        0 => MenuAction::Exit,
        n => MenuAction::Unknown(n),
    };
    Ok(action)
}

/// Parse a 1-based position. Range checking is left to the task list.
pub fn parse_position(raw: &str) -> Result<i64> {
    parse_integer(raw)
}

pub fn parse_priority(raw: &str) -> Result<i32> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| Error::MalformedInput(format!("not a priority: {trimmed:?}")))
}

pub fn parse_status(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "sim" | "s" | "yes" | "y" => Ok(true),
        "false" | "não" | "nao" | "n" | "no" => Ok(false),
        other => Err(Error::MalformedInput(format!("not a status: {other:?}"))),
    }
}

/// Parse a due date. Date-only forms resolve to midnight.
pub fn parse_due(raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();
    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Ok(d.and_time(NaiveTime::MIN));
        }
    }
    Err(Error::MalformedInput(format!("not a date: {trimmed:?}")))
}

/// Parse the task kind prompt. Blank input means a simple task.
pub fn parse_kind(raw: &str) -> Result<KindChoice> {
    match raw.trim() {
        "" | "1" => Ok(KindChoice::Simple),
        "2" => Ok(KindChoice::Deadline),
        "3" => Ok(KindChoice::Important),
        other => Err(Error::MalformedInput(format!("not a task kind: {other:?}"))),
    }
}
