use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::collection::{Listing, TaskList};
use crate::error::{Error, Result};
use crate::input::{self, KindChoice, MenuAction};
use crate::locale::Messages;
use crate::task::Task;

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Outcome of a single prompt.
enum Answer<T> {
    Got(T),
    /// Malformed input, already reported to the user.
    Rejected,
    /// Input stream closed.
    Closed,
}

impl<T> Answer<T> {
    fn flow(&self) -> Flow {
        match self {
            Answer::Closed => Flow::Exit,
            Answer::Got(_) | Answer::Rejected => Flow::Continue,
        }
    }
}

/// Interactive menu loop over a line reader and an output stream.
///
/// The shell owns the session's only [`TaskList`]. It turns raw lines into
/// typed arguments through [`crate::input`], so malformed text never reaches
/// the list.
pub struct Shell<R, W> {
    tasks: TaskList,
    messages: &'static Messages,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(tasks: TaskList, messages: &'static Messages, input: R, output: W) -> Self {
        Self {
            tasks,
            messages,
            input,
            output,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Consume the shell and hand back its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the exit action or end of input.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                debug!("end of input");
                break;
            };
            let action = match input::parse_menu_action(&line) {
                Ok(action) => action,
                Err(e) => {
                    debug!(error = %e, "rejected menu input");
                    self.say(self.messages.not_an_integer)?;
                    continue;
                }
            };
            if self.dispatch(action)? == Flow::Exit {
                break;
            }
        }
        info!(tasks = self.tasks.len(), "session ended");
        Ok(())
    }

    fn dispatch(&mut self, action: MenuAction) -> Result<Flow> {
        debug!(?action, "dispatching");
        let flow = match action {
            MenuAction::Add => self.add()?,
            MenuAction::List => {
                writeln!(self.output, "\n{}", self.messages.tasks_header)?;
                self.print_listing()?;
                Flow::Continue
            }
            MenuAction::Delete => self.delete()?,
            MenuAction::Complete => self.complete()?,
            MenuAction::EditDescription => self.edit_description()?,
            MenuAction::EditCategory => self.edit_category()?,
            MenuAction::EditStatus => self.edit_status()?,
            MenuAction::Percentage => {
                let pct = self.tasks.completion_percentage();
                writeln!(self.output, "{} {pct:.1}%", self.messages.percentage)?;
                Flow::Continue
            }
            MenuAction::Exit => {
                self.say(self.messages.goodbye)?;
                Flow::Exit
            }
            MenuAction::Unknown(n) => {
                debug!(option = n, "unknown menu option");
                self.say(self.messages.invalid_option)?;
                Flow::Continue
            }
        };
        Ok(flow)
    }

    fn add(&mut self) -> Result<Flow> {
        let m = self.messages;
        let description = match self.read_text(m.ask_description)? {
            Answer::Got(d) => d,
            other => return Ok(other.flow()),
        };
        let category = match self.read_text(m.ask_category)? {
            Answer::Got(c) => c,
            other => return Ok(other.flow()),
        };
        let kind = match self.ask(m.ask_kind, input::parse_kind, m.invalid_option)? {
            Answer::Got(k) => k,
            other => return Ok(other.flow()),
        };

        let task = match kind {
            KindChoice::Simple => Task::simple(description, category),
            KindChoice::Deadline => match self.ask(m.ask_due, input::parse_due, m.not_a_date)? {
                Answer::Got(due) => Task::deadline(description, category, due),
                other => return Ok(other.flow()),
            },
            KindChoice::Important => {
                match self.ask(m.ask_priority, input::parse_priority, m.not_an_integer)? {
                    Answer::Got(priority) => Task::important(description, category, priority),
                    other => return Ok(other.flow()),
                }
            }
        };

        let rendered = self.tasks.add(task);
        self.say(m.added)?;
        self.say(&rendered)?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let m = self.messages;
        let position = match self.ask(m.ask_delete, input::parse_position, m.not_an_integer)? {
            Answer::Got(p) => p,
            other => return Ok(other.flow()),
        };
        let outcome = self.tasks.delete_at(position).map(|_| ());
        self.report(outcome, m.deleted, m.delete_failed)
    }

    fn complete(&mut self) -> Result<Flow> {
        let m = self.messages;
        let position = match self.ask(m.ask_complete, input::parse_position, m.not_an_integer)? {
            Answer::Got(p) => p,
            other => return Ok(other.flow()),
        };
        let outcome = self.tasks.complete_at(position);
        self.report(outcome, m.completed, m.complete_failed)
    }

    fn edit_description(&mut self) -> Result<Flow> {
        let m = self.messages;
        let position =
            match self.ask(m.ask_edit_description, input::parse_position, m.not_an_integer)? {
                Answer::Got(p) => p,
                other => return Ok(other.flow()),
            };
        let description = match self.read_text(m.ask_new_description)? {
            Answer::Got(d) => d,
            other => return Ok(other.flow()),
        };
        let outcome = self.tasks.edit_description(position, &description);
        self.report(outcome, m.description_edited, m.edit_failed)
    }

    fn edit_category(&mut self) -> Result<Flow> {
        let m = self.messages;
        let position =
            match self.ask(m.ask_edit_category, input::parse_position, m.not_an_integer)? {
                Answer::Got(p) => p,
                other => return Ok(other.flow()),
            };
        let category = match self.read_text(m.ask_new_category)? {
            Answer::Got(c) => c,
            other => return Ok(other.flow()),
        };
        let outcome = self.tasks.edit_category(position, &category);
        self.report(outcome, m.category_edited, m.edit_failed)
    }

    fn edit_status(&mut self) -> Result<Flow> {
        let m = self.messages;
        let position = match self.ask(m.ask_edit_status, input::parse_position, m.not_an_integer)? {
            Answer::Got(p) => p,
            other => return Ok(other.flow()),
        };
        let status = match self.ask(m.ask_new_status, input::parse_status, m.not_a_status)? {
            Answer::Got(s) => s,
            other => return Ok(other.flow()),
        };
        let outcome = self.tasks.edit_status(position, status);
        self.report(outcome, m.status_edited, m.edit_failed)
    }

    /// Print the outcome of a positional operation, then the updated listing.
    fn report(&mut self, outcome: Result<()>, ok: &str, failed: &str) -> Result<Flow> {
        match outcome {
            Ok(()) => self.say(ok)?,
            Err(Error::InvalidIndex { .. }) => self.say(failed)?,
            Err(e) => return Err(e),
        }
        writeln!(self.output, "\n{}", self.messages.updated_header)?;
        self.print_listing()?;
        Ok(Flow::Continue)
    }

    fn print_listing(&mut self) -> Result<()> {
        match self.tasks.list() {
            Listing::Empty => self.say(self.messages.empty)?,
            Listing::Entries(entries) => {
                for (position, rendered) in entries {
                    writeln!(self.output, "{position}. {rendered}")?;
                }
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        for line in self.messages.menu {
            writeln!(self.output, "{line}")?;
        }
        writeln!(self.output, "\n{}", self.messages.choose_option)?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `question` and take the reply as free-form text.
    fn read_text(&mut self, question: &str) -> Result<Answer<String>> {
        self.say(question)?;
        self.output.flush()?;
        Ok(match self.read_line()? {
            Some(line) => Answer::Got(line),
            None => Answer::Closed,
        })
    }

    /// Print `question`, read one line and parse it. Malformed input is
    /// reported with `rejected` and yields [`Answer::Rejected`].
    fn ask<T>(
        &mut self,
        question: &str,
        parse: impl FnOnce(&str) -> Result<T>,
        rejected: &str,
    ) -> Result<Answer<T>> {
        self.say(question)?;
        self.output.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(Answer::Closed);
        };
        match parse(&line) {
            Ok(value) => Ok(Answer::Got(value)),
            Err(Error::MalformedInput(detail)) => {
                debug!(%detail, "rejected input");
                self.say(rejected)?;
                Ok(Answer::Rejected)
            }
            Err(e) => Err(e),
        }
    }

    /// Read one line without its terminator. Bytes that are not valid UTF-8
    /// are replaced rather than failing the session.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}
