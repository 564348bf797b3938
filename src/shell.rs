// Line-oriented terminal session driving a TaskStore

use colored::{Color, Colorize};
use eyre::{Context, Result, eyre};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

use crate::config::Config;
use crate::models::{Category, Task, TaskId};
use crate::store::TaskStore;

const BELL: &str = "\x07";

const HELP: &str = "\
Commands:
  add <Category> <text>   add a task
  done <n>                toggle task n as done
  delete <n>              delete task n
  clear <Category>        remove every task in a category
  clear-all               remove every task
  list                    show tasks
  json                    print tasks and categories as JSON
  help                    show this help
  quit                    leave";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { category: String, text: String },
    Done(usize),
    Delete(usize),
    Clear(String),
    ClearAll,
    List,
    Json,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = eyre::Report;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_start();
        let (word, raw_rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = raw_rest.trim();

        match word {
            "add" => {
                // A single separator follows the category; the rest is the text verbatim
                let args = raw_rest.trim_start();
                let (category, text) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
                Ok(Command::Add {
                    category: category.to_string(),
                    text: text.to_string(),
                })
            }
            "done" => parse_row(rest).map(Command::Done),
            "delete" | "rm" => parse_row(rest).map(Command::Delete),
            "clear" => Ok(Command::Clear(rest.to_string())),
            "clear-all" => Ok(Command::ClearAll),
            "list" | "ls" => Ok(Command::List),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(eyre!("Unknown command '{}', type 'help'", other)),
        }
    }
}

fn parse_row(arg: &str) -> Result<usize> {
    arg.parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| eyre!("Expected a task number, got '{}'", arg))
}

/// Interactive session state: the store plus the row numbering last shown
pub struct Session {
    store: TaskStore,
    config: Config,
    prompt: bool,
    /// Task ids in the order they were numbered by the latest rendering
    view: Vec<TaskId>,
}

impl Session {
    /// Fails if the config would not render, e.g. an invalid `time_format`
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store: TaskStore::new(),
            config,
            prompt: false,
            view: Vec::new(),
        })
    }

    /// Print a prompt before reading each line
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Read commands until end of input or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        info!("Session started");
        let mut lines = input.lines();

        loop {
            if self.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }

            let Some(line) = lines.next() else { break };
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, out)?,
                Err(e) => writeln!(out, "{}", e)?,
            }
        }

        info!(tasks = self.store.len(), "Session ended");
        Ok(())
    }

    /// Apply one command and write whatever it displays
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        debug!(?command, "Executing command");
        match command {
            Command::Add { category, text } => {
                // Rejected submissions are dropped without a message
                if self.store.add(&text, &category).is_ok() {
                    if self.config.bell {
                        write!(out, "{}", BELL)?;
                    }
                    self.render(out)?;
                }
            }
            Command::Done(row) => {
                if let Some(id) = self.row_id(row) {
                    self.store.toggle_done(id);
                }
                self.render(out)?;
            }
            Command::Delete(row) => {
                if let Some(id) = self.row_id(row) {
                    self.store.delete(id);
                }
                self.render(out)?;
            }
            Command::Clear(name) => match name.parse::<Category>() {
                Ok(category) => {
                    self.store.clear_category(category);
                    self.render(out)?;
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::ClearAll => {
                self.store.clear_all();
                self.render(out)?;
            }
            Command::List => self.render(out)?,
            Command::Json => {
                let json = serde_json::to_string_pretty(&self.store.snapshot())?;
                writeln!(out, "{}", json)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn row_id(&self, row: usize) -> Option<TaskId> {
        row.checked_sub(1).and_then(|i| self.view.get(i)).copied()
    }

    /// Write the grouped task list and renumber rows
    pub fn render<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.view.clear();

        if self.store.is_empty() {
            writeln!(out, "No tasks.")?;
            return Ok(());
        }

        for &category in self.store.categories() {
            writeln!(out, "{}", self.heading(category))?;
            for task in self.store.tasks_by_category(category) {
                self.view.push(task.id);
                let row = self.row(self.view.len(), task);
                writeln!(out, "{}", row)?;
            }
        }
        Ok(())
    }

    fn heading(&self, category: Category) -> String {
        if !self.config.color {
            return category.to_string();
        }
        let (r, g, b) = category.rgb();
        category
            .label()
            .color(Color::TrueColor { r, g, b })
            .bold()
            .to_string()
    }

    fn row(&self, number: usize, task: &Task) -> String {
        let time = task.time_added.format(&self.config.time_format);
        let status = match (task.done, self.config.show_done_label) {
            (true, true) => "[x] Done",
            (true, false) => "[x]",
            (false, _) => "[ ]",
        };

        let text = if self.config.color && task.done {
            task.text.strikethrough().dimmed().to_string()
        } else {
            task.text.clone()
        };

        format!("  {:>2}. {}  {}  {}", number, time, text, status)
    }
}
