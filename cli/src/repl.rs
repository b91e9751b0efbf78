//! Line-oriented command loop over a `MovieListClient`.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use movie_core::{EditDialog, EditField, MovieForm, MovieListClient, Transport};
use thiserror::Error;

use crate::view::TerminalView;

pub const HELP: &str = "\
commands:
  list | refresh      reload the movie list from the server
  search <text>       show movies whose title or genre contains <text>
  add                 add a movie (title, genre, year)
  edit <row>          change the movie shown at <row>
  delete <row>        delete the movie shown at <row>
  help                show this text
  quit | exit         leave
at a prompt, an empty answer keeps the value in brackets and '.' cancels
";

/// A line the user can type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Search(String),
    Add,
    Edit(usize),
    Delete(usize),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{0}' needs a row number")]
    MissingRow(&'static str),
    #[error("'{0}' is not a row number")]
    BadRow(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        match word {
            "" | "list" | "refresh" => Ok(Command::List),
            "search" | "/" => Ok(Command::Search(rest.to_string())),
            "add" => Ok(Command::Add),
            "edit" => Ok(Command::Edit(row_number("edit", rest)?)),
            "delete" | "rm" => Ok(Command::Delete(row_number("delete", rest)?)),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn row_number(command: &'static str, text: &str) -> Result<usize, CommandError> {
    if text.is_empty() {
        return Err(CommandError::MissingRow(command));
    }
    text.parse().map_err(|_| CommandError::BadRow(text.to_string()))
}

/// Reads answers from `input`, writing questions to `out`.
pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// One line without its terminator, or `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Ask with a bracketed default. Empty keeps `current`, `.` or end of
    /// input cancels.
    pub fn ask_with_default(&mut self, question: &str, current: &str) -> io::Result<Option<String>> {
        let reply = self.read_line(&format!("{question} [{current}] "))?;
        Ok(match reply.as_deref() {
            None | Some(".") => None,
            Some("") => Some(current.to_string()),
            Some(text) => Some(text.to_string()),
        })
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<R: BufRead, W: Write> EditDialog for Prompter<R, W> {
    fn ask(&mut self, field: EditField, prefill: &str) -> Option<String> {
        match self.ask_with_default(field.label(), prefill) {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, "could not read answer");
                None
            }
        }
    }
}

/// The command loop. Keeps the add-movie form between attempts so a failed
/// submit can be retried without retyping.
pub struct Repl<R, W> {
    prompter: Prompter<R, W>,
    form: MovieForm,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(prompter: Prompter<R, W>) -> Self {
        Self {
            prompter,
            form: MovieForm::default(),
        }
    }

    pub fn prompter(&self) -> &Prompter<R, W> {
        &self.prompter
    }

    pub fn form(&self) -> &MovieForm {
        &self.form
    }

    /// Run until `quit` or end of input.
    pub fn run<T, VW>(&mut self, client: &mut MovieListClient<T, TerminalView<VW>>) -> io::Result<()>
    where
        T: Transport,
        VW: Write,
    {
        while let Some(line) = self.prompter.read_line("> ")? {
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, client)?,
                Err(err) => self.prompter.say(&err.to_string())?,
            }
        }
        Ok(())
    }

    fn execute<T, VW>(&mut self, command: Command, client: &mut MovieListClient<T, TerminalView<VW>>) -> io::Result<()>
    where
        T: Transport,
        VW: Write,
    {
        // Operation failures are already logged by the client.
        match command {
            Command::List => {
                let _ = client.fetch();
            }
            Command::Search(query) => client.filter(&query),
            Command::Add => {
                if self.fill_form()? {
                    let _ = client.create(&mut self.form);
                }
            }
            Command::Edit(number) | Command::Delete(number) => {
                let Some(row) = client.view().row(number) else {
                    return self.prompter.say(&format!("no row {number}"));
                };
                let action = if matches!(command, Command::Edit(_)) {
                    row.edit_action()
                } else {
                    row.delete_action()
                };
                let _ = client.dispatch(action, &mut self.prompter);
            }
            Command::Help => write!(self.prompter.out, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    /// Returns `false` if the user cancelled; the form keeps what was typed
    /// so far either way.
    fn fill_form(&mut self) -> io::Result<bool> {
        let Some(title) = self.prompter.ask_with_default("Title:", &self.form.title)? else {
            return Ok(false);
        };
        self.form.title = title;
        let Some(genre) = self.prompter.ask_with_default("Genre:", &self.form.genre)? else {
            return Ok(false);
        };
        self.form.genre = genre;
        let Some(year) = self.prompter.ask_with_default("Year:", &self.form.year)? else {
            return Ok(false);
        };
        self.form.year = year;
        Ok(true)
    }
}
