//! Edit flow: collect replacement title, year and genre for one movie.
//!
//! # Design
//! `EditSession` is a small state machine the host steps through one answer
//! at a time, so questions can be shown in a dialog and answered whenever the
//! user gets to it; nothing here blocks. `EditDialog` is the convenience seam
//! for hosts that can answer synchronously.

use crate::form::parse_year;
use crate::types::{Movie, MovieUpdate};

/// The three questions, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Year,
    Genre,
}

impl EditField {
    pub fn label(&self) -> &'static str {
        match self {
            EditField::Title => "Enter new Title:",
            EditField::Year => "Enter new Year:",
            EditField::Genre => "Enter new Genre:",
        }
    }
}

/// Result of feeding one answer to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditStep {
    /// Ask this next.
    Prompt(EditField),
    /// All three answers given; send this update.
    Confirmed(MovieUpdate),
    /// An answer was missing or empty; send nothing.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Asking(EditField),
    Done,
}

#[derive(Debug, Clone)]
pub struct EditSession {
    original: Movie,
    title: Option<String>,
    year: Option<String>,
    state: State,
}

impl EditSession {
    pub fn begin(movie: &Movie) -> Self {
        Self {
            original: movie.clone(),
            title: None,
            year: None,
            state: State::Asking(EditField::Title),
        }
    }

    /// The question awaiting an answer, or `None` once finished.
    pub fn pending(&self) -> Option<EditField> {
        match self.state {
            State::Asking(field) => Some(field),
            State::Done => None,
        }
    }

    /// Current value of `field`, used to pre-fill the question.
    pub fn prefill(&self, field: EditField) -> String {
        match field {
            EditField::Title => self.original.title.clone(),
            EditField::Year => self.original.year.map(|y| y.to_string()).unwrap_or_default(),
            EditField::Genre => self.original.genre.clone(),
        }
    }

    /// Feed the answer for the pending question. `None` means the user
    /// dismissed it. Answering a finished session returns `Cancelled`.
    pub fn answer(&mut self, reply: Option<String>) -> EditStep {
        let State::Asking(field) = self.state else {
            return EditStep::Cancelled;
        };
        let reply = match reply {
            Some(text) if !text.is_empty() => text,
            _ => {
                self.state = State::Done;
                return EditStep::Cancelled;
            }
        };
        match field {
            EditField::Title => {
                self.title = Some(reply);
                self.state = State::Asking(EditField::Year);
                EditStep::Prompt(EditField::Year)
            }
            EditField::Year => {
                self.year = Some(reply);
                self.state = State::Asking(EditField::Genre);
                EditStep::Prompt(EditField::Genre)
            }
            EditField::Genre => {
                self.state = State::Done;
                EditStep::Confirmed(MovieUpdate {
                    id: self.original.id.clone(),
                    title: self.title.take().unwrap_or_default(),
                    year: self.year.as_deref().and_then(parse_year),
                    genre: reply,
                })
            }
        }
    }
}

/// A source of answers for an [`EditSession`].
pub trait EditDialog {
    /// Show `field`'s question pre-filled with `prefill`; `None` on cancel.
    fn ask(&mut self, field: EditField, prefill: &str) -> Option<String>;
}

/// Drive `session` to completion with `dialog`. Returns the update to send,
/// or `None` if the user backed out.
pub fn run_dialog<D: EditDialog + ?Sized>(mut session: EditSession, dialog: &mut D) -> Option<MovieUpdate> {
    while let Some(field) = session.pending() {
        let prefill = session.prefill(field);
        let reply = dialog.ask(field, &prefill);
        match session.answer(reply) {
            EditStep::Prompt(_) => continue,
            EditStep::Confirmed(update) => return Some(update),
            EditStep::Cancelled => return None,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MovieId;

    fn her() -> Movie {
        Movie {
            id: MovieId::Num(2),
            title: "Her".to_string(),
            year: Some(2013),
            genre: "Romance".to_string(),
        }
    }

    struct Scripted {
        replies: Vec<Option<&'static str>>,
        asked: Vec<(EditField, String)>,
    }

    impl EditDialog for Scripted {
        fn ask(&mut self, field: EditField, prefill: &str) -> Option<String> {
            self.asked.push((field, prefill.to_string()));
            self.replies.remove(0).map(str::to_string)
        }
    }

    #[test]
    fn three_answers_confirm_the_update() {
        let mut session = EditSession::begin(&her());
        assert_eq!(session.pending(), Some(EditField::Title));
        assert_eq!(session.answer(Some("Her".into())), EditStep::Prompt(EditField::Year));
        assert_eq!(session.answer(Some("2014".into())), EditStep::Prompt(EditField::Genre));
        let step = session.answer(Some("Drama".into()));
        assert_eq!(
            step,
            EditStep::Confirmed(MovieUpdate {
                id: MovieId::Num(2),
                title: "Her".to_string(),
                year: Some(2014),
                genre: "Drama".to_string(),
            })
        );
        assert_eq!(session.pending(), None);
    }

    #[test]
    fn cancelling_year_abandons_the_edit() {
        let mut session = EditSession::begin(&her());
        session.answer(Some("Her".into()));
        assert_eq!(session.answer(None), EditStep::Cancelled);
        assert_eq!(session.pending(), None);
        assert_eq!(session.answer(Some("Drama".into())), EditStep::Cancelled);
    }

    #[test]
    fn empty_answer_counts_as_cancel() {
        let mut session = EditSession::begin(&her());
        assert_eq!(session.answer(Some(String::new())), EditStep::Cancelled);
    }

    #[test]
    fn non_numeric_year_is_forwarded_as_none() {
        let mut dialog = Scripted {
            replies: vec![Some("Her"), Some("later"), Some("Romance")],
            asked: Vec::new(),
        };
        let update = run_dialog(EditSession::begin(&her()), &mut dialog).unwrap();
        assert_eq!(update.year, None);
    }

    #[test]
    fn dialog_sees_current_values_as_prefill() {
        let mut dialog = Scripted {
            replies: vec![Some("Her"), Some("2013"), None],
            asked: Vec::new(),
        };
        assert!(run_dialog(EditSession::begin(&her()), &mut dialog).is_none());
        assert_eq!(
            dialog.asked,
            vec![
                (EditField::Title, "Her".to_string()),
                (EditField::Year, "2013".to_string()),
                (EditField::Genre, "Romance".to_string()),
            ]
        );
    }
}
