//! Projection of a movie sequence into displayable rows.
//!
//! Rows carry their actions as typed values ([`RowAction`]) closed over the
//! row's own movie, so a host binds buttons or keys without re-deriving the
//! record from display text.

use std::fmt;

use crate::types::{Movie, MovieId};

/// Shown in place of the list when there is nothing to display.
pub const NO_RESULTS: &str = "No movies found matching your criteria.";

/// What a row's edit or delete affordance does when triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Edit(Movie),
    Delete(MovieId),
}

/// One displayed movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRow {
    movie: Movie,
}

impl MovieRow {
    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    /// `Title (year) - genre`.
    pub fn label(&self) -> String {
        let year = match self.movie.year {
            Some(year) => year.to_string(),
            None => "?".to_string(),
        };
        format!("{} ({}) - {}", self.movie.title, year, self.movie.genre)
    }

    pub fn edit_action(&self) -> RowAction {
        RowAction::Edit(self.movie.clone())
    }

    pub fn delete_action(&self) -> RowAction {
        RowAction::Delete(self.movie.id.clone())
    }
}

/// The complete contents of the list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListDisplay {
    Rows(Vec<MovieRow>),
    Placeholder(&'static str),
}

impl ListDisplay {
    pub fn rows(&self) -> &[MovieRow] {
        match self {
            ListDisplay::Rows(rows) => rows,
            ListDisplay::Placeholder(_) => &[],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ListDisplay::Placeholder(_))
    }
}

impl fmt::Display for ListDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListDisplay::Placeholder(text) => writeln!(f, "{text}"),
            ListDisplay::Rows(rows) => {
                for (index, row) in rows.iter().enumerate() {
                    writeln!(f, "{:>3}. {}", index + 1, row.label())?;
                }
                Ok(())
            }
        }
    }
}

/// Build the display for `movies`. Always total: an empty input yields the
/// placeholder.
pub fn render<'a, I>(movies: I) -> ListDisplay
where
    I: IntoIterator<Item = &'a Movie>,
{
    let rows: Vec<MovieRow> = movies
        .into_iter()
        .map(|movie| MovieRow { movie: movie.clone() })
        .collect();
    if rows.is_empty() {
        ListDisplay::Placeholder(NO_RESULTS)
    } else {
        ListDisplay::Rows(rows)
    }
}

/// Destination for rendered output. Each call replaces whatever was shown
/// before.
pub trait ListView {
    fn replace(&mut self, display: ListDisplay);
}
