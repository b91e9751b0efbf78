use std::io::Write;

use movie_core::{ListDisplay, ListView, MovieRow};

/// Prints each rendered list in full and remembers it so row numbers typed
/// by the user can be resolved.
pub struct TerminalView<W> {
    out: W,
    shown: Option<ListDisplay>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out, shown: None }
    }

    /// 1-based, as printed.
    pub fn row(&self, number: usize) -> Option<&MovieRow> {
        let index = number.checked_sub(1)?;
        self.shown.as_ref()?.rows().get(index)
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> ListView for TerminalView<W> {
    fn replace(&mut self, display: ListDisplay) {
        if let Err(err) = write!(self.out, "{display}").and_then(|()| self.out.flush()) {
            tracing::warn!(error = %err, "could not write movie list");
        }
        self.shown = Some(display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movie_core::{render, Movie, MovieId, NO_RESULTS};

    fn movies() -> Vec<Movie> {
        vec![
            Movie {
                id: MovieId::Num(1),
                title: "Dune".to_string(),
                year: Some(2021),
                genre: "Sci-Fi".to_string(),
            },
            Movie {
                id: MovieId::Num(2),
                title: "Her".to_string(),
                year: Some(2013),
                genre: "Romance".to_string(),
            },
        ]
    }

    #[test]
    fn prints_numbered_rows() {
        let mut view = TerminalView::new(Vec::new());
        view.replace(render(&movies()));
        let text = String::from_utf8(view.writer().clone()).unwrap();
        assert_eq!(text, "  1. Dune (2021) - Sci-Fi\n  2. Her (2013) - Romance\n");
    }

    #[test]
    fn row_numbers_are_one_based() {
        let mut view = TerminalView::new(Vec::new());
        view.replace(render(&movies()));
        assert_eq!(view.row(2).unwrap().movie().id, MovieId::Num(2));
        assert!(view.row(0).is_none());
        assert!(view.row(3).is_none());
    }

    #[test]
    fn placeholder_has_no_rows() {
        let mut view = TerminalView::new(Vec::new());
        view.replace(render(&Vec::<Movie>::new()));
        assert!(view.row(1).is_none());
        let text = String::from_utf8(view.writer().clone()).unwrap();
        assert_eq!(text.trim_end(), NO_RESULTS);
    }
}
