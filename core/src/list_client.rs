//! `MovieListClient`: fetch, filter, render and write operations over the
//! movies API.
//!
//! # Design
//! The client owns the cache and the view and is their only writer. Every
//! successful write is followed by a full list fetch; the server's answer
//! replaces the cache wholesale. Failures are logged through `tracing` and
//! returned, and leave cache, view and form exactly as they were.

use crate::api::MovieApi;
use crate::cache::MovieCache;
use crate::edit::{run_dialog, EditDialog, EditSession};
use crate::error::ApiError;
use crate::filter::filter_movies;
use crate::form::MovieForm;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::render::{render, ListView, RowAction};
use crate::types::{Movie, MovieId, MovieUpdate};

pub struct MovieListClient<T, V> {
    api: MovieApi,
    transport: T,
    view: V,
    cache: MovieCache,
}

impl<T: Transport, V: ListView> MovieListClient<T, V> {
    /// Starts with an empty cache; call [`fetch`](Self::fetch) for the
    /// initial load.
    pub fn new(api: MovieApi, transport: T, view: V) -> Self {
        Self {
            api,
            transport,
            view,
            cache: MovieCache::new(),
        }
    }

    pub fn cache(&self) -> &MovieCache {
        &self.cache
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Reload the whole collection and show it unfiltered. On failure the
    /// previous cache and display stay in place.
    pub fn fetch(&mut self) -> Result<(), ApiError> {
        let request = self.api.build_list_movies();
        let result = self
            .send(request)
            .and_then(|response| self.api.parse_list_movies(response));
        match result {
            Ok(movies) => {
                tracing::debug!(count = movies.len(), "fetched movies");
                self.cache.replace_all(movies);
                self.view.replace(render(self.cache.movies()));
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching movies");
                Err(err)
            }
        }
    }

    /// Show the cached movies matching `query`. Never touches the network or
    /// the cache.
    pub fn filter(&mut self, query: &str) {
        let display = render(filter_movies(self.cache.movies(), query));
        self.view.replace(display);
    }

    /// Submit the add-movie form. On success the form is cleared and the list
    /// refetched; on failure the form keeps its text.
    pub fn create(&mut self, form: &mut MovieForm) -> Result<Movie, ApiError> {
        let result = self
            .api
            .build_create_movie(&form.to_new_movie())
            .and_then(|request| self.send(request))
            .and_then(|response| self.api.parse_create_movie(response));
        match result {
            Ok(created) => {
                tracing::debug!(id = %created.id, "created movie");
                form.reset();
                self.refresh_after_write();
                Ok(created)
            }
            Err(err) => {
                tracing::error!(error = %err, "error adding movie");
                Err(err)
            }
        }
    }

    pub fn begin_edit(&self, movie: &Movie) -> EditSession {
        EditSession::begin(movie)
    }

    /// Send a confirmed edit and refetch on success.
    pub fn update(&mut self, update: &MovieUpdate) -> Result<Movie, ApiError> {
        let result = self
            .api
            .build_update_movie(&update.id, update)
            .and_then(|request| self.send(request))
            .and_then(|response| self.api.parse_update_movie(response));
        match result {
            Ok(updated) => {
                tracing::debug!(id = %updated.id, "updated movie");
                self.refresh_after_write();
                Ok(updated)
            }
            Err(err) => {
                tracing::error!(id = %update.id, error = %err, "error updating movie");
                Err(err)
            }
        }
    }

    /// Ask `dialog` for new values and send the update if all three were
    /// given. `Ok(None)` means the user backed out and nothing was sent.
    pub fn edit<D: EditDialog + ?Sized>(&mut self, movie: &Movie, dialog: &mut D) -> Result<Option<Movie>, ApiError> {
        match run_dialog(self.begin_edit(movie), dialog) {
            Some(update) => self.update(&update).map(Some),
            None => {
                tracing::debug!(id = %movie.id, "edit abandoned");
                Ok(None)
            }
        }
    }

    /// Delete by id and refetch on success. Nothing is removed locally ahead
    /// of the server.
    pub fn delete(&mut self, id: MovieId) -> Result<(), ApiError> {
        let request = self.api.build_delete_movie(&id);
        let result = self
            .send(request)
            .and_then(|response| self.api.parse_delete_movie(response));
        match result {
            Ok(()) => {
                tracing::debug!(%id, "deleted movie");
                self.refresh_after_write();
                Ok(())
            }
            Err(err) => {
                tracing::error!(%id, error = %err, "error deleting movie");
                Err(err)
            }
        }
    }

    /// Run the operation a row affordance stands for.
    pub fn dispatch<D: EditDialog + ?Sized>(&mut self, action: RowAction, dialog: &mut D) -> Result<(), ApiError> {
        match action {
            RowAction::Edit(movie) => self.edit(&movie, dialog).map(|_| ()),
            RowAction::Delete(id) => self.delete(id),
        }
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "sending request");
        Ok(self.transport.execute(request)?)
    }

    // The write already landed; a failed reload is logged by `fetch` and does
    // not turn the write into an error.
    fn refresh_after_write(&mut self) {
        let _ = self.fetch();
    }
}
