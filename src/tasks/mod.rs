// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application task processing.
//!
//! This module implements the command pattern used by the console loop. Each
//! parsed line becomes an [`AppTask`], which [`handle_task`] runs against the
//! [`Session`] and turns into a [`Reply`] for the loop to print.
//!
//! A task either completes or fails as a whole, the handlers validate their
//! input before touching the session.

mod handlers;

use anyhow::Result;
use tracing::debug;

use crate::{
    model::{genre::Genre, media::MediaId, search::SearchQuery},
    session::Session,
};

use handlers::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppTask {
    Register { name: String, email: String },
    WhoAmI,

    CreatePlaylist(String),
    RemovePlaylist(String),
    ListPlaylists,
    ShowPlaylist(String),

    ListCatalog,
    Search(SearchQuery),

    AddToPlaylist { pick: usize, playlist: String },
    RemoveFromPlaylist { position: usize, playlist: String },
    RemoveIdFromPlaylist { id: MediaId, playlist: String },

    AddMedia(NewMedia),
    EditMedia { pick: usize, edit: MediaEdit },
    DeleteMedia(usize),

    Stats,
    ListGenres,
    Help,
    Exit,
}

/// The fields of media to be added to the catalog, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NewMedia {
    Song {
        title: String,
        artist: String,
        duration_secs: u32,
        genre: Genre,
    },
    Podcast {
        title: String,
        host: String,
        duration_secs: u32,
        episodes: Option<u32>,
    },
    Audiobook {
        title: String,
        author: String,
        narrator: String,
        duration_secs: u32,
    },
}

/// A single field change applied to catalog media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MediaEdit {
    Title(String),
    Artist(String),
    Duration(u32),
    Genre(Genre),
    Episodes(u32),
    Narrator(String),
}

/// What the console loop should do after a task.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Reply {
    /// Print the heading, if any, then each line.
    Show {
        heading: Option<String>,
        lines: Vec<String>,
    },
    Exit,
}

impl Reply {
    pub(crate) fn message(text: impl Into<String>) -> Self {
        Reply::Show {
            heading: None,
            lines: vec![text.into()],
        }
    }

    pub(crate) fn listing(heading: impl Into<String>, lines: Vec<String>) -> Self {
        Reply::Show {
            heading: Some(heading.into()),
            lines,
        }
    }
}

/// Orchestrates the execution of a single task.
///
/// # Errors
///
/// Returns the domain error raised by the task. The session is unchanged
/// when a task fails.
pub(crate) fn handle_task(task: AppTask, session: &mut Session) -> Result<Reply> {
    debug!(?task, "Handling task");

    match task {
        AppTask::Register { name, email } => register(session, &name, &email),
        AppTask::WhoAmI => who_am_i(session),

        AppTask::CreatePlaylist(name) => create_playlist(session, &name),
        AppTask::RemovePlaylist(name) => remove_playlist(session, &name),
        AppTask::ListPlaylists => list_playlists(session),
        AppTask::ShowPlaylist(name) => show_playlist(session, &name),

        AppTask::ListCatalog => list_catalog(session),
        AppTask::Search(query) => search(session, &query),

        AppTask::AddToPlaylist { pick, playlist } => add_to_playlist(session, pick, &playlist),
        AppTask::RemoveFromPlaylist { position, playlist } => {
            remove_from_playlist(session, position, &playlist)
        }
        AppTask::RemoveIdFromPlaylist { id, playlist } => {
            remove_id_from_playlist(session, &id, &playlist)
        }

        AppTask::AddMedia(media) => add_media(session, media),
        AppTask::EditMedia { pick, edit } => edit_media(session, pick, edit),
        AppTask::DeleteMedia(pick) => delete_media(session, pick),

        AppTask::Stats => stats(session),
        AppTask::ListGenres => Ok(list_genres()),
        AppTask::Help => Ok(help()),
        AppTask::Exit => Ok(Reply::Exit),
    }
}
