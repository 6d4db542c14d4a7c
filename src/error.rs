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

//! Domain error types.
//!
//! Every failure raised by the catalog, playlist and user models is a
//! [`LibraryError`]. None of them are fatal, the console loop reports them and
//! carries on.

use thiserror::Error;

use crate::model::media::MediaId;

pub(crate) type Result<T> = std::result::Result<T, LibraryError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum LibraryError {
    /// A constructor or setter rejected its input.
    #[error("{0}")]
    Validation(String),

    #[error("Media already in the catalog: {0}")]
    DuplicateMedia(String),

    #[error("Media not found: {0}")]
    MediaNotFound(MediaId),

    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    #[error("No user registered, use 'register <name> <email>' first")]
    NotLoggedIn,

    #[error("A playlist named '{0}' already exists")]
    NameConflict(String),
}

impl LibraryError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
