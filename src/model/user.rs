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

//! The session user and their playlists.
//!
//! Playlist names are unique per user, ignoring case and surrounding
//! whitespace. Playlists are kept in the order they were created.

use tracing::info;

use crate::{
    error::{LibraryError, Result},
    model::{
        media::MediaId,
        playlist::{Playlist, playlist_key},
    },
};

#[derive(Debug)]
pub(crate) struct User {
    name: String,
    email: String,
    playlists: Vec<Playlist>,
}

impl User {
    /// # Errors
    ///
    /// Returns [`LibraryError::Validation`] if the name is blank or the email
    /// does not contain an `@`.
    pub(crate) fn new(name: &str, email: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LibraryError::validation("Name is required"));
        }

        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(LibraryError::validation("Invalid e-mail address"));
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            playlists: vec![],
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn email(&self) -> &str {
        &self.email
    }

    /// Creates an empty playlist.
    ///
    /// # Errors
    ///
    /// * [`LibraryError::Validation`] if the name is blank.
    /// * [`LibraryError::NameConflict`] if a playlist with the same name,
    ///   ignoring case, already exists.
    pub(crate) fn create_playlist(&mut self, name: &str) -> Result<&mut Playlist> {
        let playlist = Playlist::new(name)?;
        if self.position(name).is_some() {
            return Err(LibraryError::NameConflict(playlist.name().to_string()));
        }

        info!(user = %self.name, playlist = playlist.name(), "Created playlist");

        self.playlists.push(playlist);
        let last = self.playlists.len() - 1;
        Ok(&mut self.playlists[last])
    }

    /// # Errors
    ///
    /// Returns [`LibraryError::PlaylistNotFound`] if there is no such playlist.
    pub(crate) fn playlist(&self, name: &str) -> Result<&Playlist> {
        let index = self.require(name)?;
        Ok(&self.playlists[index])
    }

    /// # Errors
    ///
    /// Returns [`LibraryError::PlaylistNotFound`] if there is no such playlist.
    pub(crate) fn playlist_mut(&mut self, name: &str) -> Result<&mut Playlist> {
        let index = self.require(name)?;
        Ok(&mut self.playlists[index])
    }

    /// # Errors
    ///
    /// Returns [`LibraryError::PlaylistNotFound`] if there is no such playlist.
    pub(crate) fn remove_playlist(&mut self, name: &str) -> Result<Playlist> {
        let index = self.require(name)?;
        let playlist = self.playlists.remove(index);

        info!(user = %self.name, playlist = playlist.name(), "Removed playlist");

        Ok(playlist)
    }

    /// Playlists in creation order.
    pub(crate) fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Drops every reference to `id` from every playlist, returning the
    /// number of references removed.
    pub(crate) fn forget_media(&mut self, id: &MediaId) -> usize {
        self.playlists
            .iter_mut()
            .map(|playlist| playlist.remove_all(id))
            .sum()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = playlist_key(name);
        self.playlists.iter().position(|p| p.key() == key)
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.position(name)
            .ok_or_else(|| LibraryError::PlaylistNotFound(name.trim().to_string()))
    }
}
