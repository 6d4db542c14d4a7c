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

//! User playlists.
//!
//! A playlist is a named, ordered list of media ids. It never owns media, the
//! [`Catalog`] does, so anything that needs media attributes (durations, the
//! summary) takes the catalog as an argument.
//!
//! The same media may appear any number of times in a playlist.

use crate::{
    error::{LibraryError, Result},
    model::{
        catalog::Catalog,
        media::{Media, MediaId},
    },
    util::format::format_duration,
};

#[derive(Debug, Clone)]
pub(crate) struct Playlist {
    name: String,
    items: Vec<MediaId>,
}

impl Playlist {
    /// # Errors
    ///
    /// Returns [`LibraryError::Validation`] if `name` is blank.
    pub(crate) fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LibraryError::validation("Playlist name is required"));
        }

        Ok(Self {
            name: name.to_string(),
            items: vec![],
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// The case-insensitive key this playlist is stored under.
    pub(crate) fn key(&self) -> String {
        playlist_key(&self.name)
    }

    pub(crate) fn items(&self) -> &[MediaId] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn add_media(&mut self, media: &Media) {
        self.items.push(media.id());
    }

    /// Removes the first occurrence of `id`, reporting whether anything was
    /// removed.
    pub(crate) fn remove_first_occurrence(&mut self, id: &MediaId) -> bool {
        match self.items.iter().position(|item| item == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the item at a 1-based position.
    pub(crate) fn remove_at(&mut self, position: usize) -> Option<MediaId> {
        let index = position.checked_sub(1)?;
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Removes every occurrence of `id`, returning how many were removed.
    pub(crate) fn remove_all(&mut self, id: &MediaId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item != id);
        before - self.items.len()
    }

    /// Sums the durations of every item. Ids missing from the catalog count
    /// as zero.
    pub(crate) fn total_duration_seconds(&self, catalog: &Catalog) -> u64 {
        self.items
            .iter()
            .filter_map(|id| catalog.get_by_id(id).ok())
            .map(|media| u64::from(media.duration_secs()))
            .sum()
    }

    /// Renders a multi-line description: a header with the name, item count
    /// and total duration, followed by the numbered items.
    pub(crate) fn summary(&self, catalog: &Catalog) -> String {
        let mut out = format!(
            "Playlist: {} | Items: {} | Duration: {}\n",
            self.name,
            self.len(),
            format_duration(self.total_duration_seconds(catalog))
        );

        for (index, id) in self.items.iter().enumerate() {
            let line = match catalog.get_by_id(id) {
                Ok(media) => format!("{:02}. {}\n", index + 1, media),
                Err(_) => format!("{:02}. <missing {}>\n", index + 1, id),
            };
            out.push_str(&line);
        }

        out
    }
}

pub(crate) fn playlist_key(name: &str) -> String {
    name.trim().to_lowercase()
}
