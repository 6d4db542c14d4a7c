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

//! Playable media items.
//!
//! A [`Media`] is a song, a podcast or an audiobook. The attributes shared by
//! every kind live on the struct itself, while the kind specific data is
//! carried by the [`MediaKind`] payload.
//!
//! Each item is given a random identity when it is created. That identity
//! never changes and is the only thing compared by equality, two songs with
//! identical attributes are still different media.

use std::{fmt, str::FromStr};

use uuid::Uuid;

use crate::{
    error::{LibraryError, Result},
    model::genre::Genre,
    util::format::format_duration,
};

const UNKNOWN_NARRATOR: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct MediaId(Uuid);

impl MediaId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MediaId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MediaKind {
    Song,
    Podcast { episodes: u32 },
    Audiobook { narrator: String },
}

#[derive(Debug, Clone)]
pub(crate) struct Media {
    id: MediaId,
    title: String,
    artist: String,
    duration_secs: u32,
    genre: Genre,
    kind: MediaKind,
}

impl Media {
    /// Creates a song.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Validation`] if the title or artist are blank,
    /// the duration is zero, or the genre is one of the non-musical sentinels.
    pub(crate) fn song(title: &str, artist: &str, duration_secs: u32, genre: Genre) -> Result<Self> {
        check_song_genre(genre)?;
        Self::new(title, artist, duration_secs, genre, MediaKind::Song)
    }

    /// Creates a podcast episode, hosted by `host`, with a single episode.
    pub(crate) fn podcast(title: &str, host: &str, duration_secs: u32) -> Result<Self> {
        Self::new(
            title,
            host,
            duration_secs,
            Genre::Podcast,
            MediaKind::Podcast { episodes: 1 },
        )
    }

    /// Creates an audiobook. A blank narrator is recorded as "Unknown".
    pub(crate) fn audiobook(
        title: &str,
        author: &str,
        narrator: &str,
        duration_secs: u32,
    ) -> Result<Self> {
        let narrator = match narrator.trim() {
            "" => UNKNOWN_NARRATOR.to_string(),
            name => name.to_string(),
        };

        Self::new(
            title,
            author,
            duration_secs,
            Genre::Audiobook,
            MediaKind::Audiobook { narrator },
        )
    }

    fn new(
        title: &str,
        artist: &str,
        duration_secs: u32,
        genre: Genre,
        kind: MediaKind,
    ) -> Result<Self> {
        Ok(Self {
            id: MediaId::generate(),
            title: required(title, "Title is required")?,
            artist: required(artist, "Artist/author/host is required")?,
            duration_secs: positive(duration_secs)?,
            genre,
            kind,
        })
    }

    pub(crate) fn id(&self) -> MediaId {
        self.id
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    /// The artist of a song, the host of a podcast or the author of an
    /// audiobook.
    pub(crate) fn artist(&self) -> &str {
        &self.artist
    }

    pub(crate) fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub(crate) fn genre(&self) -> Genre {
        self.genre
    }

    pub(crate) fn kind(&self) -> &MediaKind {
        &self.kind
    }

    pub(crate) fn type_name(&self) -> &'static str {
        match self.kind {
            MediaKind::Song => "Song",
            MediaKind::Podcast { .. } => "Podcast",
            MediaKind::Audiobook { .. } => "Audiobook",
        }
    }

    pub(crate) fn set_title(&mut self, title: &str) -> Result<()> {
        self.title = required(title, "Invalid title")?;
        Ok(())
    }

    pub(crate) fn set_artist(&mut self, artist: &str) -> Result<()> {
        self.artist = required(artist, "Invalid artist/author/host")?;
        Ok(())
    }

    pub(crate) fn set_duration_secs(&mut self, duration_secs: u32) -> Result<()> {
        self.duration_secs = positive(duration_secs)?;
        Ok(())
    }

    /// Changes the genre of a song. Podcasts and audiobooks are pinned to
    /// their sentinel genre.
    pub(crate) fn set_genre(&mut self, genre: Genre) -> Result<()> {
        match self.kind {
            MediaKind::Song => check_song_genre(genre)?,
            _ if genre != self.genre => {
                return Err(LibraryError::validation(format!(
                    "The genre of a {} cannot be changed",
                    self.type_name().to_lowercase()
                )));
            }
            _ => {}
        }

        self.genre = genre;
        Ok(())
    }

    /// Sets the episode count of a podcast, never going below one.
    pub(crate) fn set_episodes(&mut self, count: u32) -> Result<()> {
        match &mut self.kind {
            MediaKind::Podcast { episodes } => {
                *episodes = count.max(1);
                Ok(())
            }
            _ => Err(LibraryError::validation("Only podcasts have episodes")),
        }
    }

    /// Sets the narrator of an audiobook. A blank name keeps the current one.
    pub(crate) fn set_narrator(&mut self, name: &str) -> Result<()> {
        match &mut self.kind {
            MediaKind::Audiobook { narrator } => {
                let name = name.trim();
                if !name.is_empty() {
                    *narrator = name.to_string();
                }
                Ok(())
            }
            _ => Err(LibraryError::validation("Only audiobooks have a narrator")),
        }
    }
}

impl PartialEq for Media {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Media {}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - {} ({}, {})",
            self.type_name(),
            self.title,
            self.artist,
            format_duration(u64::from(self.duration_secs)),
            self.genre
        )?;

        match self.kind() {
            MediaKind::Song => Ok(()),
            MediaKind::Podcast { episodes } => write!(f, " {} ep.", episodes),
            MediaKind::Audiobook { narrator } => write!(f, " read by {}", narrator),
        }
    }
}

fn required(value: &str, message: &str) -> Result<String> {
    match value.trim() {
        "" => Err(LibraryError::validation(message)),
        trimmed => Ok(trimmed.to_string()),
    }
}

fn positive(duration_secs: u32) -> Result<u32> {
    if duration_secs == 0 {
        return Err(LibraryError::validation(
            "Duration must be a positive number of seconds",
        ));
    }
    Ok(duration_secs)
}

fn check_song_genre(genre: Genre) -> Result<()> {
    if genre.is_sentinel() {
        return Err(LibraryError::validation(format!(
            "A song cannot have the {} genre",
            genre
        )));
    }
    Ok(())
}
