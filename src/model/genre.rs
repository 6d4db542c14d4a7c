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

//! Media genres.
//!
//! A closed set of musical genres, plus two sentinel values so that podcasts
//! and audiobooks can take part in genre search like any song.

use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Genre {
    Rock,
    Pop,
    Mpb,
    Jazz,
    Classical,
    HipHop,
    Electronic,
    Sertanejo,
    Forro,
    Funk,
    Metal,
    Blues,
    Reggae,
    Country,
    Indie,
    KPop,

    // Sentinels for non-musical media
    Podcast,
    Audiobook,
}

impl Genre {
    pub(crate) const ALL: [Genre; 18] = [
        Genre::Rock,
        Genre::Pop,
        Genre::Mpb,
        Genre::Jazz,
        Genre::Classical,
        Genre::HipHop,
        Genre::Electronic,
        Genre::Sertanejo,
        Genre::Forro,
        Genre::Funk,
        Genre::Metal,
        Genre::Blues,
        Genre::Reggae,
        Genre::Country,
        Genre::Indie,
        Genre::KPop,
        Genre::Podcast,
        Genre::Audiobook,
    ];

    /// Whether this genre is reserved for non-musical media.
    pub(crate) fn is_sentinel(self) -> bool {
        matches!(self, Genre::Podcast | Genre::Audiobook)
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Genre::Rock => "Rock",
            Genre::Pop => "Pop",
            Genre::Mpb => "MPB",
            Genre::Jazz => "Jazz",
            Genre::Classical => "Classical",
            Genre::HipHop => "Hip-Hop",
            Genre::Electronic => "Electronic",
            Genre::Sertanejo => "Sertanejo",
            Genre::Forro => "Forró",
            Genre::Funk => "Funk",
            Genre::Metal => "Metal",
            Genre::Blues => "Blues",
            Genre::Reggae => "Reggae",
            Genre::Country => "Country",
            Genre::Indie => "Indie",
            Genre::KPop => "K-Pop",
            Genre::Podcast => "Podcast",
            Genre::Audiobook => "Audiobook",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a string names no known genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UnknownGenre(pub(crate) String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    /// Parses a genre by name, ignoring case, spaces, hyphens and the accent
    /// in "forró", so `hip-hop`, `HipHop` and `hip hop` all match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | ' ' | '_'))
            .map(|c| if c == 'ó' || c == 'Ó' { 'o' } else { c })
            .collect::<String>()
            .to_lowercase();

        Genre::ALL
            .into_iter()
            .find(|genre| {
                let name = format!("{:?}", genre).to_lowercase();
                name == key
            })
            .ok_or_else(|| UnknownGenre(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("jazz".parse(), Ok(Genre::Jazz));
        assert_eq!("JAZZ".parse(), Ok(Genre::Jazz));
        assert_eq!(" Rock ".parse(), Ok(Genre::Rock));
    }

    #[test]
    fn parses_decorated_names() {
        assert_eq!("hip-hop".parse(), Ok(Genre::HipHop));
        assert_eq!("K-Pop".parse(), Ok(Genre::KPop));
        assert_eq!("forró".parse(), Ok(Genre::Forro));
        assert_eq!("audiobook".parse(), Ok(Genre::Audiobook));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "polka".parse::<Genre>(),
            Err(UnknownGenre("polka".to_string()))
        );
        assert!("".parse::<Genre>().is_err());
    }

    #[test]
    fn only_podcast_and_audiobook_are_sentinels() {
        let sentinels: Vec<Genre> = Genre::ALL.into_iter().filter(|g| g.is_sentinel()).collect();
        assert_eq!(sentinels, vec![Genre::Podcast, Genre::Audiobook]);
    }
}
