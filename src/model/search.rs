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

//! Catalog search queries and results.
//!
//! A [`SearchQuery`] names one of the catalog indices and the key to look up.
//! The ids it produced are remembered as [`PickList`] so later commands can
//! refer to a result by its 1-based number.

use std::fmt;

use crate::model::{genre::Genre, media::MediaId};

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum SearchQuery {
    Title(String),
    Artist(String),
    Genre(Genre),
}

impl SearchQuery {
    pub(crate) fn for_title(title: String) -> Self {
        Self::Title(title)
    }

    pub(crate) fn for_artist(artist: String) -> Self {
        Self::Artist(artist)
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchQuery::Title(title) => write!(f, "title '{}'", title),
            SearchQuery::Artist(artist) => write!(f, "artist '{}'", artist),
            SearchQuery::Genre(genre) => write!(f, "genre {}", genre),
        }
    }
}

/// The ids from the latest listing or search, in display order.
#[derive(Debug, Default)]
pub(crate) struct PickList {
    ids: Vec<MediaId>,
}

impl PickList {
    pub(crate) fn set(&mut self, ids: Vec<MediaId>) {
        self.ids = ids;
    }

    /// Looks up a 1-based position.
    pub(crate) fn get(&self, position: usize) -> Option<MediaId> {
        position
            .checked_sub(1)
            .and_then(|index| self.ids.get(index))
            .copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub(crate) fn forget(&mut self, id: &MediaId) {
        self.ids.retain(|other| other != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_list_is_one_based() {
        let first = MediaId::generate();
        let second = MediaId::generate();
        let mut picks = PickList::default();
        picks.set(vec![first, second]);

        assert_eq!(picks.get(0), None);
        assert_eq!(picks.get(1), Some(first));
        assert_eq!(picks.get(2), Some(second));
        assert_eq!(picks.get(3), None);
    }

    #[test]
    fn forgetting_an_id_shifts_later_positions() {
        let first = MediaId::generate();
        let second = MediaId::generate();
        let mut picks = PickList::default();
        picks.set(vec![first, second]);

        picks.forget(&first);
        assert_eq!(picks.len(), 1);
        assert_eq!(picks.get(1), Some(second));
    }

    #[test]
    fn describes_query() {
        assert_eq!(SearchQuery::for_title("Take Five".into()).to_string(), "title 'Take Five'");
        assert_eq!(SearchQuery::Genre(Genre::Jazz).to_string(), "genre Jazz");
    }
}
