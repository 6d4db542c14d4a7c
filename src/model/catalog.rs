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

//! Media catalog.
//!
//! The catalog owns every [`Media`] known to the session and keeps three
//! derived indices so that lookups never scan the whole store:
//!
//! * **title** - lowercased title to media ids.
//! * **artist** - lowercased artist, host or author to media ids.
//! * **genre** - genre to media ids.
//!
//! Lookups are exact and case-insensitive, there is no substring or fuzzy
//! matching. Indices are maintained on every mutation and never on read.
//!
//! Every id held by an index is present in the primary store.

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

use tracing::debug;

use crate::{
    error::{LibraryError, Result},
    model::{genre::Genre, media::Media, media::MediaId, search::SearchQuery},
};

type Index<K> = HashMap<K, HashSet<MediaId>>;

#[derive(Default)]
pub(crate) struct Catalog {
    media: HashMap<MediaId, Media>,
    order: Vec<MediaId>,

    by_title: Index<String>,
    by_artist: Index<String>,
    by_genre: Index<Genre>,
}

impl Catalog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds media to the catalog and indexes it.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::DuplicateMedia`] if media with the same id is
    /// already present, in which case the catalog is left untouched.
    pub(crate) fn add(&mut self, media: Media) -> Result<()> {
        let id = media.id();
        if self.media.contains_key(&id) {
            return Err(LibraryError::DuplicateMedia(media.title().to_string()));
        }

        debug!(%id, title = media.title(), "Adding media to catalog");

        self.index(&media);
        self.order.push(id);
        self.media.insert(id, media);

        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`LibraryError::MediaNotFound`] if no media has this id.
    pub(crate) fn get_by_id(&self, id: &MediaId) -> Result<&Media> {
        self.media.get(id).ok_or(LibraryError::MediaNotFound(*id))
    }

    /// Finds media whose title matches `term` exactly, ignoring case.
    ///
    /// A blank term matches nothing.
    pub(crate) fn find_by_title(&self, term: &str) -> Vec<&Media> {
        self.find_by_text(&self.by_title, term)
    }

    /// Finds media whose artist, host or author matches `term` exactly,
    /// ignoring case.
    pub(crate) fn find_by_artist(&self, term: &str) -> Vec<&Media> {
        self.find_by_text(&self.by_artist, term)
    }

    pub(crate) fn find_by_genre(&self, genre: Genre) -> Vec<&Media> {
        self.collect(self.by_genre.get(&genre))
    }

    pub(crate) fn search(&self, query: &SearchQuery) -> Vec<&Media> {
        match query {
            SearchQuery::Title(term) => self.find_by_title(term),
            SearchQuery::Artist(term) => self.find_by_artist(term),
            SearchQuery::Genre(genre) => self.find_by_genre(*genre),
        }
    }

    /// All media, in the order they were added.
    pub(crate) fn list_all(&self) -> Vec<&Media> {
        self.order
            .iter()
            .filter_map(|id| self.media.get(id))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.media.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    /// Applies `edit` to one media item and re-indexes it.
    ///
    /// The edit runs against a copy, so if it fails part way the stored item
    /// and the indices are left exactly as they were.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::MediaNotFound`] for an unknown id, or whatever
    /// error `edit` returns.
    pub(crate) fn edit<F>(&mut self, id: &MediaId, edit: F) -> Result<&Media>
    where
        F: FnOnce(&mut Media) -> Result<()>,
    {
        let mut updated = self.get_by_id(id)?.clone();
        edit(&mut updated)?;

        if let Some(previous) = self.media.remove(id) {
            self.unindex(&previous);
        }

        debug!(%id, title = updated.title(), "Updated media in catalog");

        self.index(&updated);
        self.media.insert(*id, updated);

        self.get_by_id(id)
    }

    /// Removes media from the store and from every index.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::MediaNotFound`] if no media has this id.
    pub(crate) fn remove(&mut self, id: &MediaId) -> Result<Media> {
        let media = self
            .media
            .remove(id)
            .ok_or(LibraryError::MediaNotFound(*id))?;

        self.unindex(&media);
        self.order.retain(|other| other != id);

        debug!(%id, title = media.title(), "Removed media from catalog");

        Ok(media)
    }

    fn find_by_text(&self, index: &Index<String>, term: &str) -> Vec<&Media> {
        let key = index_key(term);
        if key.is_empty() {
            return vec![];
        }
        self.collect(index.get(&key))
    }

    fn collect(&self, ids: Option<&HashSet<MediaId>>) -> Vec<&Media> {
        ids.into_iter()
            .flatten()
            .filter_map(|id| self.media.get(id))
            .collect()
    }

    fn index(&mut self, media: &Media) {
        let id = media.id();
        insert(&mut self.by_title, index_key(media.title()), id);
        insert(&mut self.by_artist, index_key(media.artist()), id);
        insert(&mut self.by_genre, media.genre(), id);
    }

    fn unindex(&mut self, media: &Media) {
        let id = media.id();
        remove(&mut self.by_title, &index_key(media.title()), &id);
        remove(&mut self.by_artist, &index_key(media.artist()), &id);
        remove(&mut self.by_genre, &media.genre(), &id);
    }
}

fn index_key(text: &str) -> String {
    text.trim().to_lowercase()
}

fn insert<K: Eq + Hash>(index: &mut Index<K>, key: K, id: MediaId) {
    index.entry(key).or_default().insert(id);
}

// Drops the bucket once it is empty so stale keys never linger.
fn remove<K: Eq + Hash>(index: &mut Index<K>, key: &K, id: &MediaId) {
    if let Some(ids) = index.get_mut(key) {
        ids.remove(id);
        if ids.is_empty() {
            index.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take_five() -> Media {
        Media::song("Take Five", "Dave Brubeck", 325, Genre::Jazz).unwrap()
    }

    fn ids(media: Vec<&Media>) -> HashSet<MediaId> {
        media.into_iter().map(Media::id).collect()
    }

    #[test]
    fn added_media_is_found_by_every_index() {
        let mut catalog = Catalog::new();
        let song = take_five();
        let id = song.id();
        catalog.add(song).unwrap();

        assert_eq!(catalog.get_by_id(&id).unwrap().id(), id);
        assert_eq!(ids(catalog.find_by_title("take five")), HashSet::from([id]));
        assert_eq!(ids(catalog.find_by_title("TAKE FIVE")), HashSet::from([id]));
        assert_eq!(ids(catalog.find_by_artist("dave brubeck")), HashSet::from([id]));
        assert_eq!(ids(catalog.find_by_genre(Genre::Jazz)), HashSet::from([id]));
    }

    #[test]
    fn genre_search_returns_only_matching_genre() {
        let mut catalog = Catalog::new();
        let song = take_five();
        let id = song.id();
        catalog.add(song).unwrap();

        let jazz = catalog.find_by_genre(Genre::Jazz);
        assert_eq!(jazz.len(), 1);
        assert_eq!(jazz[0].id(), id);
        assert!(catalog.find_by_genre(Genre::Pop).is_empty());
    }

    #[test]
    fn duplicate_add_is_rejected_without_changes() {
        let mut catalog = Catalog::new();
        let song = take_five();
        let copy = song.clone();
        catalog.add(song).unwrap();

        assert!(matches!(
            catalog.add(copy),
            Err(LibraryError::DuplicateMedia(_))
        ));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find_by_title("Take Five").len(), 1);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let catalog = Catalog::new();
        let id = MediaId::generate();
        assert_eq!(catalog.get_by_id(&id).unwrap_err(), LibraryError::MediaNotFound(id));
    }

    #[test]
    fn text_search_is_exact_and_ignores_blank_terms() {
        let mut catalog = Catalog::new();
        catalog.add(take_five()).unwrap();

        assert!(catalog.find_by_title("Take").is_empty());
        assert!(catalog.find_by_title("").is_empty());
        assert!(catalog.find_by_artist("   ").is_empty());
        assert!(catalog.find_by_artist("Brubeck").is_empty());
        assert_eq!(catalog.find_by_artist("  dave brubeck ").len(), 1);
    }

    #[test]
    fn shared_keys_collect_every_match() {
        let mut catalog = Catalog::new();
        catalog
            .add(Media::audiobook("Dom Casmurro", "Machado de Assis", "João Silva", 28800).unwrap())
            .unwrap();
        catalog
            .add(Media::audiobook("O Alienista", "Machado de Assis", "Maria Rocha", 21600).unwrap())
            .unwrap();

        assert_eq!(catalog.find_by_artist("machado de assis").len(), 2);
        assert_eq!(catalog.find_by_genre(Genre::Audiobook).len(), 2);
        assert!(catalog.find_by_genre(Genre::Podcast).is_empty());
    }

    #[test]
    fn list_all_keeps_insertion_order() {
        let mut catalog = Catalog::new();
        let first = Media::song("Bohemian Rhapsody", "Queen", 354, Genre::Rock).unwrap();
        let second = take_five();
        let third = Media::podcast("TechWeekly", "Carlos Lima", 2400).unwrap();
        let expected = vec![first.id(), second.id(), third.id()];

        catalog.add(first).unwrap();
        catalog.add(second).unwrap();
        catalog.add(third).unwrap();

        let listed: Vec<MediaId> = catalog.list_all().into_iter().map(Media::id).collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn search_dispatches_on_query_kind() {
        let mut catalog = Catalog::new();
        catalog.add(take_five()).unwrap();

        assert_eq!(catalog.search(&SearchQuery::Title("take five".into())).len(), 1);
        assert_eq!(catalog.search(&SearchQuery::Artist("dave brubeck".into())).len(), 1);
        assert_eq!(catalog.search(&SearchQuery::Genre(Genre::Jazz)).len(), 1);
        assert!(catalog.search(&SearchQuery::Genre(Genre::Rock)).is_empty());
    }

    #[test]
    fn edit_moves_media_between_index_keys() {
        let mut catalog = Catalog::new();
        let song = take_five();
        let id = song.id();
        catalog.add(song).unwrap();

        catalog
            .edit(&id, |media| {
                media.set_title("Blue Rondo a la Turk")?;
                media.set_genre(Genre::Blues)
            })
            .unwrap();

        assert!(catalog.find_by_title("take five").is_empty());
        assert!(catalog.find_by_genre(Genre::Jazz).is_empty());
        assert_eq!(catalog.find_by_title("blue rondo a la turk").len(), 1);
        assert_eq!(catalog.find_by_genre(Genre::Blues).len(), 1);
        assert_eq!(catalog.find_by_artist("dave brubeck").len(), 1);
    }

    #[test]
    fn failed_edit_leaves_media_untouched() {
        let mut catalog = Catalog::new();
        let song = take_five();
        let id = song.id();
        catalog.add(song).unwrap();

        let result = catalog.edit(&id, |media| {
            media.set_title("Renamed")?;
            media.set_duration_secs(0)
        });

        assert!(matches!(result, Err(LibraryError::Validation(_))));
        assert_eq!(catalog.get_by_id(&id).unwrap().title(), "Take Five");
        assert_eq!(catalog.find_by_title("take five").len(), 1);
        assert!(catalog.find_by_title("renamed").is_empty());
    }

    #[test]
    fn remove_purges_store_and_indices() {
        let mut catalog = Catalog::new();
        let song = take_five();
        let id = song.id();
        catalog.add(song).unwrap();

        let removed = catalog.remove(&id).unwrap();
        assert_eq!(removed.id(), id);
        assert!(catalog.is_empty());
        assert!(catalog.list_all().is_empty());
        assert!(catalog.find_by_title("take five").is_empty());
        assert!(catalog.find_by_genre(Genre::Jazz).is_empty());
        assert!(catalog.by_title.is_empty());
        assert!(catalog.by_genre.is_empty());

        assert_eq!(catalog.remove(&id).unwrap_err(), LibraryError::MediaNotFound(id));
    }
}
