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

//! Session state.
//!
//! A [`Session`] bundles everything one console session works with: the
//! catalog, the registered user (if any) and the ids of the most recent
//! listing. It is created once in `main` and handed to every task, there is
//! no global state.
//!
//! Operations that span the catalog and the user live here so the two stay
//! consistent, for example removing media also drops it from every playlist.

pub(crate) mod seed;

use tracing::info;

use crate::{
    config::AppConfig,
    error::{LibraryError, Result},
    model::{
        catalog::Catalog,
        media::{Media, MediaId},
        search::PickList,
        user::User,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Stats {
    pub(crate) media: usize,
    pub(crate) playlists: usize,
}

pub(crate) struct Session {
    pub(crate) config: AppConfig,
    pub(crate) catalog: Catalog,
    pub(crate) picks: PickList,
    user: Option<User>,
}

impl Session {
    pub(crate) fn new(config: AppConfig) -> Self {
        Self {
            config,
            catalog: Catalog::new(),
            picks: PickList::default(),
            user: None,
        }
    }

    /// Registers the session user, replacing any previous one along with
    /// their playlists.
    pub(crate) fn register(&mut self, name: &str, email: &str) -> Result<&User> {
        let user = User::new(name, email)?;

        info!(name = user.name(), email = user.email(), "Registered user");

        let user: &User = self.user.insert(user);
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns [`LibraryError::NotLoggedIn`] until a user has registered.
    pub(crate) fn user(&self) -> Result<&User> {
        self.user.as_ref().ok_or(LibraryError::NotLoggedIn)
    }

    pub(crate) fn user_mut(&mut self) -> Result<&mut User> {
        self.user.as_mut().ok_or(LibraryError::NotLoggedIn)
    }

    pub(crate) fn add_media(&mut self, media: Media) -> Result<MediaId> {
        let id = media.id();
        self.catalog.add(media)?;
        Ok(id)
    }

    /// Appends catalog media to one of the user's playlists.
    ///
    /// # Errors
    ///
    /// * [`LibraryError::NotLoggedIn`] without a registered user.
    /// * [`LibraryError::PlaylistNotFound`] for an unknown playlist.
    /// * [`LibraryError::MediaNotFound`] if the id is not in the catalog.
    pub(crate) fn add_to_playlist(&mut self, playlist: &str, id: &MediaId) -> Result<&Media> {
        let user = self.user.as_mut().ok_or(LibraryError::NotLoggedIn)?;
        let playlist = user.playlist_mut(playlist)?;
        let media = self.catalog.get_by_id(id)?;

        playlist.add_media(media);

        Ok(media)
    }

    /// Removes media from the catalog and every reference to it from the
    /// user's playlists. Returns the media and the number of playlist entries
    /// dropped.
    pub(crate) fn remove_media(&mut self, id: &MediaId) -> Result<(Media, usize)> {
        let media = self.catalog.remove(id)?;
        let dropped = self
            .user
            .as_mut()
            .map_or(0, |user| user.forget_media(id));
        self.picks.forget(id);

        info!(title = media.title(), dropped, "Removed media");

        Ok((media, dropped))
    }

    pub(crate) fn stats(&self) -> Stats {
        Stats {
            media: self.catalog.len(),
            playlists: self.user.as_ref().map_or(0, |user| user.playlists().len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::genre::Genre;

    fn session_with_song() -> (Session, MediaId) {
        let mut session = Session::new(AppConfig::default());
        let id = session
            .add_media(Media::song("Take Five", "Dave Brubeck", 325, Genre::Jazz).unwrap())
            .unwrap();
        (session, id)
    }

    #[test]
    fn playlist_operations_need_a_user() {
        let (mut session, id) = session_with_song();

        assert_eq!(session.user().unwrap_err(), LibraryError::NotLoggedIn);
        assert!(matches!(
            session.add_to_playlist("Jazz", &id),
            Err(LibraryError::NotLoggedIn)
        ));
    }

    #[test]
    fn add_to_playlist_checks_playlist_and_media() {
        let (mut session, id) = session_with_song();
        session.register("Ana", "ana@example.com").unwrap();
        session.user_mut().unwrap().create_playlist("Jazz").unwrap();

        assert!(matches!(
            session.add_to_playlist("Blues", &id),
            Err(LibraryError::PlaylistNotFound(_))
        ));
        assert!(matches!(
            session.add_to_playlist("Jazz", &MediaId::generate()),
            Err(LibraryError::MediaNotFound(_))
        ));

        session.add_to_playlist("jazz", &id).unwrap();
        session.add_to_playlist("jazz", &id).unwrap();
        assert_eq!(session.user().unwrap().playlist("Jazz").unwrap().len(), 2);
    }

    #[test]
    fn removing_media_cascades_to_playlists() {
        let (mut session, id) = session_with_song();
        session.register("Ana", "ana@example.com").unwrap();
        session.user_mut().unwrap().create_playlist("Jazz").unwrap();
        session.add_to_playlist("Jazz", &id).unwrap();
        session.picks.set(vec![id]);

        let (media, dropped) = session.remove_media(&id).unwrap();
        assert_eq!(media.id(), id);
        assert_eq!(dropped, 1);
        assert!(session.picks.is_empty());
        assert!(session.user().unwrap().playlist("Jazz").unwrap().is_empty());
        assert_eq!(session.stats(), Stats { media: 0, playlists: 1 });
    }

    #[test]
    fn registering_again_replaces_the_user() {
        let mut session = Session::new(AppConfig::default());
        session.register("Ana", "ana@example.com").unwrap();
        session.user_mut().unwrap().create_playlist("Mine").unwrap();

        session.register("Bia", "bia@example.com").unwrap();
        assert_eq!(session.user().unwrap().name(), "Bia");
        assert_eq!(session.stats().playlists, 0);
    }
}
