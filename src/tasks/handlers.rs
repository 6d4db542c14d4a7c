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

use anyhow::{Result, bail};

use crate::{
    error::{self, LibraryError},
    model::{
        genre::Genre,
        media::{Media, MediaId},
        search::SearchQuery,
    },
    session::Session,
    tasks::{MediaEdit, NewMedia, Reply},
};

pub(super) fn register(session: &mut Session, name: &str, email: &str) -> Result<Reply> {
    let user = session.register(name, email)?;
    Ok(Reply::message(format!(
        "Registered {} ({})",
        user.name(),
        user.email()
    )))
}

pub(super) fn who_am_i(session: &mut Session) -> Result<Reply> {
    let user = session.user()?;
    Ok(Reply::message(format!(
        "{} <{}>, {} playlist(s)",
        user.name(),
        user.email(),
        user.playlists().len()
    )))
}

pub(super) fn create_playlist(session: &mut Session, name: &str) -> Result<Reply> {
    let playlist = session.user_mut()?.create_playlist(name)?;
    Ok(Reply::message(format!("Created playlist '{}'", playlist.name())))
}

pub(super) fn remove_playlist(session: &mut Session, name: &str) -> Result<Reply> {
    let playlist = session.user_mut()?.remove_playlist(name)?;
    Ok(Reply::message(format!("Removed playlist '{}'", playlist.name())))
}

pub(super) fn list_playlists(session: &mut Session) -> Result<Reply> {
    let user = session.user()?;
    if user.playlists().is_empty() {
        return Ok(Reply::message("You have no playlists yet"));
    }

    let lines = user
        .playlists()
        .iter()
        .flat_map(|playlist| summary_lines(&playlist.summary(&session.catalog)))
        .collect();

    Ok(Reply::listing(format!("Playlists of {}", user.name()), lines))
}

pub(super) fn show_playlist(session: &mut Session, name: &str) -> Result<Reply> {
    let playlist = session.user()?.playlist(name)?;

    let mut lines = summary_lines(&playlist.summary(&session.catalog));
    if !playlist.is_empty() {
        lines.push("Ids:".to_string());
        lines.extend(
            playlist
                .items()
                .iter()
                .enumerate()
                .map(|(index, id)| format!("{:02}. {}", index + 1, id)),
        );
    }

    Ok(Reply::listing(playlist.name(), lines))
}

pub(super) fn list_catalog(session: &mut Session) -> Result<Reply> {
    if session.catalog.is_empty() {
        return Ok(Reply::message("The catalog is empty"));
    }

    let (ids, lines) = numbered(session.catalog.list_all());
    session.picks.set(ids);

    Ok(Reply::listing("Catalog", lines))
}

pub(super) fn search(session: &mut Session, query: &SearchQuery) -> Result<Reply> {
    let media = session.catalog.search(query);
    if media.is_empty() {
        return Ok(Reply::message(format!("No media found for {}", query)));
    }

    let (ids, lines) = numbered(media);
    session.picks.set(ids);

    Ok(Reply::listing(format!("Results for {}", query), lines))
}

pub(super) fn add_to_playlist(session: &mut Session, pick: usize, playlist: &str) -> Result<Reply> {
    let id = picked(session, pick)?;
    let media = session.add_to_playlist(playlist, &id)?;
    Ok(Reply::message(format!(
        "Added '{}' to '{}'",
        media.title(),
        playlist.trim()
    )))
}

pub(super) fn remove_from_playlist(
    session: &mut Session,
    position: usize,
    name: &str,
) -> Result<Reply> {
    let playlist = session.user_mut()?.playlist_mut(name)?;
    let Some(id) = playlist.remove_at(position) else {
        bail!("There is no item {} in '{}'", position, playlist.name());
    };

    Ok(Reply::message(format!("Removed {}", describe(session, &id))))
}

pub(super) fn remove_id_from_playlist(
    session: &mut Session,
    id: &MediaId,
    name: &str,
) -> Result<Reply> {
    let playlist = session.user_mut()?.playlist_mut(name)?;
    if !playlist.remove_first_occurrence(id) {
        bail!("Media {} is not in '{}'", id, playlist.name());
    }

    Ok(Reply::message(format!("Removed {}", describe(session, id))))
}

pub(super) fn add_media(session: &mut Session, new_media: NewMedia) -> Result<Reply> {
    let media = match new_media {
        NewMedia::Song {
            title,
            artist,
            duration_secs,
            genre,
        } => Media::song(&title, &artist, duration_secs, genre)?,
        NewMedia::Podcast {
            title,
            host,
            duration_secs,
            episodes,
        } => {
            let mut podcast = Media::podcast(&title, &host, duration_secs)?;
            if let Some(episodes) = episodes {
                podcast.set_episodes(typed_episodes(episodes)?)?;
            }
            podcast
        }
        NewMedia::Audiobook {
            title,
            author,
            narrator,
            duration_secs,
        } => Media::audiobook(&title, &author, &narrator, duration_secs)?,
    };

    let line = media.to_string();
    let id = session.add_media(media)?;

    // The new media becomes result 1, ready for 'add 1 <playlist>'
    session.picks.set(vec![id]);

    Ok(Reply::message(format!("Added {}", line)))
}

pub(super) fn edit_media(session: &mut Session, pick: usize, edit: MediaEdit) -> Result<Reply> {
    let id = picked(session, pick)?;
    let media = session.catalog.edit(&id, |media| match edit {
        MediaEdit::Title(title) => media.set_title(&title),
        MediaEdit::Artist(artist) => media.set_artist(&artist),
        MediaEdit::Duration(secs) => media.set_duration_secs(secs),
        MediaEdit::Genre(genre) => media.set_genre(genre),
        MediaEdit::Episodes(count) => media.set_episodes(typed_episodes(count)?),
        MediaEdit::Narrator(name) => media.set_narrator(&name),
    })?;

    Ok(Reply::message(format!("Updated {}", media)))
}

pub(super) fn delete_media(session: &mut Session, pick: usize) -> Result<Reply> {
    let id = picked(session, pick)?;
    let (media, dropped) = session.remove_media(&id)?;

    let mut message = format!("Removed '{}' from the catalog", media.title());
    if dropped > 0 {
        message.push_str(&format!(" and {} playlist entr(ies)", dropped));
    }

    Ok(Reply::message(message))
}

pub(super) fn stats(session: &mut Session) -> Result<Reply> {
    let stats = session.stats();
    Ok(Reply::listing(
        "Totals",
        vec![
            format!("Media: {}", stats.media),
            format!("Playlists: {}", stats.playlists),
        ],
    ))
}

pub(super) fn list_genres() -> Reply {
    let lines = Genre::ALL
        .iter()
        .map(|genre| {
            let note = if genre.is_sentinel() { " (non-musical)" } else { "" };
            format!("{}{}", genre, note)
        })
        .collect();

    Reply::listing("Genres", lines)
}

pub(super) fn help() -> Reply {
    let lines = [
        "register <name> <email>    register the session user",
        "whoami                     show the current user",
        "new <playlist>             create a playlist",
        "drop <playlist>            delete a playlist",
        "pl                         show every playlist",
        "show <playlist>            show one playlist with media ids",
        "ls                         list the catalog",
        "ft <title>                 find by exact title",
        "far <artist>               find by exact artist, host or author",
        "fg <genre>                 find by genre",
        "add <n> <playlist>         add result n to a playlist",
        "rm <n> <playlist>          remove item n from a playlist",
        "rmid <id> <playlist>       remove media by id from a playlist",
        "song <title> | <artist> | <seconds> | <genre>",
        "podcast <title> | <host> | <seconds> [| <episodes>]",
        "audiobook <title> | <author> | <narrator> | <seconds>",
        "edit <n> <field> <value>   change title, artist, duration, genre, episodes or narrator",
        "del <n>                    remove result n from the catalog",
        "stats                      count media and playlists",
        "genres                     list genres",
        "q                          quit",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    Reply::listing("Commands", lines)
}

fn picked(session: &Session, pick: usize) -> Result<MediaId> {
    match session.picks.get(pick) {
        Some(id) => Ok(id),
        None if session.picks.is_empty() => {
            bail!("Nothing to pick from, run 'ls' or a search first")
        }
        None => bail!(
            "Pick a result between 1 and {}",
            session.picks.len()
        ),
    }
}

// The model clamps episode counts, but a count typed at the console must
// already be valid.
fn typed_episodes(count: u32) -> error::Result<u32> {
    if count == 0 {
        return Err(LibraryError::validation("A podcast needs at least 1 episode"));
    }
    Ok(count)
}

fn numbered(media: Vec<&Media>) -> (Vec<MediaId>, Vec<String>) {
    media
        .into_iter()
        .enumerate()
        .map(|(index, media)| (media.id(), format!("{}) {}", index + 1, media)))
        .unzip()
}

fn describe(session: &Session, id: &MediaId) -> String {
    match session.catalog.get_by_id(id) {
        Ok(media) => format!("'{}'", media.title()),
        Err(_) => id.to_string(),
    }
}

fn summary_lines(summary: &str) -> Vec<String> {
    summary.lines().map(String::from).collect()
}
