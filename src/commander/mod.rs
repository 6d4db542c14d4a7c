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

//! Command-line input parsing.
//!
//! This module turns one line typed at the console into an [`AppTask`]. Only
//! the shape of the input is checked here, numbers, ids and genre names. All
//! domain validation happens when the task runs, and a line that fails to
//! parse never reaches the session.
//!
//! Commands that take several free-text fields, such as adding a song,
//! separate them with `|`.

use thiserror::Error;

use crate::{
    model::{
        genre::{Genre, UnknownGenre},
        media::MediaId,
        search::SearchQuery,
    },
    tasks::{AppTask, MediaEdit, NewMedia},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    #[error("'{0}' is not a valid media id")]
    InvalidId(String),

    #[error("Unknown genre '{0}', type 'genres' to list them")]
    UnknownGenre(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("Unknown command '{0}', type 'help' for the list of commands")]
    UnknownCommand(String),
}

type Result<T> = std::result::Result<T, CommandError>;

/// Parses one console line.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// Returns a [`CommandError`] if the command is unknown or its arguments are
/// malformed.
pub(crate) fn parse_command(buffer: &str) -> Result<Option<AppTask>> {
    let buffer = buffer.trim();
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let task = match parts.as_slice() {
        [] => return Ok(None),

        ["q"] | ["quit"] | ["exit"] => AppTask::Exit,
        ["help"] | ["?"] => AppTask::Help,
        ["genres"] => AppTask::ListGenres,
        ["stats"] => AppTask::Stats,

        ["register", name @ .., email] if !name.is_empty() => AppTask::Register {
            name: name.join(" "),
            email: email.to_string(),
        },
        ["register", ..] => return Err(CommandError::Usage("register <name> <email>")),
        ["whoami"] => AppTask::WhoAmI,

        ["new", name @ ..] if !name.is_empty() => AppTask::CreatePlaylist(name.join(" ")),
        ["new"] => return Err(CommandError::Usage("new <playlist>")),

        ["drop", name @ ..] if !name.is_empty() => AppTask::RemovePlaylist(name.join(" ")),
        ["drop"] => return Err(CommandError::Usage("drop <playlist>")),

        ["pl"] => AppTask::ListPlaylists,
        ["show", name @ ..] if !name.is_empty() => AppTask::ShowPlaylist(name.join(" ")),
        ["show"] => return Err(CommandError::Usage("show <playlist>")),

        ["ls"] => AppTask::ListCatalog,

        ["ft", title @ ..] if !title.is_empty() => {
            AppTask::Search(SearchQuery::for_title(title.join(" ")))
        }
        ["ft"] => return Err(CommandError::Usage("ft <title>")),
        ["far", artist @ ..] if !artist.is_empty() => {
            AppTask::Search(SearchQuery::for_artist(artist.join(" ")))
        }
        ["far"] => return Err(CommandError::Usage("far <artist>")),
        ["fg", genre @ ..] if !genre.is_empty() => {
            AppTask::Search(SearchQuery::Genre(parse_genre(&genre.join(" "))?))
        }
        ["fg"] => return Err(CommandError::Usage("fg <genre>")),

        ["add", pick, playlist @ ..] if !playlist.is_empty() => AppTask::AddToPlaylist {
            pick: parse_number(pick)?,
            playlist: playlist.join(" "),
        },
        ["add", ..] => return Err(CommandError::Usage("add <result number> <playlist>")),

        ["rm", position, playlist @ ..] if !playlist.is_empty() => AppTask::RemoveFromPlaylist {
            position: parse_number(position)?,
            playlist: playlist.join(" "),
        },
        ["rm", ..] => return Err(CommandError::Usage("rm <item number> <playlist>")),

        ["rmid", id, playlist @ ..] if !playlist.is_empty() => AppTask::RemoveIdFromPlaylist {
            id: parse_id(id)?,
            playlist: playlist.join(" "),
        },
        ["rmid", ..] => return Err(CommandError::Usage("rmid <media id> <playlist>")),

        ["del", pick] => AppTask::DeleteMedia(parse_number(pick)?),
        ["del", ..] => return Err(CommandError::Usage("del <result number>")),

        ["edit", pick, field, value @ ..] if !value.is_empty() => AppTask::EditMedia {
            pick: parse_number(pick)?,
            edit: parse_edit(field, &value.join(" "))?,
        },
        ["edit", ..] => return Err(CommandError::Usage(EDIT_USAGE)),

        ["song", ..] => AppTask::AddMedia(parse_song(fields(buffer, "song"))?),
        ["podcast", ..] => AppTask::AddMedia(parse_podcast(fields(buffer, "podcast"))?),
        ["audiobook", ..] => AppTask::AddMedia(parse_audiobook(fields(buffer, "audiobook"))?),

        [cmd, ..] => return Err(CommandError::UnknownCommand(cmd.to_string())),
    };

    Ok(Some(task))
}

const EDIT_USAGE: &str =
    "edit <result number> <title|artist|duration|genre|episodes|narrator> <value>";

const SONG_USAGE: &str = "song <title> | <artist> | <seconds> | <genre>";
const PODCAST_USAGE: &str = "podcast <title> | <host> | <seconds> [| <episodes>]";
const AUDIOBOOK_USAGE: &str = "audiobook <title> | <author> | <narrator> | <seconds>";

// Splits the text after the command word on '|', trimming each field.
fn fields<'a>(buffer: &'a str, command: &str) -> Vec<&'a str> {
    buffer[command.len()..].split('|').map(str::trim).collect()
}

fn parse_song(fields: Vec<&str>) -> Result<NewMedia> {
    match fields.as_slice() {
        [title, artist, seconds, genre] => Ok(NewMedia::Song {
            title: title.to_string(),
            artist: artist.to_string(),
            duration_secs: parse_number(seconds)?,
            genre: parse_genre(genre)?,
        }),
        _ => Err(CommandError::Usage(SONG_USAGE)),
    }
}

fn parse_podcast(fields: Vec<&str>) -> Result<NewMedia> {
    let (title, host, seconds, episodes) = match fields.as_slice() {
        [title, host, seconds] => (title, host, seconds, None),
        [title, host, seconds, episodes] => (title, host, seconds, Some(parse_number(episodes)?)),
        _ => return Err(CommandError::Usage(PODCAST_USAGE)),
    };

    Ok(NewMedia::Podcast {
        title: title.to_string(),
        host: host.to_string(),
        duration_secs: parse_number(seconds)?,
        episodes,
    })
}

fn parse_audiobook(fields: Vec<&str>) -> Result<NewMedia> {
    match fields.as_slice() {
        [title, author, narrator, seconds] => Ok(NewMedia::Audiobook {
            title: title.to_string(),
            author: author.to_string(),
            narrator: narrator.to_string(),
            duration_secs: parse_number(seconds)?,
        }),
        _ => Err(CommandError::Usage(AUDIOBOOK_USAGE)),
    }
}

fn parse_edit(field: &str, value: &str) -> Result<MediaEdit> {
    let edit = match field.to_lowercase().as_str() {
        "title" => MediaEdit::Title(value.to_string()),
        "artist" | "host" | "author" => MediaEdit::Artist(value.to_string()),
        "duration" => MediaEdit::Duration(parse_number(value)?),
        "genre" => MediaEdit::Genre(parse_genre(value)?),
        "episodes" => MediaEdit::Episodes(parse_number(value)?),
        "narrator" => MediaEdit::Narrator(value.to_string()),
        _ => return Err(CommandError::Usage(EDIT_USAGE)),
    };

    Ok(edit)
}

fn parse_number<T: std::str::FromStr>(text: &str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_| CommandError::InvalidNumber(text.trim().to_string()))
}

fn parse_id(text: &str) -> Result<MediaId> {
    text.parse()
        .map_err(|_| CommandError::InvalidId(text.to_string()))
}

fn parse_genre(text: &str) -> Result<Genre> {
    text.parse()
        .map_err(|UnknownGenre(name)| CommandError::UnknownGenre(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> AppTask {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn register_takes_multi_word_names() {
        assert_eq!(
            parse("register Ana Maria Souza ana@example.com"),
            AppTask::Register {
                name: "Ana Maria Souza".to_string(),
                email: "ana@example.com".to_string(),
            }
        );
        assert_eq!(
            parse_command("register ana@example.com"),
            Err(CommandError::Usage("register <name> <email>"))
        );
    }

    #[test]
    fn searches() {
        assert_eq!(
            parse("ft Take Five"),
            AppTask::Search(SearchQuery::Title("Take Five".to_string()))
        );
        assert_eq!(
            parse("far Dave Brubeck"),
            AppTask::Search(SearchQuery::Artist("Dave Brubeck".to_string()))
        );
        assert_eq!(parse("fg jazz"), AppTask::Search(SearchQuery::Genre(Genre::Jazz)));
        assert_eq!(
            parse_command("fg polka"),
            Err(CommandError::UnknownGenre("polka".to_string()))
        );
    }

    #[test]
    fn playlist_commands_keep_spaces_in_names() {
        assert_eq!(parse("new Road Trip"), AppTask::CreatePlaylist("Road Trip".to_string()));
        assert_eq!(
            parse("add 2 Road Trip"),
            AppTask::AddToPlaylist {
                pick: 2,
                playlist: "Road Trip".to_string()
            }
        );
        assert_eq!(
            parse("rm 1 Road Trip"),
            AppTask::RemoveFromPlaylist {
                position: 1,
                playlist: "Road Trip".to_string()
            }
        );
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert_eq!(
            parse_command("add two Road Trip"),
            Err(CommandError::InvalidNumber("two".to_string()))
        );
        assert_eq!(
            parse_command("song Take Five | Dave Brubeck | 5m | jazz"),
            Err(CommandError::InvalidNumber("5m".to_string()))
        );
        assert_eq!(
            parse_command("del -1"),
            Err(CommandError::InvalidNumber("-1".to_string()))
        );
    }

    #[test]
    fn rmid_requires_a_valid_id() {
        let id = MediaId::generate();
        assert_eq!(
            parse(&format!("rmid {} Mix", id)),
            AppTask::RemoveIdFromPlaylist {
                id,
                playlist: "Mix".to_string()
            }
        );
        assert_eq!(
            parse_command("rmid 42 Mix"),
            Err(CommandError::InvalidId("42".to_string()))
        );
    }

    #[test]
    fn add_media_fields_are_pipe_separated() {
        assert_eq!(
            parse("song Take Five | Dave Brubeck | 325 | Jazz"),
            AppTask::AddMedia(NewMedia::Song {
                title: "Take Five".to_string(),
                artist: "Dave Brubeck".to_string(),
                duration_secs: 325,
                genre: Genre::Jazz,
            })
        );
        assert_eq!(
            parse("podcast TechWeekly | Carlos Lima | 2400 | 7"),
            AppTask::AddMedia(NewMedia::Podcast {
                title: "TechWeekly".to_string(),
                host: "Carlos Lima".to_string(),
                duration_secs: 2400,
                episodes: Some(7),
            })
        );
        assert_eq!(
            parse("audiobook O Alienista | Machado de Assis | | 21600"),
            AppTask::AddMedia(NewMedia::Audiobook {
                title: "O Alienista".to_string(),
                author: "Machado de Assis".to_string(),
                narrator: String::new(),
                duration_secs: 21600,
            })
        );
        assert_eq!(
            parse_command("song Take Five | Dave Brubeck"),
            Err(CommandError::Usage(SONG_USAGE))
        );
    }

    #[test]
    fn edit_commands() {
        assert_eq!(
            parse("edit 3 title Blue Rondo"),
            AppTask::EditMedia {
                pick: 3,
                edit: MediaEdit::Title("Blue Rondo".to_string())
            }
        );
        assert_eq!(
            parse("edit 1 genre blues"),
            AppTask::EditMedia {
                pick: 1,
                edit: MediaEdit::Genre(Genre::Blues)
            }
        );
        assert_eq!(
            parse_command("edit 1 colour red"),
            Err(CommandError::Usage(EDIT_USAGE))
        );
    }

    #[test]
    fn unknown_commands_are_reported() {
        assert_eq!(
            parse_command("dance now"),
            Err(CommandError::UnknownCommand("dance".to_string()))
        );
    }
}
