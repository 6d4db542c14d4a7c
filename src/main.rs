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

//! # Mini Spotify.
//!
//! A console media catalog and playlist manager.
//!
//! Users register, search a catalog of songs, podcasts and audiobooks, and
//! organise what they find into named playlists.
//!
//! ## Architecture
//!
//! * The **model** holds the catalog with its title, artist and genre
//!   indices, and the user with their playlists.
//! * The **session** bundles the model state for one run and is passed
//!   explicitly to every operation.
//! * The **commander** parses each console line into a task, and **tasks**
//!   run it against the session and produce a reply to print.
//!
//! Nothing is persisted between runs apart from the configuration file.

mod commander;
mod config;
mod error;
mod model;
mod session;
mod tasks;
mod util;

use anyhow::{Context, Result};
use std::io::{self, BufRead};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    commander::parse_command,
    config::AppConfig,
    session::{Session, seed::seed_catalog},
    tasks::{Reply, handle_task},
    util::term,
};

/// The entry point of the application.
///
/// Loads the configuration, prepares the session and hands over to the
/// console loop until the user quits or input ends.
fn main() -> Result<()> {
    let config = config::load_config();

    init_logging(&config).context("Failed to initialise logging")?;

    let mut session = Session::new(config);
    if session.config.seed_catalog {
        seed_catalog(&mut session.catalog).context("Failed to seed the catalog")?;
    }

    info!(media = session.catalog.len(), "Session ready");

    run(&mut session).context("Application error occurred")
}

/// Installs the `tracing` subscriber.
///
/// Logs go to stderr so they never interleave with command output. The
/// filter comes from `RUST_LOG` when set, otherwise from the configuration.
fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("Invalid log filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()?;

    Ok(())
}

/// Greets the user and runs the console until `q` or end of input.
fn run(session: &mut Session) -> Result<()> {
    term::print_heading("=== Welcome to Mini Spotify ===");
    println!("Type 'help' for the list of commands.");

    run_commands(session, io::stdin().lock())?;

    println!("Goodbye!");

    Ok(())
}

/// Reads and runs commands from `reader` until `q` or end of input.
///
/// Failed commands and unreadable lines are reported and the loop carries
/// on. Only other I/O errors on the console itself end it.
fn run_commands(session: &mut Session, reader: impl BufRead) -> Result<()> {
    let mut input = reader.lines();

    loop {
        term::print_prompt(&session.config.prompt).context("Failed to write prompt")?;

        let line = match input.next() {
            Some(Ok(line)) => line,
            // The bad bytes are already consumed, so the next read starts clean
            Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                debug!("Unreadable input: {}", e);
                term::print_error("Input was not valid text, please try again");
                continue;
            }
            Some(Err(e)) => return Err(e).context("Failed to read input"),
            None => {
                println!();
                break;
            }
        };

        let task = match parse_command(&line) {
            Ok(Some(task)) => task,
            Ok(None) => continue,
            Err(e) => {
                term::print_error(&e.to_string());
                continue;
            }
        };

        match handle_task(task, session) {
            Ok(Reply::Show { heading, lines }) => {
                if let Some(heading) = heading {
                    term::print_heading(&heading);
                }
                term::print_lines(&lines);
            }
            Ok(Reply::Exit) => break,
            Err(e) => {
                debug!("Task failed: {:#}", e);
                term::print_error(&format!("{:#}", e));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn seeded() -> Session {
        let mut session = Session::new(AppConfig::default());
        seed_catalog(&mut session.catalog).unwrap();
        session
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let mut session = seeded();
        let input = Cursor::new(
            b"ls\n\xff\xfe\nregister Ana ana@example.com\nnew Road Trip\nstats\nq\n".to_vec(),
        );

        run_commands(&mut session, input).unwrap();

        assert_eq!(session.stats().playlists, 1);
        assert_eq!(session.user().unwrap().playlists()[0].name(), "Road Trip");
    }

    #[test]
    fn failed_commands_do_not_end_the_loop() {
        let mut session = seeded();
        let input = Cursor::new(b"bogus\nnew Mix\nregister Ana ana@example.com\nnew Mix\n".to_vec());

        run_commands(&mut session, input).unwrap();

        assert_eq!(session.stats().playlists, 1);
    }

    #[test]
    fn quit_stops_reading() {
        let mut session = seeded();
        let input = Cursor::new(b"q\nregister Ana ana@example.com\n".to_vec());

        run_commands(&mut session, input).unwrap();

        assert!(session.user().is_err());
    }
}
