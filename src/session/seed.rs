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

//! Demo catalog loaded at start-up when `seed_catalog` is enabled.

use tracing::debug;

use crate::{
    error::Result,
    model::{catalog::Catalog, genre::Genre, media::Media},
};

pub(crate) fn seed_catalog(catalog: &mut Catalog) -> Result<()> {
    let media = [
        Media::song("Garota de Ipanema", "Tom Jobim", 330, Genre::Mpb)?,
        Media::song("Bohemian Rhapsody", "Queen", 354, Genre::Rock)?,
        Media::song("Take Five", "Dave Brubeck", 325, Genre::Jazz)?,
        Media::song("Nocturne Op.9 No.2", "Chopin", 260, Genre::Classical)?,
        Media::song("Rolling in the Deep", "Adele", 228, Genre::Pop)?,
        Media::podcast("Ciência Sem Filtro #42", "Dra. Ana Souza", 3600)?,
        Media::podcast("TechWeekly: IA na prática", "Carlos Lima", 2400)?,
        Media::audiobook("Dom Casmurro", "Machado de Assis", "João Silva", 28800)?,
        Media::audiobook("O Alienista", "Machado de Assis", "Maria Rocha", 21600)?,
    ];

    for item in media {
        catalog.add(item)?;
    }

    debug!(count = catalog.len(), "Seeded catalog");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_every_kind() {
        let mut catalog = Catalog::new();
        seed_catalog(&mut catalog).unwrap();

        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.find_by_genre(Genre::Jazz).len(), 1);
        assert_eq!(catalog.find_by_genre(Genre::Podcast).len(), 2);
        assert_eq!(catalog.find_by_artist("machado de assis").len(), 2);
        assert!(catalog.find_by_genre(Genre::Metal).is_empty());
    }
}
