use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four independent catalogs.
///
/// Each domain owns its own catalog table, neighbor index and field
/// mapping; a load failure in one domain never affects the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Movies,
    Music,
    Anime,
    Games,
}

impl Domain {
    pub const ALL: [Domain; 4] = [Domain::Movies, Domain::Music, Domain::Anime, Domain::Games];

    /// File name of the tabular catalog artifact for this domain.
    pub fn catalog_file(&self) -> &'static str {
        match self {
            Domain::Movies => "movies.csv",
            Domain::Music => "music.csv",
            Domain::Anime => "anime.csv",
            Domain::Games => "games.csv",
        }
    }

    /// File name of the precomputed neighbor-table artifact.
    ///
    /// The precomputation pipeline names these with the singular form
    /// of the domain, so movies/games differ from their catalog stem.
    pub fn neighbors_file(&self) -> &'static str {
        match self {
            Domain::Movies => "top_movie_similarities.json",
            Domain::Music => "top_music_similarities.json",
            Domain::Anime => "top_anime_similarities.json",
            Domain::Games => "top_game_similarities.json",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Domain::Movies => "movies",
            Domain::Music => "music",
            Domain::Anime => "anime",
            Domain::Games => "games",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Domain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "movies" | "movie" => Ok(Domain::Movies),
            "music" => Ok(Domain::Music),
            "anime" => Ok(Domain::Anime),
            "games" | "game" => Ok(Domain::Games),
            other => Err(Error::UnknownDomain(other.to_string())),
        }
    }
}
