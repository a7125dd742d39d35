//! Games document (`data/games.json`) and the built-in default games.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root of the games document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GamesConfig {
    pub site: Option<SiteInfo>,
    pub games: Option<Vec<Game>>,
}

/// Page-level metadata carried by the games document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub title: Option<String>,
    pub tagline: Option<String>,
    /// Date-time string the countdown runs towards.
    pub countdown_target: Option<String>,
}

/// Game identifier. Documents use both numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameId {
    Number(i64),
    Text(String),
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameId::Number(n) => write!(f, "{}", n),
            GameId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A single game entry.
///
/// Every field is optional so that a malformed entry still renders
/// (with empty text) instead of failing the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Game {
    pub id: Option<GameId>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Free-form label such as "Easy" or "Medium".
    pub difficulty: Option<String>,
    /// Empty means "use the fallback gradient".
    pub thumbnail: Option<String>,
    pub url: Option<String>,
}

impl Game {
    fn builtin(id: i64, name: &str, description: &str, difficulty: &str) -> Self {
        Self {
            id: Some(GameId::Number(id)),
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            difficulty: Some(difficulty.to_string()),
            thumbnail: Some(String::new()),
            url: Some("#".to_string()),
        }
    }
}

/// Games rendered when the content documents could not be loaded.
pub fn default_games() -> Vec<Game> {
    vec![
        Game::builtin(
            1,
            "Math Adventure",
            "Solve math puzzles in a fun adventure game",
            "Easy",
        ),
        Game::builtin(
            2,
            "Word Quest",
            "Build vocabulary while exploring magical worlds",
            "Medium",
        ),
    ]
}
