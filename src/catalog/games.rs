//! Benchmark game catalog.
//!
//! The fixed set of titles every SKU/build combination is scored against.
//! Ids are stable; the performance index averages over the whole list.

use serde::Serialize;

/// Broad genre bucket, used by the dashboard for grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Genre {
    Rpg,
    ActionRpg,
    Esports,
    BattleRoyale,
    Moba,
    Simulation,
    ActionAdventure,
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Genre::Rpg => write!(f, "RPG"),
            Genre::ActionRpg => write!(f, "Action RPG"),
            Genre::Esports => write!(f, "Esports"),
            Genre::BattleRoyale => write!(f, "Battle Royale"),
            Genre::Moba => write!(f, "MOBA"),
            Genre::Simulation => write!(f, "Simulation"),
            Genre::ActionAdventure => write!(f, "Action Adventure"),
        }
    }
}

/// A benchmarked game title.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    /// Stable integer id used in keys
    pub id: u32,
    /// Display name
    pub name: &'static str,
    /// Genre bucket
    pub genre: Genre,
}

/// Built-in game catalog.
pub static GAMES: &[Game] = &[
    Game {
        id: 1,
        name: "Cyberpunk 2077",
        genre: Genre::Rpg,
    },
    Game {
        id: 2,
        name: "Counter-Strike 2",
        genre: Genre::Esports,
    },
    Game {
        id: 3,
        name: "Baldur's Gate 3",
        genre: Genre::Rpg,
    },
    Game {
        id: 4,
        name: "Starfield",
        genre: Genre::Rpg,
    },
    Game {
        id: 5,
        name: "Elden Ring",
        genre: Genre::ActionRpg,
    },
    Game {
        id: 6,
        name: "Fortnite",
        genre: Genre::BattleRoyale,
    },
    Game {
        id: 7,
        name: "Microsoft Flight Simulator 2024",
        genre: Genre::Simulation,
    },
    Game {
        id: 8,
        name: "League of Legends",
        genre: Genre::Moba,
    },
    Game {
        id: 9,
        name: "Hogwarts Legacy",
        genre: Genre::ActionAdventure,
    },
    Game {
        id: 10,
        name: "Black Myth: Wukong",
        genre: Genre::ActionRpg,
    },
    Game {
        id: 11,
        name: "Apex Legends",
        genre: Genre::BattleRoyale,
    },
    Game {
        id: 12,
        name: "Dota 2",
        genre: Genre::Moba,
    },
];
