use serde::{Deserialize, Serialize};


/// The API's page envelope: `{ "has_next": .., "number": .., "results": [..] }`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Page<T> {
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub number: u32,
    pub results: Vec<T>,
}

/// League metadata block of the standings document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LeagueInfo {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub created: String,
    /// Gameweek the league started in.
    pub start_event: u32,
    /// Number of knockout rounds; `null` for leagues without a knockout stage.
    #[serde(default)]
    pub ko_rounds: Option<u32>,
    #[serde(default)]
    pub league_type: String,
}

/// One row of the head-to-head table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StandingsEntry {
    #[serde(default)]
    pub id: u64,
    /// The entry (fantasy team) this row belongs to.
    pub entry: u64,
    pub entry_name: String,
    #[serde(default)]
    pub player_name: String,
    pub rank: u32,
    #[serde(default)]
    pub last_rank: u32,
    /// League points: 3 per win, 1 per draw.
    pub total: u32,
    pub matches_played: u32,
    pub matches_won: u32,
    pub matches_drawn: u32,
    pub matches_lost: u32,
    /// Fantasy points scored across all matches.
    #[serde(default)]
    pub points_for: i32,
}

/// An entry that joined after the league started.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewEntry {
    pub entry: u64,
    pub entry_name: String,
    #[serde(default)]
    pub player_first_name: String,
    #[serde(default)]
    pub player_last_name: String,
    #[serde(default)]
    pub joined_time: Option<String>,
}

/// Root of `leagues-h2h-standings/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StandingsDocument {
    pub league: LeagueInfo,
    pub new_entries: Page<NewEntry>,
    pub standings: Page<StandingsEntry>,
}

/// A single head-to-head fixture.
///
/// `entry_2_*` is empty when an odd-sized league pairs an entry with the
/// league average.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct H2HMatch {
    pub id: u64,
    /// Gameweek the match is played in.
    pub event: u32,
    pub entry_1_entry: Option<u64>,
    #[serde(default)]
    pub entry_1_name: Option<String>,
    #[serde(default)]
    pub entry_1_player_name: Option<String>,
    pub entry_1_points: i32,
    #[serde(default)]
    pub entry_1_win: u32,
    #[serde(default)]
    pub entry_1_draw: u32,
    #[serde(default)]
    pub entry_1_loss: u32,
    pub entry_2_entry: Option<u64>,
    #[serde(default)]
    pub entry_2_name: Option<String>,
    #[serde(default)]
    pub entry_2_player_name: Option<String>,
    pub entry_2_points: i32,
    #[serde(default)]
    pub entry_2_win: u32,
    #[serde(default)]
    pub entry_2_draw: u32,
    #[serde(default)]
    pub entry_2_loss: u32,
    #[serde(default)]
    pub is_knockout: bool,
    #[serde(default)]
    pub winner: Option<u64>,
    #[serde(default)]
    pub finished: bool,
}

/// Root of `leagues-entries-and-h2h-matches/league/{id}?page={n}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchesEnvelope {
    pub matches: Page<H2HMatch>,
}
