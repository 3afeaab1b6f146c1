//! Head-to-head league entity.

use std::fmt;

use secrecy::SecretString;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::{
    fixtures::fetch_fixtures,
    http::{standings_url, FplClient},
    session::Session,
    types::{H2HMatch, NewEntry, StandingsDocument, StandingsEntry},
};
use crate::{config::ClientConfig, error::Result, LeagueId};

/// A head-to-head league.
///
/// Metadata and standings are loaded once, by [`League::load`], and never
/// change afterwards. Fixtures need a logged-in [`Session`] and are fetched
/// fresh on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct League {
    id: LeagueId,
    name: String,
    created: String,
    started: u32,
    ko_rounds: Option<u32>,
    league_type: String,
    standings: Vec<StandingsEntry>,
    new_entries: Vec<NewEntry>,
}

impl League {
    /// Fetch the league's standings document and build the league from it.
    pub async fn load(client: &FplClient, id: LeagueId) -> Result<Self> {
        let url = standings_url(&client.config().api_base, id);
        let doc: StandingsDocument = client.get_json(&url).await?;
        let league = Self::from_document(id, doc);

        debug!(
            "loaded league {} with {} standings entries",
            league,
            league.standings.len()
        );
        Ok(league)
    }

    /// Build a league from an already decoded standings document.
    pub fn from_document(id: LeagueId, doc: StandingsDocument) -> Self {
        let StandingsDocument {
            league,
            new_entries,
            standings,
        } = doc;

        Self {
            id,
            name: league.name,
            created: league.created,
            started: league.start_event,
            ko_rounds: league.ko_rounds,
            league_type: league.league_type,
            standings: standings.results,
            new_entries: new_entries.results,
        }
    }

    pub fn id(&self) -> LeagueId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the league was created, as reported by the API.
    pub fn created(&self) -> &str {
        &self.created
    }

    /// Gameweek the league started in.
    pub fn started(&self) -> u32 {
        self.started
    }

    pub fn ko_rounds(&self) -> Option<u32> {
        self.ko_rounds
    }

    pub fn league_type(&self) -> &str {
        &self.league_type
    }

    /// Table rows in the order the API ranks them.
    pub fn standings(&self) -> &[StandingsEntry] {
        &self.standings
    }

    pub fn new_entries(&self) -> &[NewEntry] {
        &self.new_entries
    }

    /// All fixtures and results of the league.
    pub async fn get_fixtures(&self, session: &Session) -> Result<Vec<H2HMatch>> {
        fetch_fixtures(session, self.id, None).await
    }

    /// Like [`League::get_fixtures`], stopping early once `cancel` fires.
    pub async fn get_fixtures_with_cancel(
        &self,
        session: &Session,
        cancel: &CancellationToken,
    ) -> Result<Vec<H2HMatch>> {
        fetch_fixtures(session, self.id, Some(cancel)).await
    }

    /// Log in, fetch all fixtures and close the session again.
    pub async fn get_fixtures_with_login(
        &self,
        config: &ClientConfig,
        email: &str,
        password: &SecretString,
    ) -> Result<Vec<H2HMatch>> {
        let session = Session::login(config, email, password).await?;
        let fixtures = self.get_fixtures(&session).await;
        session.close();
        fixtures
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fpl::types::{LeagueInfo, Page};

    fn document() -> StandingsDocument {
        StandingsDocument {
            league: LeagueInfo {
                id: 12,
                name: "Sunday League".to_string(),
                created: "2018-08-01T09:00:00Z".to_string(),
                start_event: 3,
                ko_rounds: Some(1),
                league_type: "x".to_string(),
            },
            new_entries: Page {
                has_next: false,
                number: 1,
                results: Vec::new(),
            },
            standings: Page {
                has_next: false,
                number: 1,
                results: vec![StandingsEntry {
                    id: 1,
                    entry: 77,
                    entry_name: "False Nines".to_string(),
                    player_name: "Robin Gray".to_string(),
                    rank: 1,
                    last_rank: 2,
                    total: 9,
                    matches_played: 3,
                    matches_won: 3,
                    matches_drawn: 0,
                    matches_lost: 0,
                    points_for: 180,
                }],
            },
        }
    }

    #[test]
    fn test_from_document() {
        let league = League::from_document(LeagueId::new(12), document());

        assert_eq!(league.id(), LeagueId::new(12));
        assert_eq!(league.name(), "Sunday League");
        assert_eq!(league.created(), "2018-08-01T09:00:00Z");
        assert_eq!(league.started(), 3);
        assert_eq!(league.ko_rounds(), Some(1));
        assert_eq!(league.league_type(), "x");
        assert_eq!(league.standings().len(), 1);
        assert_eq!(league.standings()[0].entry, 77);
        assert!(league.new_entries().is_empty());
    }

    #[test]
    fn test_display() {
        let league = League::from_document(LeagueId::new(12), document());
        assert_eq!(league.to_string(), "Sunday League - 12");
    }
}
