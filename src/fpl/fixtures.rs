use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use super::{
    http::fixtures_page_url,
    session::Session,
    types::{H2HMatch, MatchesEnvelope},
};
use crate::{
    error::{FplError, Result},
    LeagueId,
};

/// Collect every head-to-head fixture of a league.
///
/// Pages are requested one at a time starting from page 1 and the walk stops
/// at the first page with no results. Fixtures keep the API's order. More
/// than `max_pages` non-empty pages is reported as [`FplError::Fetch`].
///
/// When `cancel` fires, the in-flight request is abandoned and no further
/// pages are requested.
pub async fn fetch_fixtures(
    session: &Session,
    league_id: LeagueId,
    cancel: Option<&CancellationToken>,
) -> Result<Vec<H2HMatch>> {
    let config = session.config();
    let max_pages = config.max_pages;
    let mut fixtures = Vec::new();

    for page in 1..=max_pages {
        let url = fixtures_page_url(&config.api_base, league_id, page);
        let request = session.get_json::<MatchesEnvelope>(&url);

        let envelope = match cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!("fixture retrieval for league {league_id} cancelled at page {page}");
                    return Err(FplError::Cancelled { league_id });
                }
                result = request => result?,
            },
            None => request.await?,
        };

        let results = envelope.matches.results;
        trace!("league {league_id} page {page}: {} fixtures", results.len());

        if results.is_empty() {
            debug!(
                "league {league_id}: {} fixtures over {} pages",
                fixtures.len(),
                page - 1
            );
            return Ok(fixtures);
        }
        fixtures.extend(results);
    }

    warn!("league {league_id} still had fixtures after {max_pages} pages");
    Err(FplError::Fetch {
        league_id,
        max_pages,
    })
}
