use tracing::{debug, instrument, warn};

use crate::client::CwlApi;
use crate::model::{Round, WarRecord, WarRef, WarRole};
use crate::tag::Tag;

/// Find the wars of a league group that `clan` takes part in.
///
/// Every war of every round is fetched in order. The result keeps round order
/// and war tag order within a round. A war that cannot be fetched, or in which
/// neither side is `clan`, is left out; resolution itself never fails.
#[instrument(skip(api, rounds), fields(clan = %clan, rounds = rounds.len()))]
pub async fn resolve_matchups<A>(api: &A, clan: &Tag, rounds: &[Round]) -> Vec<WarRef>
where
    A: CwlApi + ?Sized,
{
    let mut war_refs = Vec::new();

    for (round_idx, round) in rounds.iter().enumerate() {
        for raw in &round.war_tags {
            let tag = match Tag::war(raw) {
                Ok(tag) => tag,
                Err(_) => {
                    // "#0" marks a war that is not scheduled yet
                    debug!(round = round_idx + 1, war_tag = %raw, "skipping unscheduled or malformed war tag");
                    continue;
                }
            };

            let record = match api.war(&tag).await {
                Ok(record) => record,
                Err(e) => {
                    warn!(
                        round = round_idx + 1,
                        war = %tag,
                        error = %e,
                        class = e.class(),
                        "skipping war that could not be fetched"
                    );
                    continue;
                }
            };

            match role_of(clan, &record) {
                Some(role) => {
                    debug!(round = round_idx + 1, war = %tag, %role, "matched war");
                    war_refs.push(WarRef { tag, role });
                }
                None => warn!(
                    round = round_idx + 1,
                    war = %tag,
                    has_clan = record.clan.is_some(),
                    has_opponent = record.opponent.is_some(),
                    "war is incomplete or neither side matches clan"
                ),
            }
        }
    }

    debug!(wars = war_refs.len(), "resolved matchups");
    war_refs
}

/// The side of `record` that belongs to `clan`, if any.
///
/// A record missing either side never matches.
pub fn role_of(clan: &Tag, record: &WarRecord) -> Option<WarRole> {
    let (Some(own), Some(opponent)) = (&record.clan, &record.opponent) else {
        return None;
    };
    if clan.matches(&own.tag) {
        Some(WarRole::Primary)
    } else if clan.matches(&opponent.tag) {
        Some(WarRole::Opponent)
    } else {
        None
    }
}
