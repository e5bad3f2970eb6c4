use tracing::{info, instrument, warn};

use crate::client::CwlApi;
use crate::error::Result;
use crate::flatten::flatten_war;
use crate::model::{Report, WarRef};
use crate::resolver::resolve_matchups;
use crate::tag::Tag;

/// Flatten every resolved war into a single report.
///
/// Wars keep their resolved order and are numbered from 1 by their position
/// in `war_refs`. A war that fails to flatten is logged and left out.
#[instrument(skip(api, war_refs), fields(wars = war_refs.len()))]
pub async fn assemble_report<A>(api: &A, war_refs: &[WarRef]) -> Report
where
    A: CwlApi + ?Sized,
{
    let mut report = Report::default();
    for (idx, war_ref) in (1u32..).zip(war_refs) {
        match flatten_war(api, war_ref, idx).await {
            Ok(rows) => report.extend(rows),
            Err(e) => warn!(
                war = %war_ref.tag,
                war_num = idx,
                error = %e,
                class = e.class(),
                "skipping war"
            ),
        }
    }
    report
}

/// Build the full report for `clan`'s current league group.
///
/// Fails only if the league group itself cannot be fetched.
#[instrument(skip(api), fields(clan = %clan))]
pub async fn collect_report<A>(api: &A, clan: &Tag) -> Result<Report>
where
    A: CwlApi + ?Sized,
{
    let group = api.league_group(clan).await?;
    info!(
        rounds = group.rounds.len(),
        season = group.season.as_deref().unwrap_or_default(),
        "league group received"
    );

    let war_refs = resolve_matchups(api, clan, &group.rounds).await;
    info!(wars = war_refs.len(), "matchups gathered");

    let report = assemble_report(api, &war_refs).await;
    info!(
        rows = report.len(),
        wars = report.war_count(),
        "wars received and transformed"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::CwlError;
    use crate::model::{Cell, MemberRow, WarRole};
    use crate::testing::{attack, member, side, war, FakeApi};

    const CLAN: &str = "#2PP0JLY8";

    fn scenario() -> FakeApi {
        let mut hitter = member("#P1", "alice", 1);
        hitter["attacks"] = json!([attack("#P1", "#E1", 2, 80, 3)]);
        let idle = member("#P2", "bob", 2);

        FakeApi::with_rounds(&[&["#AAAAAAAA1", "#AAAAAAAA2"]])
            .war(
                "#AAAAAAAA1",
                war(
                    side(CLAN, "Home", vec![idle, hitter]),
                    side("#9QQ2RR8L", "Away", vec![member("#E1", "x", 1)]),
                ),
            )
            .war(
                "#AAAAAAAA2",
                war(
                    side("#8LL0PQ2V", "Other", vec![member("#E9", "z", 1)]),
                    side(CLAN, "Home", vec![member("#P3", "carol", 1)]),
                ),
            )
    }

    #[tokio::test]
    async fn test_end_to_end() {
        let api = scenario();
        let clan = Tag::clan(CLAN).unwrap();
        let report = collect_report(&api, &clan).await.unwrap();

        assert_eq!(report.len(), 3);
        assert_eq!(report.war_count(), 2);

        let first = &report.rows[0];
        assert_eq!(first.war_num, 1);
        assert_eq!(first.map_position, 1);
        assert_eq!(first.attack_stars, Some(2));
        assert_eq!(first.attack_percent, Some(80.0));

        let second = &report.rows[1];
        assert_eq!(second.war_num, 1);
        assert_eq!(second.map_position, 2);
        assert!(second.attack_opponent.is_none());
        assert!(second.attack_stars.is_none());
        assert!(second.attack_percent.is_none());
        assert!(second.attack_order.is_none());

        let third = &report.rows[2];
        assert_eq!(third.war_num, 2);
        assert_eq!(third.player_name, "carol");
        assert_eq!(third.opponent_clan_name, "Other");

        for row in &report.rows {
            assert_eq!(row.cells().len(), MemberRow::COLUMNS.len());
        }
        assert_eq!(report.rows[1].cells()[10], Cell::Empty);
    }

    #[tokio::test]
    async fn test_failed_war_is_left_out() {
        let api = scenario();
        let refs = vec![
            WarRef {
                tag: Tag::war("AAAAAAAA1").unwrap(),
                role: WarRole::Primary,
            },
            WarRef {
                tag: Tag::war("ZZZZZZZZ9").unwrap(),
                role: WarRole::Primary,
            },
            WarRef {
                tag: Tag::war("AAAAAAAA2").unwrap(),
                role: WarRole::Opponent,
            },
        ];

        let report = assemble_report(&api, &refs).await;

        assert_eq!(report.len(), 3);
        assert_eq!(report.rows[2].war_num, 3);
    }

    #[tokio::test]
    async fn test_missing_league_group_is_fatal() {
        let api = FakeApi::default();
        let clan = Tag::clan(CLAN).unwrap();
        let err = collect_report(&api, &clan).await.unwrap_err();
        assert!(matches!(err, CwlError::Api { .. }));
        assert!(api.requested_wars().is_empty());
    }
}
