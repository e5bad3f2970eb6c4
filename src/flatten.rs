use itertools::Itertools;
use tracing::{debug, instrument};

use crate::client::CwlApi;
use crate::error::{CwlError, Result};
use crate::model::{Member, MemberRow, Side, WarRecord, WarRef, WarRole};

/// Fetch one war and turn the target clan's roster into rows.
///
/// Rows come back sorted by map position. `war_num` is copied into every row.
#[instrument(skip(api), fields(war = %war_ref.tag, role = %war_ref.role))]
pub async fn flatten_war<A>(api: &A, war_ref: &WarRef, war_num: u32) -> Result<Vec<MemberRow>>
where
    A: CwlApi + ?Sized,
{
    let record = api.war(&war_ref.tag).await?;
    let rows = flatten_record(&record, war_ref, war_num)?;
    debug!(rows = rows.len(), "flattened war");
    Ok(rows)
}

/// Flatten an already fetched war record.
pub fn flatten_record(
    record: &WarRecord,
    war_ref: &WarRef,
    war_num: u32,
) -> Result<Vec<MemberRow>> {
    let own = side(record, war_ref, war_ref.role)?;
    let opponent = side(record, war_ref, war_ref.role.other())?;

    let rows = own
        .members
        .iter()
        .map(|member| member_row(member, own, opponent, war_num))
        .sorted_by_key(|row| row.map_position)
        .collect_vec();
    Ok(rows)
}

fn side<'a>(record: &'a WarRecord, war_ref: &WarRef, role: WarRole) -> Result<&'a Side> {
    let side = match role {
        WarRole::Primary => record.clan.as_ref(),
        WarRole::Opponent => record.opponent.as_ref(),
    };
    side.ok_or_else(|| CwlError::MissingSide {
        war: war_ref.tag.as_str().to_string(),
        side: match role {
            WarRole::Primary => "clan",
            WarRole::Opponent => "opponent",
        },
    })
}

/// Build the row for one member. Missing attack or defense data leaves the
/// corresponding fields empty.
pub fn member_row(member: &Member, own: &Side, opponent: &Side, war_num: u32) -> MemberRow {
    let attack = member.attacks.first();
    let defense = member.best_opponent_attack.as_ref();

    MemberRow {
        war_num,
        clan_name: own.name.clone(),
        clan_tag: own.tag.clone(),
        opponent_clan_name: opponent.name.clone(),
        opponent_clan_tag: opponent.tag.clone(),
        map_position: member.map_position,
        player_name: member.name.clone(),
        player_tag: member.tag.clone(),
        townhall_lvl: member.townhall_level,
        attack_opponent: attack.map(|a| a.defender_tag.clone()),
        attack_stars: attack.map(|a| a.stars),
        attack_percent: attack.map(|a| a.destruction_percentage),
        attack_order: attack.map(|a| a.order),
        defenses: member.opponent_attacks,
        defense_opponent: defense.map(|d| d.attacker_tag.clone()),
        defense_stars: defense.map(|d| d.stars),
        defense_percent: defense.map(|d| d.destruction_percentage),
        defense_order: defense.map(|d| d.order),
    }
}
