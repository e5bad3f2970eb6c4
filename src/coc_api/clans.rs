use tracing::{debug, instrument};

use crate::coc_api;
use crate::error::Result;
use crate::model::{ClanInfo, LeagueGroup};
use crate::tag::Tag;

pub(crate) fn clan_url(base_url: &str, clan: &Tag) -> String {
    format!("{base_url}/clans/{}", clan.path_segment())
}

pub(crate) fn league_group_url(base_url: &str, clan: &Tag) -> String {
    format!("{}/currentwar/leaguegroup", clan_url(base_url, clan))
}

#[instrument(skip(client, base_url), fields(clan = %clan))]
pub(crate) async fn get_clan(
    client: &reqwest::Client,
    base_url: &str,
    clan: &Tag,
) -> Result<ClanInfo> {
    let url = clan_url(base_url, clan);
    let info: ClanInfo = coc_api::get_json(client, &url).await?;
    debug!(
        name = %info.name,
        level = info.clan_level,
        members = info.members,
        "fetched clan info"
    );
    Ok(info)
}

#[instrument(skip(client, base_url), fields(clan = %clan))]
pub(crate) async fn get_league_group(
    client: &reqwest::Client,
    base_url: &str,
    clan: &Tag,
) -> Result<LeagueGroup> {
    let url = league_group_url(base_url, clan);
    let group: LeagueGroup = coc_api::get_json(client, &url).await?;
    debug!(
        rounds = group.rounds.len(),
        clans = group.clans.len(),
        state = group.state.as_deref().unwrap_or_default(),
        "fetched league group"
    );
    Ok(group)
}
