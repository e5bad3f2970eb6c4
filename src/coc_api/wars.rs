use tracing::{debug, instrument};

use crate::coc_api;
use crate::error::Result;
use crate::model::WarRecord;
use crate::tag::Tag;

pub(crate) fn war_url(base_url: &str, war: &Tag) -> String {
    format!("{base_url}/clanwarleagues/wars/{}", war.path_segment())
}

#[instrument(skip(client, base_url), fields(war = %war))]
pub(crate) async fn get_war(
    client: &reqwest::Client,
    base_url: &str,
    war: &Tag,
) -> Result<WarRecord> {
    let url = war_url(base_url, war);
    let record: WarRecord = coc_api::get_json(client, &url).await?;
    debug!(
        state = record.state.as_deref().unwrap_or_default(),
        team_size = record.team_size,
        "fetched war"
    );
    Ok(record)
}
