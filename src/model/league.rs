use serde::{Deserialize, Serialize};

/// The league group a clan is currently placed in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueGroup {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub clans: Vec<LeagueClan>,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

/// A clan taking part in the league group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueClan {
    pub tag: String,
    pub name: String,
}

/// One round of the league group. Each round holds one war per clan pair.
///
/// Wars that are not scheduled yet are listed with the placeholder tag `#0`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    #[serde(default)]
    pub war_tags: Vec<String>,
}
