use serde::{Deserialize, Serialize};

/// Basic clan profile. Only the fields the report needs are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanInfo {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub clan_level: Option<u32>,
    #[serde(default)]
    pub members: Option<u32>,
}
