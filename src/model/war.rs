use serde::{Deserialize, Serialize};

/// A single league war as returned by the API.
///
/// Either side may be missing from an incomplete record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarRecord {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub team_size: Option<u32>,
    #[serde(default)]
    pub clan: Option<Side>,
    #[serde(default)]
    pub opponent: Option<Side>,
}

/// One of the two clans in a war.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Side {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// A war participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub tag: String,
    pub name: String,
    pub townhall_level: u32,
    pub map_position: u32,
    /// League wars allow a single attack, so this holds zero or one entry.
    #[serde(default)]
    pub attacks: Vec<Attack>,
    #[serde(default)]
    pub opponent_attacks: u32,
    #[serde(default)]
    pub best_opponent_attack: Option<Attack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub attacker_tag: String,
    pub defender_tag: String,
    pub stars: u8,
    pub destruction_percentage: f64,
    pub order: u32,
}
