use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::client::CwlApi;
use crate::error::{CwlError, Result};
use crate::model::{ClanInfo, LeagueGroup, WarRecord};
use crate::tag::Tag;

/// In-memory API serving JSON fixtures. Unknown wars answer 404.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub league_group: Option<Value>,
    pub clan: Option<Value>,
    pub wars: HashMap<String, Value>,
    pub war_requests: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_rounds(rounds: &[&[&str]]) -> Self {
        let rounds: Vec<Value> = rounds
            .iter()
            .map(|tags| json!({ "warTags": tags }))
            .collect();
        Self {
            league_group: Some(json!({ "state": "inWar", "season": "2026-10", "rounds": rounds })),
            ..Self::default()
        }
    }

    pub fn war(mut self, war_tag: &str, record: Value) -> Self {
        self.wars.insert(war_tag.trim_start_matches('#').to_string(), record);
        self
    }

    pub fn requested_wars(&self) -> Vec<String> {
        self.war_requests.lock().unwrap().clone()
    }
}

fn not_found(url: String) -> CwlError {
    CwlError::Api {
        url,
        status: reqwest::StatusCode::NOT_FOUND,
        reason: "notFound".to_string(),
        message: None,
    }
}

fn decode<T: serde::de::DeserializeOwned>(url: String, value: &Value) -> Result<T> {
    serde_json::from_value(value.clone()).map_err(|e| CwlError::Decode { url, source: e })
}

#[async_trait]
impl CwlApi for FakeApi {
    async fn league_group(&self, clan: &Tag) -> Result<LeagueGroup> {
        let url = format!("fake://clans/{}/currentwar/leaguegroup", clan.path_segment());
        match &self.league_group {
            Some(value) => decode(url, value),
            None => Err(not_found(url)),
        }
    }

    async fn war(&self, war: &Tag) -> Result<WarRecord> {
        self.war_requests.lock().unwrap().push(war.as_str().to_string());
        let url = format!("fake://clanwarleagues/wars/{}", war.path_segment());
        match self.wars.get(war.as_str()) {
            Some(value) => decode(url, value),
            None => Err(not_found(url)),
        }
    }

    async fn clan(&self, clan: &Tag) -> Result<ClanInfo> {
        let url = format!("fake://clans/{}", clan.path_segment());
        match &self.clan {
            Some(value) => decode(url, value),
            None => Err(not_found(url)),
        }
    }
}

/// A war side as the API returns it.
pub(crate) fn side(tag: &str, name: &str, members: Vec<Value>) -> Value {
    json!({ "tag": tag, "name": name, "clanLevel": 10, "members": members })
}

pub(crate) fn member(tag: &str, name: &str, map_position: u32) -> Value {
    json!({
        "tag": tag,
        "name": name,
        "townhallLevel": 13,
        "mapPosition": map_position,
        "opponentAttacks": 0
    })
}

pub(crate) fn attack(attacker: &str, defender: &str, stars: u8, percent: u32, order: u32) -> Value {
    json!({
        "attackerTag": attacker,
        "defenderTag": defender,
        "stars": stars,
        "destructionPercentage": percent,
        "order": order,
        "duration": 90
    })
}

pub(crate) fn war(clan: Value, opponent: Value) -> Value {
    json!({ "state": "warEnded", "teamSize": 15, "clan": clan, "opponent": opponent })
}
