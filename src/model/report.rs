use itertools::Itertools;
use serde::Serialize;

use crate::tag::Tag;

/// Which side of a war record the target clan is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum WarRole {
    /// The record's `clan` side.
    #[strum(serialize = "clan")]
    Primary,
    /// The record's `opponent` side.
    Opponent,
}

impl WarRole {
    pub fn other(self) -> Self {
        match self {
            WarRole::Primary => WarRole::Opponent,
            WarRole::Opponent => WarRole::Primary,
        }
    }
}

/// A war the target clan fought, and on which side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarRef {
    pub tag: Tag,
    pub role: WarRole,
}

/// One spreadsheet row: a single member's results in a single war.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberRow {
    pub war_num: u32,
    pub clan_name: String,
    pub clan_tag: String,
    pub opponent_clan_name: String,
    pub opponent_clan_tag: String,
    pub map_position: u32,
    pub player_name: String,
    pub player_tag: String,
    pub townhall_lvl: u32,
    pub attack_opponent: Option<String>,
    pub attack_stars: Option<u8>,
    pub attack_percent: Option<f64>,
    pub attack_order: Option<u32>,
    pub defenses: u32,
    pub defense_opponent: Option<String>,
    pub defense_stars: Option<u8>,
    pub defense_percent: Option<f64>,
    pub defense_order: Option<u32>,
}

/// A single cell value of a [`MemberRow`].
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    fn text(s: &str) -> Self {
        Cell::Text(s.to_string())
    }

    fn number(n: impl Into<f64>) -> Self {
        Cell::Number(n.into())
    }

    fn optional_text(s: Option<&String>) -> Self {
        s.map_or(Cell::Empty, |s| Cell::text(s))
    }

    fn optional_number<T: Into<f64>>(n: Option<T>) -> Self {
        n.map_or(Cell::Empty, Cell::number)
    }
}

impl MemberRow {
    pub const COLUMNS: [&'static str; 18] = [
        "war_num",
        "clan_name",
        "clan_tag",
        "opponent_clan_name",
        "opponent_clan_tag",
        "map_position",
        "player_name",
        "player_tag",
        "townhall_lvl",
        "attack_opponent",
        "attack_stars",
        "attack_percent",
        "attack_order",
        "defenses",
        "defense_opponent",
        "defense_stars",
        "defense_percent",
        "defense_order",
    ];

    /// The row's values, in [`MemberRow::COLUMNS`] order.
    pub fn cells(&self) -> [Cell; 18] {
        [
            Cell::number(self.war_num),
            Cell::text(&self.clan_name),
            Cell::text(&self.clan_tag),
            Cell::text(&self.opponent_clan_name),
            Cell::text(&self.opponent_clan_tag),
            Cell::number(self.map_position),
            Cell::text(&self.player_name),
            Cell::text(&self.player_tag),
            Cell::number(self.townhall_lvl),
            Cell::optional_text(self.attack_opponent.as_ref()),
            Cell::optional_number(self.attack_stars),
            Cell::optional_number(self.attack_percent),
            Cell::optional_number(self.attack_order),
            Cell::number(self.defenses),
            Cell::optional_text(self.defense_opponent.as_ref()),
            Cell::optional_number(self.defense_stars),
            Cell::optional_number(self.defense_percent),
            Cell::optional_number(self.defense_order),
        ]
    }
}

/// All member rows of all resolved wars, grouped by war.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub rows: Vec<MemberRow>,
}

impl Report {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct wars present in the report.
    pub fn war_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.war_num)
            .dedup()
            .count()
    }
}

impl Extend<MemberRow> for Report {
    fn extend<I: IntoIterator<Item = MemberRow>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}
