//! Clan War League statistics for a single clan, flattened into spreadsheet rows.
//!
//! The pipeline fetches the clan's league group, finds the wars the clan
//! fought in ([`resolve_matchups`]), turns each war's roster into
//! [`MemberRow`]s ([`flatten_war`]) and writes the combined [`Report`] to an
//! `.xlsx` file ([`write_xlsx`]).

pub use client::{CocClient, CwlApi};
pub use config::Config;
pub use error::{CwlError, Result};
pub use export::{output_file_name, write_xlsx};
pub use flatten::{flatten_record, flatten_war, member_row};
pub use model::*;
pub use report::{assemble_report, collect_report};
pub use resolver::{resolve_matchups, role_of};
pub use tag::{Tag, TagKind};

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod flatten;
pub mod model;
pub mod report;
pub mod resolver;
pub mod tag;

pub(crate) mod coc_api;
#[cfg(test)]
pub(crate) mod testing;
