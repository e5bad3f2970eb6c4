use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::error::{CwlError, Result};

/// What a tag identifies. Decides the expected length of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TagKind {
    /// Clan and player tags.
    Clan,
    /// War tags from a league group round.
    War,
}

impl TagKind {
    pub const fn code_len(self) -> usize {
        match self {
            TagKind::Clan => 8,
            TagKind::War => 9,
        }
    }
}

/// A validated tag, stored without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Tag {
    code: String,
}

impl Tag {
    /// Normalize a raw tag such as `#2PP0JLY8Q`.
    ///
    /// A single leading `#` is stripped, then the whole remainder must be
    /// exactly [`TagKind::code_len`] characters of `A-Z` / `0-9`. Nothing is
    /// truncated or padded.
    pub fn parse(raw: &str, kind: TagKind) -> Result<Self> {
        let code = raw.strip_prefix('#').unwrap_or(raw);
        let valid = code.len() == kind.code_len()
            && code
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if !valid {
            return Err(CwlError::InvalidTag {
                tag: raw.to_string(),
                kind,
            });
        }
        Ok(Self {
            code: code.to_string(),
        })
    }

    pub fn clan(raw: &str) -> Result<Self> {
        Self::parse(raw, TagKind::Clan)
    }

    pub fn war(raw: &str) -> Result<Self> {
        Self::parse(raw, TagKind::War)
    }

    /// The code without `#`.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// The tag as it appears in a request path, with `#` percent-encoded.
    pub fn path_segment(&self) -> String {
        format!("%23{}", self.code)
    }

    /// Compare against a tag as returned by the API (usually `#`-prefixed).
    pub fn matches(&self, raw: &str) -> bool {
        raw.strip_prefix('#').unwrap_or(raw) == self.code
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clan_tag_with_and_without_hash() {
        for code in ["2PP0JLY8", "ABCDEFGH", "12345678", "Q8R9LLV0"] {
            let plain = Tag::clan(code).unwrap();
            let hashed = Tag::clan(&format!("#{code}")).unwrap();
            assert_eq!(plain, hashed);
            assert_eq!(plain.as_str(), code);
            assert_eq!(plain.as_str().len(), 8);
        }
    }

    #[test]
    fn test_war_tag() {
        let tag = Tag::war("#8QU8J9LP2").unwrap();
        assert_eq!(tag.as_str(), "8QU8J9LP2");
        assert_eq!(tag, Tag::parse("8QU8J9LP2", TagKind::War).unwrap());
        assert_eq!(tag.to_string(), "#8QU8J9LP2");
        assert_eq!(tag.path_segment(), "%238QU8J9LP2");
    }

    #[test]
    fn test_rejects_malformed_tags() {
        let bad = [
            "",
            "#",
            "#0",
            "ABCDEFG",
            "ABCDEFGHI",
            "abcdefgh",
            "ABCD-FGH",
            "ABC DEFG",
            "##ABCDEFG",
            "ABCDEFGH#",
            "ÄBCDEFGH",
        ];
        for raw in bad {
            let err = Tag::clan(raw).unwrap_err();
            assert!(
                matches!(err, CwlError::InvalidTag { kind: TagKind::Clan, .. }),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_length_depends_on_kind() {
        assert!(Tag::war("#2PP0JLY8").is_err());
        assert!(Tag::clan("#8QU8J9LP2").is_err());
    }

    #[test]
    fn test_matches_raw_api_tag() {
        let tag = Tag::clan("2PP0JLY8").unwrap();
        assert!(tag.matches("#2PP0JLY8"));
        assert!(tag.matches("2PP0JLY8"));
        assert!(!tag.matches("#2PP0JLY9"));
        assert!(!tag.matches(""));
    }
}
