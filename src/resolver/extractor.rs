//! Candidate extraction from address-bearing documents.

use std::borrow::Cow;

use regex::bytes::{Captures, Regex};

const OCTET_GROUPS: [&str; 4] = ["ip1", "ip2", "ip3", "ip4"];
const ADDRESS_GROUP: &str = "ip";

/// How a pattern produces its candidate, decided once from the pattern's
/// named groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Pattern names all of `ip1`..`ip4`; the candidate is the four captures
    /// joined with `.`.
    OctetGroups,
    /// Pattern names `ip`; the candidate is that capture.
    AddressGroup,
    /// No recognized group names; the candidate is the whole match.
    BareMatch,
}

impl PatternKind {
    /// Classifies a compiled pattern.
    ///
    /// `OctetGroups` takes priority over `AddressGroup` when a pattern
    /// names both shapes.
    #[must_use]
    pub fn classify(regex: &Regex) -> Self {
        let has_group = |name: &str| regex.capture_names().flatten().any(|n| n == name);

        if OCTET_GROUPS.into_iter().all(&has_group) {
            Self::OctetGroups
        } else if has_group(ADDRESS_GROUP) {
            Self::AddressGroup
        } else {
            Self::BareMatch
        }
    }
}

/// Extracts a literal IPv4 candidate from raw bytes.
///
/// The extractor does not validate the candidate. Once a pattern is
/// classified as group based, a document whose first match lacks the
/// required groups (or that has no match at all) yields an empty
/// candidate; it never falls back to a plainer strategy.
///
/// # Example
///
/// ```
/// use checkip_agent::resolver::{Extractor, PatternKind};
///
/// let extractor = Extractor::new(r"addr=(?P<ip>[\d.]+)").unwrap();
/// assert_eq!(extractor.kind(), PatternKind::AddressGroup);
/// assert_eq!(extractor.extract(b"host=a addr=10.0.0.7"), "10.0.0.7");
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    regex: Regex,
    kind: PatternKind,
}

impl Extractor {
    /// Compiles `pattern` and classifies it.
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error if `pattern` is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        let kind = PatternKind::classify(&regex);
        Ok(Self { regex, kind })
    }

    /// Returns the strategy this extractor dispatches to.
    #[must_use]
    pub const fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Returns the source text of the pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Extracts the candidate from `document`, or an empty string when
    /// nothing usable is found.
    #[must_use]
    pub fn extract(&self, document: &[u8]) -> String {
        match self.kind {
            PatternKind::OctetGroups => self
                .regex
                .captures(document)
                .and_then(|caps| join_octets(&caps))
                .unwrap_or_default(),
            PatternKind::AddressGroup => self
                .regex
                .captures(document)
                .and_then(|caps| caps.name(ADDRESS_GROUP))
                .map(|m| lossy(m.as_bytes()).into_owned())
                .unwrap_or_default(),
            PatternKind::BareMatch => self
                .regex
                .find(document)
                .map(|m| lossy(m.as_bytes()).into_owned())
                .unwrap_or_default(),
        }
    }
}

fn join_octets(caps: &Captures<'_>) -> Option<String> {
    let mut parts = Vec::with_capacity(OCTET_GROUPS.len());
    for name in OCTET_GROUPS {
        parts.push(lossy(caps.name(name)?.as_bytes()));
    }
    Some(parts.join("."))
}

fn lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
