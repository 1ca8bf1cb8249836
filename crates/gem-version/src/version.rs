//! Version parsing and comparison

use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::VersionParseError;

/// Version body: a leading number, dotted alphanumeric parts, then an optional
/// hyphen-introduced suffix. Shared with the constraint grammar.
pub(crate) const VERSION_PATTERN: &str =
    r"[0-9]+(?:\.[0-9a-zA-Z]+)*(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?";

lazy_static! {
    // The body is optional: blank input is version "0"
    static ref VERSION_RE: Regex = Regex::new(&format!(r"^(?:{})?$", VERSION_PATTERN)).unwrap();

    static ref SEGMENT_RE: Regex = Regex::new(r"[0-9]+|[a-zA-Z]+").unwrap();
}

/// A single numeric or alphabetic token of a version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Numeric(u64),
    Alphabetic(String),
}

impl Segment {
    fn from_token(token: &str, version: &str) -> Result<Self, VersionParseError> {
        if token.bytes().all(|b| b.is_ascii_digit()) {
            token
                .parse()
                .map(Segment::Numeric)
                .map_err(|_| VersionParseError::SegmentOverflow {
                    version: version.to_string(),
                    segment: token.to_string(),
                })
        } else {
            Ok(Segment::Alphabetic(token.to_string()))
        }
    }

    /// Whether this is a prerelease (alphabetic) token
    pub fn is_alphabetic(&self) -> bool {
        matches!(self, Segment::Alphabetic(_))
    }

    fn is_zero(&self) -> bool {
        matches!(self, Segment::Numeric(0))
    }

    /// Alphabetic tokens sort below numeric ones at the same position.
    fn compare(&self, other: &Segment) -> Ordering {
        match (self, other) {
            (Segment::Numeric(a), Segment::Numeric(b)) => a.cmp(b),
            (Segment::Alphabetic(a), Segment::Alphabetic(b)) => a.cmp(b),
            (Segment::Alphabetic(_), Segment::Numeric(_)) => Ordering::Less,
            (Segment::Numeric(_), Segment::Alphabetic(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Numeric(n) => write!(f, "{}", n),
            Segment::Alphabetic(s) => write!(f, "{}", s),
        }
    }
}

/// A parsed RubyGems version.
///
/// Versions are compared segment by segment. Missing segments count as `0`
/// and alphabetic segments mark a prerelease, which sorts before any release
/// sharing the same leading numbers:
///
/// ```
/// use gem_version::Version;
///
/// let pre: Version = "1.0.0-rc1".parse().unwrap();
/// let release: Version = "1.0".parse().unwrap();
/// assert!(pre < release);
/// ```
#[derive(Debug, Clone)]
pub struct Version {
    version: String,
    segments: Vec<Segment>,
}

impl Version {
    /// Parse a version string.
    ///
    /// Surrounding whitespace is ignored and blank input is version `0`.
    pub fn parse(raw: &str) -> Result<Self, VersionParseError> {
        let trimmed = raw.trim();
        if !VERSION_RE.is_match(trimmed) {
            log::debug!("Rejected version string {:?}", raw);
            return Err(VersionParseError::Malformed(raw.to_string()));
        }

        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let version = trimmed.replace('-', ".pre.");
        let segments = SEGMENT_RE
            .find_iter(&version)
            .map(|m| Segment::from_token(m.as_str(), raw))
            .collect::<Result<Vec<_>, _>>()?;

        log::trace!("Parsed version {:?} into {} segments", version, segments.len());

        Ok(Version { version, segments })
    }

    fn from_segments(mut segments: Vec<Segment>) -> Self {
        if segments.is_empty() {
            segments.push(Segment::Numeric(0));
        }

        let version = segments
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(".");

        Version { version, segments }
    }

    /// The display form of this version
    pub fn as_str(&self) -> &str {
        &self.version
    }

    /// All segments in parse order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segments used for comparison: trailing zeros are dropped from both the
    /// release part and the prerelease part.
    pub fn canonical_segments(&self) -> Vec<&Segment> {
        let split = self
            .segments
            .iter()
            .position(Segment::is_alphabetic)
            .unwrap_or(self.segments.len());
        let (release, prerelease) = self.segments.split_at(split);

        let mut canonical = Vec::with_capacity(self.segments.len());
        canonical.extend(trim_trailing_zeros(release));
        canonical.extend(trim_trailing_zeros(prerelease));
        canonical
    }

    /// Whether any segment is alphabetic
    pub fn is_prerelease(&self) -> bool {
        self.segments.iter().any(Segment::is_alphabetic)
    }

    /// Compare two versions
    pub fn compare(&self, other: &Version) -> Ordering {
        let lhs = self.canonical_segments();
        let rhs = other.canonical_segments();
        let zero = Segment::Numeric(0);

        for i in 0..lhs.len().max(rhs.len()) {
            let left = lhs.get(i).copied().unwrap_or(&zero);
            let right = rhs.get(i).copied().unwrap_or(&zero);

            match left.compare(right) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }

        Ordering::Equal
    }

    pub fn equal(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Equal
    }

    pub fn less_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn greater_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn less_or_equal(&self, other: &Version) -> bool {
        self.compare(other) != Ordering::Greater
    }

    pub fn greater_or_equal(&self, other: &Version) -> bool {
        self.compare(other) != Ordering::Less
    }

    /// The release for this version, e.g. `1.2.0.a` -> `1.2.0`
    pub fn release(&self) -> Version {
        let segments = self
            .segments
            .iter()
            .take_while(|s| !s.is_alphabetic())
            .cloned()
            .collect();
        Version::from_segments(segments)
    }

    /// The next version boundary used by `~>`, e.g. `5.3.1` -> `5.4`.
    ///
    /// Prerelease segments and everything after them are dropped first, then
    /// the last remaining segment (unless it is the only one) before the new
    /// last segment is incremented.
    pub fn bump(&self) -> Version {
        let mut segments = self.segments.clone();
        while segments.iter().any(Segment::is_alphabetic) {
            segments.pop();
        }
        if segments.len() > 1 {
            segments.pop();
        }
        if let Some(Segment::Numeric(last)) = segments.last_mut() {
            *last = last.saturating_add(1);
        }
        Version::from_segments(segments)
    }
}

fn trim_trailing_zeros(segments: &[Segment]) -> &[Segment] {
    let end = segments
        .iter()
        .rposition(|s| !s.is_zero())
        .map_or(0, |i| i + 1);
    &segments[..end]
}

/// Parse a version string
pub fn parse_version(raw: &str) -> Result<Version, VersionParseError> {
    Version::parse(raw)
}

impl Default for Version {
    fn default() -> Self {
        Version::from_segments(vec![Segment::Numeric(0)])
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.version)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

// Equal versions share canonical segments
impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_segments().hash(state);
    }
}
