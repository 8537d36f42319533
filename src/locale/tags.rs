//! Locale identifiers as supplied by the embedding field.

use std::fmt;
use std::str::FromStr;

/// A language plus optional region, e.g. `de-DE` or `hi`.
///
/// Parsing is lenient: `de_DE`, `de-Latn-DE`, `de_DE.UTF-8@euro` and `DE-de`
/// all resolve to `de-DE`. Unparseable input yields [`LocaleId::root`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleId {
    language: String,
    region: Option<String>,
}

impl LocaleId {
    pub fn new(language: &str, region: Option<&str>) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            region: region.map(|r| r.to_ascii_uppercase()),
        }
    }

    /// The undetermined locale (`und`), which resolves to the default profile.
    pub fn root() -> Self {
        Self::new("und", None)
    }

    pub fn parse(tag: &str) -> Self {
        // POSIX suffixes: encoding after '.', modifier after '@'.
        let tag = tag.split(['.', '@']).next().unwrap_or("");
        let mut subtags = tag.split(['-', '_']).filter(|s| !s.is_empty());

        let language = match subtags.next() {
            Some(lang) if is_language(lang) => lang,
            _ => return Self::root(),
        };

        // Skip a script subtag (4 letters), take the first region-shaped subtag.
        let region = subtags.find(|s| is_region(s));
        Self::new(language, region)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl Default for LocaleId {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for LocaleId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

fn is_language(s: &str) -> bool {
    (2..=3).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_region(s: &str) -> bool {
    (s.len() == 2 && s.bytes().all(|b| b.is_ascii_alphabetic()))
        || (s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit()))
}
