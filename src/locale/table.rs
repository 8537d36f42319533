//! CLDR-derived numeral data for the supported locales.

use tracing::trace;

use super::profile::CurrencyPlacement::{self, Prefix, PrefixSpaced, SuffixSpaced};
use super::profile::{NBSP, NumeralProfile};
use super::tags::LocaleId;
use crate::currency::codes::CurrencyCode;

const NNBSP: char = '\u{202f}';
const RIGHT_QUOTE: char = '\u{2019}';

const WESTERN: &[u8] = &[3];
const INDIAN: &[u8] = &[3, 2];

const COMMA: &[char] = &[','];
const DOT: &[char] = &['.'];
const SPACES: &[char] = &[NBSP, ' ', NNBSP];
const THIN_SPACES: &[char] = &[NNBSP, NBSP, ' '];
const SWISS: &[char] = &[RIGHT_QUOTE, '\''];

/// One row of the locale table.
#[derive(Debug, Clone, Copy)]
pub struct LocaleData {
    pub language: &'static str,
    pub region: &'static str,
    pub decimal: char,
    pub groups: &'static [char],
    pub lengths: &'static [u8],
    pub min_grouping: u8,
    pub placement: CurrencyPlacement,
    pub currency: &'static str,
}

const fn row(
    language: &'static str,
    region: &'static str,
    decimal: char,
    groups: &'static [char],
    lengths: &'static [u8],
    min_grouping: u8,
    placement: CurrencyPlacement,
    currency: &'static str,
) -> LocaleData {
    LocaleData {
        language,
        region,
        decimal,
        groups,
        lengths,
        min_grouping,
        placement,
        currency,
    }
}

/// The first row of each language is that language's fallback.
pub static LOCALES: &[LocaleData] = &[
    row("en", "US", '.', COMMA, WESTERN, 1, Prefix, "USD"),
    row("en", "GB", '.', COMMA, WESTERN, 1, Prefix, "GBP"),
    row("en", "CA", '.', COMMA, WESTERN, 1, Prefix, "CAD"),
    row("en", "AU", '.', COMMA, WESTERN, 1, Prefix, "AUD"),
    row("en", "IN", '.', COMMA, INDIAN, 1, Prefix, "INR"),
    row("hi", "IN", '.', COMMA, INDIAN, 1, Prefix, "INR"),
    row("de", "DE", ',', DOT, WESTERN, 1, SuffixSpaced, "EUR"),
    row("de", "AT", ',', DOT, WESTERN, 1, PrefixSpaced, "EUR"),
    row("de", "CH", '.', SWISS, WESTERN, 1, PrefixSpaced, "CHF"),
    row("fr", "FR", ',', THIN_SPACES, WESTERN, 1, SuffixSpaced, "EUR"),
    row("fr", "CA", ',', SPACES, WESTERN, 1, SuffixSpaced, "CAD"),
    row("fr", "CH", ',', THIN_SPACES, WESTERN, 1, SuffixSpaced, "CHF"),
    row("it", "IT", ',', DOT, WESTERN, 1, SuffixSpaced, "EUR"),
    row("es", "ES", ',', DOT, WESTERN, 2, SuffixSpaced, "EUR"),
    row("es", "MX", '.', COMMA, WESTERN, 1, Prefix, "MXN"),
    row("nl", "NL", ',', DOT, WESTERN, 1, PrefixSpaced, "EUR"),
    row("pt", "BR", ',', DOT, WESTERN, 1, PrefixSpaced, "BRL"),
    row("pt", "PT", ',', SPACES, WESTERN, 2, SuffixSpaced, "EUR"),
    row("pl", "PL", ',', SPACES, WESTERN, 2, SuffixSpaced, "PLN"),
    row("cs", "CZ", ',', SPACES, WESTERN, 1, SuffixSpaced, "CZK"),
    row("sv", "SE", ',', SPACES, WESTERN, 1, SuffixSpaced, "SEK"),
    row("nb", "NO", ',', SPACES, WESTERN, 1, SuffixSpaced, "NOK"),
    row("da", "DK", ',', DOT, WESTERN, 1, SuffixSpaced, "DKK"),
    row("ru", "RU", ',', SPACES, WESTERN, 1, SuffixSpaced, "RUB"),
    row("uk", "UA", ',', SPACES, WESTERN, 1, SuffixSpaced, "UAH"),
    row("ja", "JP", '.', COMMA, WESTERN, 1, Prefix, "JPY"),
    row("zh", "CN", '.', COMMA, WESTERN, 1, Prefix, "CNY"),
    row("ko", "KR", '.', COMMA, WESTERN, 1, Prefix, "KRW"),
];

impl LocaleData {
    pub fn profile(&self) -> NumeralProfile {
        let base = match NumeralProfile::new(self.decimal, self.groups.to_vec(), self.lengths.to_vec()) {
            Ok(profile) => profile,
            Err(_) => return NumeralProfile::default(),
        };
        let profile = base
            .with_min_grouping_digits(self.min_grouping)
            .with_currency_placement(self.placement);
        match CurrencyCode::new(self.currency) {
            Ok(code) => profile.with_default_currency(code),
            Err(_) => profile,
        }
    }
}

/// Table row for `locale`: exact language+region match, else the language's
/// first row.
pub fn lookup(locale: &LocaleId) -> Option<&'static LocaleData> {
    let language = locale.language();
    if let Some(region) = locale.region()
        && let Some(data) = LOCALES
            .iter()
            .find(|d| d.language == language && d.region == region)
    {
        return Some(data);
    }
    LOCALES.iter().find(|d| d.language == language)
}

/// Numeral profile for `locale`. Unknown locales get [`NumeralProfile::default`].
pub fn resolve_profile(locale: &LocaleId) -> NumeralProfile {
    match lookup(locale) {
        Some(data) => {
            trace!(%locale, language = data.language, region = data.region, "resolved profile");
            data.profile()
        }
        None => {
            trace!(%locale, "no locale data, using default profile");
            NumeralProfile::default()
        }
    }
}

/// [`resolve_profile`] for a raw tag such as `de_DE.UTF-8`.
pub fn resolve_tag(tag: &str) -> NumeralProfile {
    resolve_profile(&LocaleId::parse(tag))
}
