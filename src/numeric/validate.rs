//! Lexical check of amount text before evaluation.
//!
//! The patterns are deliberately loose about grouping: they accept any mix of
//! separator characters between digit runs and leave magnitude and separator
//! placement to `numeric::parse` / `numeric::eval`. Text that passes here can
//! still be rejected there.

use std::sync::LazyLock;

use regex::Regex;

use crate::locale::profile::NumeralProfile;
use crate::normalize::trim::is_blank;

/// Operator and parenthesis characters of the calculable grammar.
pub const OPERATOR_CHARS: &str = "+-*/^()";

const BLANK: &str = r"[\t\p{Zs}]";
const SEP: &str = r"[.,'\x{2019}\t\p{Zs}]";

static PLAIN: LazyLock<Regex> = LazyLock::new(|| {
    let numeral = format!(r"[0-9]+(?:{SEP}+[0-9]+)*");
    Regex::new(&format!(r"^{BLANK}*[-+]?{numeral}{BLANK}*$")).expect("plain amount pattern")
});

static CALCULABLE: LazyLock<Regex> = LazyLock::new(|| {
    let numeral = format!(r"[0-9]+(?:{SEP}+[0-9]+)*");
    let operand = format!(r"(?:[-+(]|{BLANK})*{numeral}(?:\)|{BLANK})*");
    Regex::new(&format!(r"^{BLANK}*{operand}(?:[-+*/^]{operand})*$"))
        .expect("calculable amount pattern")
});

/// Whether `text` is lexically an amount (or, when `calculable`, an
/// arithmetic expression over amounts) under `profile`.
///
/// Blank text is never well-formed here; whether it means "no value" is the
/// field's decision.
pub fn is_well_formed(text: &str, profile: &NumeralProfile, calculable: bool) -> bool {
    let pattern = if calculable { &*CALCULABLE } else { &*PLAIN };
    if !pattern.is_match(text) {
        return false;
    }
    text.chars().all(|c| {
        c.is_ascii_digit() || is_blank(c) || profile.is_separator(c) || OPERATOR_CHARS.contains(c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::table::resolve_tag;

    #[test]
    fn plain_amounts() {
        let de = resolve_tag("de-DE");
        assert!(is_well_formed("123456,789", &de, false));
        assert!(is_well_formed("-123,456", &de, false));
        assert!(is_well_formed(" 123.456,79", &de, false));
        assert!(is_well_formed("+5 ", &de, false));
        assert!(is_well_formed("71000000000000,01", &de, false));
    }

    #[test]
    fn plain_rejects_expressions_and_noise() {
        let de = resolve_tag("de-DE");
        assert!(!is_well_formed("", &de, false));
        assert!(!is_well_formed("   ", &de, false));
        assert!(!is_well_formed("1+2", &de, false));
        assert!(!is_well_formed("12a", &de, false));
        assert!(!is_well_formed("€ 12", &de, false));
        assert!(!is_well_formed(",5", &de, false));
        assert!(!is_well_formed("--5", &de, false));
    }

    #[test]
    fn separator_runs_pass_lexically() {
        let de = resolve_tag("de-DE");
        assert!(is_well_formed("5..214,1234", &de, false));
        assert!(is_well_formed("5..214,12", &de, true));
    }

    #[test]
    fn separators_must_belong_to_the_profile() {
        let de = resolve_tag("de-DE");
        let ch = resolve_tag("de-CH");
        assert!(!is_well_formed("1'234.50", &de, false));
        assert!(is_well_formed("1'234.50", &ch, false));
        assert!(is_well_formed("1\u{2019}234.50", &ch, false));
    }

    #[test]
    fn whitespace_grouping_passes_lexically() {
        let pl = resolve_tag("pl-PL");
        assert!(is_well_formed("123 456,789", &pl, false));
        assert!(is_well_formed("123\u{a0}456,789", &pl, false));
    }

    #[test]
    fn calculable_expressions() {
        let de = resolve_tag("de-DE");
        assert!(is_well_formed("1+2+3", &de, true));
        assert!(is_well_formed("1/0", &de, true));
        assert!(is_well_formed("(((1+2) * 3) / (4-1))^2,5", &de, true));
        assert!(is_well_formed("-1,1 + 2,2 + -3,3", &de, true));
        assert!(is_well_formed("1.000,12 * 2.000,34", &de, true));
        assert!(is_well_formed("-(2+3)", &de, true));
        assert!(is_well_formed("42", &de, true));
    }

    #[test]
    fn calculable_is_permissive_about_balance() {
        let de = resolve_tag("de-DE");
        assert!(is_well_formed("(1+2 ^ 2", &de, true));
        assert!(is_well_formed("1+2)", &de, true));
    }

    #[test]
    fn calculable_rejects_stray_characters() {
        let de = resolve_tag("de-DE");
        assert!(!is_well_formed("1 + 2x", &de, true));
        assert!(!is_well_formed("1 +", &de, true));
        assert!(!is_well_formed("* 2", &de, true));
        assert!(!is_well_formed("1 % 2", &de, true));
        assert!(!is_well_formed("()", &de, true));
    }
}
