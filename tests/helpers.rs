use moneyfield::locale::resolve_tag;
use moneyfield::{CurrencyCode, FieldConfig, LocaleId, MoneyField, NumeralProfile};

pub fn profile(tag: &str) -> NumeralProfile {
    resolve_tag(tag)
}

pub fn code(raw: &str) -> CurrencyCode {
    CurrencyCode::new(raw).expect("test currency code should be valid")
}

/// Field for `tag` with `currency` already selected.
pub fn field(tag: &str, config: FieldConfig, currency: &str) -> MoneyField {
    let mut field = MoneyField::new(config, LocaleId::parse(tag)).expect("field should build");
    field
        .set_currency(Some(code(currency)))
        .expect("currency should be allowed");
    field
}

/// Commit `text` and return what the field shows afterwards.
pub fn set_and_get(field: &mut MoneyField, text: &str) -> String {
    field.set_text(text).text
}
