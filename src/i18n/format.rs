//! Locale-aware currency and date formatting.
//!
//! Output follows the CLDR conventions browsers use for
//! `Intl.NumberFormat(locale, { style: "currency", minimumFractionDigits: 0,
//! maximumFractionDigits: 2 })`, restricted to the locales in the registry.

use crate::i18n::Language;
use chrono::NaiveDate;
use std::borrow::Cow;

/// Non-breaking space, used by CLDR between amounts and alphabetic symbols.
const NBSP: char = '\u{a0}';

/// Maximum number of fractional digits shown for prices.
const MAX_FRACTION_DIGITS: u32 = 2;

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$200`, or `PLN 200` for alphabetic symbols
    Before,
    /// `200 zł`
    After,
}

/// Number formatting conventions for one locale.
#[derive(Debug, Clone)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub group_separator: char,
    /// Integer digits required beyond the first group before grouping kicks in.
    /// Polish writes `1000` but `10 000`, so it uses 2.
    pub min_grouping_digits: usize,
    pub symbol_placement: SymbolPlacement,
    /// Localized currency symbols; currencies not listed render as their ISO code.
    pub symbols: &'static [(&'static str, &'static str)],
}

impl NumberFormat {
    pub const POLISH: NumberFormat = NumberFormat {
        decimal_separator: ',',
        group_separator: NBSP,
        min_grouping_digits: 2,
        symbol_placement: SymbolPlacement::After,
        symbols: &[("PLN", "zł"), ("EUR", "€")],
    };

    pub const US_ENGLISH: NumberFormat = NumberFormat {
        decimal_separator: '.',
        group_separator: ',',
        min_grouping_digits: 1,
        symbol_placement: SymbolPlacement::Before,
        symbols: &[("USD", "$"), ("EUR", "€"), ("GBP", "£")],
    };

    /// Symbol for an ISO 4217 code in this locale, or the upper-cased code.
    pub fn symbol_for(&self, currency: &str) -> Cow<'static, str> {
        self.symbols
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(currency))
            .map(|(_, symbol)| Cow::Borrowed(*symbol))
            .unwrap_or_else(|| Cow::Owned(currency.to_ascii_uppercase()))
    }

    /// Format a non-negative amount with 0 to 2 fractional digits.
    ///
    /// Rounds half away from zero and drops trailing fractional zeros.
    pub fn format_amount(&self, amount: f64) -> String {
        let scale = 10u64.pow(MAX_FRACTION_DIGITS);
        let scaled = (amount.abs() * scale as f64).round();

        // Beyond u64 every f64 is a whole number, so its digits print exactly.
        let (integer, fraction) = if scaled < u64::MAX as f64 {
            let scaled = scaled as u64;
            ((scaled / scale).to_string(), scaled % scale)
        } else {
            (format!("{:.0}", amount.abs()), 0)
        };

        let mut out = self.group_digits(&integer);

        if fraction != 0 {
            let digits = format!("{:0width$}", fraction, width = MAX_FRACTION_DIGITS as usize);
            out.push(self.decimal_separator);
            out.push_str(digits.trim_end_matches('0'));
        }

        out
    }

    fn group_digits(&self, digits: &str) -> String {
        if digits.len() < 3 + self.min_grouping_digits {
            return digits.to_string();
        }

        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(self.group_separator);
            }
            out.push(ch);
        }
        out
    }
}

/// Format a price in the given currency for the given language.
///
/// Non-finite amounts are rendered as zero.
pub fn format_currency(amount: f64, currency: &str, language: Language) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let format = &language.config().number_format;
    let number = format.format_amount(amount);
    let symbol = format.symbol_for(currency);

    let is_zero = number.chars().all(|c| c == '0');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    match format.symbol_placement {
        SymbolPlacement::Before if symbol.chars().all(|c| c.is_ascii_alphabetic()) => {
            format!("{sign}{symbol}{NBSP}{number}")
        }
        SymbolPlacement::Before => format!("{sign}{symbol}{number}"),
        SymbolPlacement::After => format!("{sign}{number}{NBSP}{symbol}"),
    }
}

/// Format a calendar date with the language's date pattern.
pub fn format_date(date: NaiveDate, language: Language) -> String {
    date.format(language.config().date_pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Polish ====================

    #[test]
    fn test_polish_whole_amount() {
        assert_eq!(format_currency(200.0, "PLN", Language::POLISH), "200\u{a0}zł");
        assert_eq!(format_currency(100.0, "PLN", Language::POLISH), "100\u{a0}zł");
    }

    #[test]
    fn test_polish_fraction_uses_comma() {
        assert_eq!(format_currency(99.5, "PLN", Language::POLISH), "99,5\u{a0}zł");
        assert_eq!(format_currency(12.25, "PLN", Language::POLISH), "12,25\u{a0}zł");
    }

    #[test]
    fn test_polish_four_digits_not_grouped() {
        assert_eq!(format_currency(1234.5, "PLN", Language::POLISH), "1234,5\u{a0}zł");
    }

    #[test]
    fn test_polish_five_digits_grouped() {
        assert_eq!(
            format_currency(12345.0, "PLN", Language::POLISH),
            "12\u{a0}345\u{a0}zł"
        );
        assert_eq!(
            format_currency(1234567.0, "PLN", Language::POLISH),
            "1\u{a0}234\u{a0}567\u{a0}zł"
        );
    }

    #[test]
    fn test_polish_foreign_currency() {
        assert_eq!(format_currency(200.0, "USD", Language::POLISH), "200\u{a0}USD");
        assert_eq!(format_currency(200.0, "EUR", Language::POLISH), "200\u{a0}€");
    }

    // ==================== English ====================

    #[test]
    fn test_english_dollars() {
        assert_eq!(format_currency(200.0, "USD", Language::ENGLISH), "$200");
        assert_eq!(format_currency(1234.5, "USD", Language::ENGLISH), "$1,234.5");
        assert_eq!(format_currency(0.0, "USD", Language::ENGLISH), "$0");
    }

    #[test]
    fn test_english_alphabetic_symbol_gets_space() {
        assert_eq!(format_currency(200.0, "PLN", Language::ENGLISH), "PLN\u{a0}200");
    }

    #[test]
    fn test_english_grouping() {
        assert_eq!(format_currency(1000.0, "GBP", Language::ENGLISH), "£1,000");
        assert_eq!(format_currency(1000000.0, "EUR", Language::ENGLISH), "€1,000,000");
    }

    // ==================== Rounding and edge cases ====================

    #[test]
    fn test_rounds_to_two_fraction_digits() {
        assert_eq!(format_currency(99.999, "USD", Language::ENGLISH), "$100");
        assert_eq!(format_currency(10.05, "USD", Language::ENGLISH), "$10.05");
        assert_eq!(format_currency(0.125, "USD", Language::ENGLISH), "$0.13");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(-50.0, "USD", Language::ENGLISH), "-$50");
        assert_eq!(format_currency(-50.0, "PLN", Language::POLISH), "-50\u{a0}zł");
    }

    #[test]
    fn test_negative_rounding_to_zero_has_no_sign() {
        assert_eq!(format_currency(-0.001, "USD", Language::ENGLISH), "$0");
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(format_currency(f64::NAN, "USD", Language::ENGLISH), "$0");
        assert_eq!(format_currency(f64::INFINITY, "PLN", Language::POLISH), "0\u{a0}zł");
    }

    #[test]
    fn test_symbol_lookup_is_case_insensitive() {
        assert_eq!(NumberFormat::POLISH.symbol_for("pln"), "zł");
        assert_eq!(NumberFormat::POLISH.symbol_for("CHF"), "CHF");
    }

    #[test]
    fn test_unknown_currency_code_is_upper_cased() {
        assert_eq!(NumberFormat::US_ENGLISH.symbol_for("chf"), "CHF");
        assert_eq!(format_currency(200.0, "pln", Language::ENGLISH), "PLN\u{a0}200");
        assert_eq!(format_currency(200.0, "usd", Language::POLISH), "200\u{a0}USD");
    }

    #[test]
    fn test_amounts_beyond_u64_keep_their_digits() {
        assert_eq!(
            format_currency(1e20, "USD", Language::ENGLISH),
            "$100,000,000,000,000,000,000"
        );
        assert_eq!(
            format_currency(-2e19, "PLN", Language::POLISH),
            "-20\u{a0}000\u{a0}000\u{a0}000\u{a0}000\u{a0}000\u{a0}000\u{a0}zł"
        );
        assert!(format_currency(f64::MAX, "USD", Language::ENGLISH).starts_with("$179,769,313"));
    }

    // ==================== Dates ====================

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_date(date, Language::POLISH), "31.12.2025");
        assert_eq!(format_date(date, Language::ENGLISH), "12/31/2025");
    }
}
