//! Price conversion and price-band classification
//!
//! Converts local-currency (KRW) prices to USD with an externally supplied
//! exchange rate and classifies a price into one of the fixed display bands
//! used for color-coded cards.

use rust_decimal::Decimal;
use std::fmt;

/// Exchange rate was zero or negative; dividing by it would silently
/// produce a nonsense USD price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRateError {
    pub rate: Decimal,
}

impl fmt::Display for InvalidRateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid exchange rate: {} (must be positive)", self.rate)
    }
}

impl std::error::Error for InvalidRateError {}

/// Convert a local-currency price to USD.
///
/// `rate` is local-currency-per-USD and must be positive.
pub fn convert_to_usd(price: Decimal, rate: Decimal) -> Result<Decimal, InvalidRateError> {
    if rate <= Decimal::ZERO {
        return Err(InvalidRateError { rate });
    }
    Ok(price / rate)
}

/// A discrete price range with its display label and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBand {
    pub label: &'static str,
    pub fill: &'static str,
    pub border: &'static str,
}

const BAND_UNKNOWN: PriceBand = PriceBand {
    label: "unknown",
    fill: "#eceff1",
    border: "#90a4ae",
};

/// Upper bounds (inclusive, KRW) with the band shown for prices at or
/// below them. Prices above the last bound fall into BAND_TOP.
const BANDS: [(i64, PriceBand); 4] = [
    (
        50_000,
        PriceBand {
            label: "≤50,000",
            fill: "#e8f5e9",
            border: "#4caf50",
        },
    ),
    (
        100_000,
        PriceBand {
            label: "≤100,000",
            fill: "#e3f2fd",
            border: "#2196f3",
        },
    ),
    (
        200_000,
        PriceBand {
            label: "≤200,000",
            fill: "#fff3e0",
            border: "#ff9800",
        },
    ),
    (
        500_000,
        PriceBand {
            label: "≤500,000",
            fill: "#fce4ec",
            border: "#e91e63",
        },
    ),
];

const BAND_TOP: PriceBand = PriceBand {
    label: ">500,000",
    fill: "#f3e5f5",
    border: "#9c27b0",
};

/// Classify a price into its display band.
///
/// Boundaries belong to the lower band (50,000 is still "≤50,000").
/// Missing, zero or negative prices map to the neutral unknown band.
pub fn classify_price_band(price: Option<Decimal>) -> PriceBand {
    let price = match price {
        Some(p) if p > Decimal::ZERO => p,
        _ => return BAND_UNKNOWN,
    };

    for (bound, band) in BANDS {
        if price <= Decimal::from(bound) {
            return band;
        }
    }
    BAND_TOP
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_convert_to_usd() {
        let usd = convert_to_usd(dec!(130000), dec!(1300)).unwrap();
        assert_eq!(usd, dec!(100));
    }

    #[test]
    fn test_convert_to_usd_rejects_zero_rate() {
        let err = convert_to_usd(dec!(130000), Decimal::ZERO).unwrap_err();
        assert_eq!(err.rate, Decimal::ZERO);
    }

    #[test]
    fn test_convert_to_usd_rejects_negative_rate() {
        assert!(convert_to_usd(dec!(130000), dec!(-1300)).is_err());
    }

    #[test]
    fn test_band_boundary_belongs_to_lower_band() {
        assert_eq!(classify_price_band(Some(dec!(50000))).label, "≤50,000");
        assert_eq!(classify_price_band(Some(dec!(50001))).label, "≤100,000");
        assert_eq!(classify_price_band(Some(dec!(100000))).label, "≤100,000");
        assert_eq!(classify_price_band(Some(dec!(200000))).label, "≤200,000");
        assert_eq!(classify_price_band(Some(dec!(500000))).label, "≤500,000");
        assert_eq!(classify_price_band(Some(dec!(500001))).label, ">500,000");
    }

    #[test]
    fn test_missing_zero_or_negative_price_is_unknown() {
        assert_eq!(classify_price_band(None).label, "unknown");
        assert_eq!(classify_price_band(Some(Decimal::ZERO)).label, "unknown");
        assert_eq!(classify_price_band(Some(dec!(-100))).label, "unknown");
    }
}
