//! Current price quote for a listed instrument.

/// A price snapshot as returned by a quote provider.
///
/// `price` is `None` when the provider has no usable price for the
/// symbol. The remaining fields are informational only and never enter
/// valuation arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub symbol: String,
    pub price: Option<f64>,
    pub day_change_percent: Option<f64>,
    pub market_cap: Option<f64>,
}

impl PriceQuote {
    pub fn available(symbol: &str, price: f64) -> Self {
        PriceQuote {
            symbol: symbol.to_string(),
            price: Some(price),
            day_change_percent: None,
            market_cap: None,
        }
    }

    pub fn unavailable(symbol: &str) -> Self {
        PriceQuote {
            symbol: symbol.to_string(),
            price: None,
            day_change_percent: None,
            market_cap: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.price.is_some()
    }
}
