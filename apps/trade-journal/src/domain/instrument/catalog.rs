//! Built-in instrument metadata.
//!
//! Used whenever the dynamic metadata source is unavailable or does not know a
//! symbol. Pip values are per 1.0 lot in USD and approximate for pairs whose
//! quote currency is not USD.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{Instrument, InstrumentCategory};

fn forex(symbol: &str, pip_size: Decimal, pip_value: Decimal) -> Instrument {
    Instrument::new(symbol, InstrumentCategory::Forex, pip_size, pip_value)
}

fn index(symbol: &str, pip_size: Decimal) -> Instrument {
    Instrument::new(symbol, InstrumentCategory::Indices, pip_size, Decimal::ONE)
}

/// The static fallback table.
#[must_use]
pub fn fallback_instruments() -> Vec<Instrument> {
    vec![
        // Forex majors
        forex("EURUSD", dec!(0.0001), dec!(10)),
        forex("GBPUSD", dec!(0.0001), dec!(10)),
        forex("AUDUSD", dec!(0.0001), dec!(10)),
        forex("NZDUSD", dec!(0.0001), dec!(10)),
        forex("USDCAD", dec!(0.0001), dec!(7.3)),
        forex("USDCHF", dec!(0.0001), dec!(11.2)),
        // JPY crosses quote in hundredths
        forex("USDJPY", dec!(0.01), dec!(6.7)),
        forex("EURJPY", dec!(0.01), dec!(6.7)),
        forex("GBPJPY", dec!(0.01), dec!(6.7)),
        // Commodities
        Instrument::new("XAUUSD", InstrumentCategory::Commodities, dec!(0.01), dec!(1))
            .with_display_multiplier(dec!(0.1)),
        Instrument::new("XAGUSD", InstrumentCategory::Commodities, dec!(0.001), dec!(5)),
        Instrument::new("USOIL", InstrumentCategory::Commodities, dec!(0.01), dec!(10)),
        // Indices
        index("US30", Decimal::ONE),
        index("NAS100", Decimal::ONE),
        index("SPX500", dec!(0.1)),
        index("GER40", Decimal::ONE),
        index("UK100", Decimal::ONE),
        // Crypto
        Instrument::new("BTCUSD", InstrumentCategory::Crypto, Decimal::ONE, Decimal::ONE),
        Instrument::new("ETHUSD", InstrumentCategory::Crypto, dec!(0.01), dec!(0.01)),
    ]
}
