//! Bollinger Bands indicator

use crate::common::math;
use crate::config::Thresholds;
use crate::indicators::registry::Indicator;
use crate::models::indicators::{
    BollingerBandsIndicator, Classification, IndicatorKind, IndicatorResult, IndicatorValues,
};
use crate::models::series::Candle;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * sample standard deviation)
/// Lower Band = Middle - (std_dev * sample standard deviation)
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    period: u32,
    std_dev: f64,
    thresholds: &Thresholds,
) -> Option<BollingerBandsIndicator> {
    if period < 2 || candles.len() < period as usize {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let middle = math::sma(&closes, period as usize)?;
    let std = math::standard_deviation(&closes, period as usize)?;

    let upper = middle + (std_dev * std);
    let lower = middle - (std_dev * std);
    let price = *closes.last()?;

    let position_pct = if upper > lower {
        (price - lower) / (upper - lower) * 100.0
    } else {
        50.0
    };
    let width_pct = if middle > 0.0 {
        (upper - lower) / middle * 100.0
    } else {
        0.0
    };

    Some(BollingerBandsIndicator {
        upper,
        middle,
        lower,
        period,
        std_dev,
        position_pct,
        width_pct,
        high_volatility: width_pct > thresholds.bollinger_high_volatility_width,
    })
}

pub fn classify_bollinger(bands: &BollingerBandsIndicator, price: f64) -> (Classification, String) {
    if price > bands.upper {
        (
            Classification::Overbought,
            "Price above upper band, potential reversal down".to_string(),
        )
    } else if price < bands.lower {
        (
            Classification::Oversold,
            "Price below lower band, potential reversal up".to_string(),
        )
    } else if price > bands.middle {
        (
            Classification::Bullish,
            format!("Price above middle band at {:.1}% of band", bands.position_pct),
        )
    } else if price < bands.middle {
        (
            Classification::Bearish,
            format!("Price below middle band at {:.1}% of band", bands.position_pct),
        )
    } else {
        (Classification::Neutral, "Price at middle band".to_string())
    }
}

pub struct Bollinger {
    period: u32,
    std_dev: f64,
}

impl Bollinger {
    pub fn new(period: u32, std_dev: f64) -> Self {
        Self { period, std_dev }
    }
}

impl Indicator for Bollinger {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Bollinger
    }

    fn required_points(&self) -> usize {
        self.period as usize
    }

    fn evaluate(&self, candles: &[Candle], thresholds: &Thresholds) -> IndicatorResult {
        let bands = calculate_bollinger_bands(candles, self.period, self.std_dev, thresholds);
        match (bands, candles.last()) {
            (Some(bands), Some(last)) => {
                let (classification, note) = classify_bollinger(&bands, last.close);
                IndicatorResult::new(
                    self.kind(),
                    IndicatorValues::Bollinger(bands),
                    classification,
                    note,
                )
            }
            _ => self.insufficient(candles.len()),
        }
    }
}
