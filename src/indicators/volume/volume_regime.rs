//! Volume regime: level against a trailing average, short-term trend,
//! price/volume divergence, spikes and a 0-100 confirmation score.

use crate::common::math;
use crate::config::Thresholds;
use crate::indicators::registry::Indicator;
use crate::models::indicators::{
    Bias, Classification, FlowTrend, IndicatorKind, IndicatorResult, IndicatorValues,
    SpikeMagnitude, VolumeAssessment, VolumeDivergence, VolumeIndicator, VolumeLevel,
};
use crate::models::series::Candle;

const VOLUME_TREND_WINDOW: usize = 5;
const SPIKE_BASELINE: usize = 2;

pub fn volume_level(ratio: f64, thresholds: &Thresholds) -> VolumeLevel {
    if ratio > thresholds.volume_extreme_ratio {
        VolumeLevel::Extreme
    } else if ratio > thresholds.volume_very_high_ratio {
        VolumeLevel::VeryHigh
    } else if ratio > thresholds.volume_high_ratio {
        VolumeLevel::High
    } else if ratio < thresholds.volume_low_ratio {
        VolumeLevel::Low
    } else {
        VolumeLevel::Normal
    }
}

pub fn classify_divergence(price: FlowTrend, volume: FlowTrend) -> VolumeDivergence {
    match (price, volume) {
        (FlowTrend::Rising, FlowTrend::Rising) => VolumeDivergence::Confirmation,
        (FlowTrend::Rising, FlowTrend::Falling) => VolumeDivergence::WeakRally,
        (FlowTrend::Falling, FlowTrend::Rising) => VolumeDivergence::SellingPressure,
        (FlowTrend::Falling, FlowTrend::Falling) => VolumeDivergence::WeakMove,
        _ => VolumeDivergence::NoDivergence,
    }
}

/// Combine level, trend and divergence into a 0-100 score.
///
/// Above-average volume and a rising volume trend add points; price and
/// volume rising together earns the largest reward, a bearish divergence
/// removes points.
pub fn confirmation_score(
    ratio: f64,
    trend: FlowTrend,
    divergence: VolumeDivergence,
    thresholds: &Thresholds,
) -> u8 {
    let mut score: i32 = 0;
    if ratio > thresholds.volume_high_ratio {
        score += 30;
    } else if ratio > 1.0 {
        score += 15;
    }
    if trend == FlowTrend::Rising {
        score += 25;
    }
    match divergence.bias() {
        Bias::Bullish => score += 45,
        Bias::Neutral => score += 20,
        Bias::Bearish => score = (score - 30).max(0),
    }
    score.clamp(0, 100) as u8
}

pub fn assess(score: u8) -> VolumeAssessment {
    match score {
        70..=u8::MAX => VolumeAssessment::StrongConfirmation,
        50..=69 => VolumeAssessment::ModerateConfirmation,
        30..=49 => VolumeAssessment::WeakConfirmation,
        _ => VolumeAssessment::NoConfirmation,
    }
}

pub fn calculate_volume_regime(
    candles: &[Candle],
    ma_period: u32,
    thresholds: &Thresholds,
) -> Option<VolumeIndicator> {
    let slope_window = thresholds.trend_window.max(2);
    let required = (ma_period as usize)
        .max(slope_window)
        .max(VOLUME_TREND_WINDOW);
    if ma_period == 0 || candles.len() < required {
        return None;
    }

    let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let volume = *volumes.last()?;
    let volume_ma = math::sma(&volumes, ma_period as usize)?;
    let ratio = if volume_ma > 0.0 { volume / volume_ma } else { 1.0 };

    let recent = &volumes[volumes.len() - VOLUME_TREND_WINDOW..];
    let trend = FlowTrend::from_slope(math::linear_slope(recent)?);
    let trend_change_pct = if recent[0] > 0.0 {
        (recent[VOLUME_TREND_WINDOW - 1] - recent[0]) / recent[0] * 100.0
    } else {
        0.0
    };

    let price_trend =
        FlowTrend::from_slope(math::linear_slope(&closes[closes.len() - slope_window..])?);
    let volume_trend =
        FlowTrend::from_slope(math::linear_slope(&volumes[volumes.len() - slope_window..])?);
    let divergence = classify_divergence(price_trend, volume_trend);

    let baseline = math::mean(&volumes[volumes.len() - 1 - SPIKE_BASELINE..volumes.len() - 1])?;
    let spike_ratio = if baseline > 0.0 { volume / baseline } else { 1.0 };
    let spike = if spike_ratio > thresholds.spike_extreme_ratio {
        SpikeMagnitude::Extreme
    } else if spike_ratio > thresholds.spike_significant_ratio {
        SpikeMagnitude::Significant
    } else {
        SpikeMagnitude::None
    };

    let score = confirmation_score(ratio, trend, divergence, thresholds);

    Some(VolumeIndicator {
        volume,
        volume_ma,
        volume_ma_period: ma_period,
        ratio,
        level: volume_level(ratio, thresholds),
        trend,
        trend_change_pct,
        divergence,
        spike,
        confirmation_score: score,
        assessment: assess(score),
    })
}

pub fn classify_volume(volume: &VolumeIndicator) -> (Classification, String) {
    let detail = match volume.divergence {
        VolumeDivergence::Confirmation => "price rising with increasing volume, healthy uptrend",
        VolumeDivergence::WeakRally => "price rising on declining volume, weak rally",
        VolumeDivergence::SellingPressure => "price falling on increasing volume, selling pressure",
        VolumeDivergence::WeakMove => "price falling on decreasing volume, selling weakening",
        VolumeDivergence::NoDivergence => "price and volume without a clear relationship",
    };
    let note = format!(
        "Volume {:.2}x average ({:?}); {}; confirmation {}",
        volume.ratio, volume.level, detail, volume.confirmation_score
    );
    let classification = match volume.divergence.bias() {
        Bias::Bullish => Classification::Bullish,
        Bias::Bearish => Classification::Bearish,
        Bias::Neutral => Classification::Neutral,
    };
    (classification, note)
}

pub struct VolumeRegime {
    ma_period: u32,
}

impl VolumeRegime {
    pub fn new(ma_period: u32) -> Self {
        Self { ma_period }
    }
}

impl Indicator for VolumeRegime {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Volume
    }

    fn required_points(&self) -> usize {
        (self.ma_period as usize).max(VOLUME_TREND_WINDOW)
    }

    fn evaluate(&self, candles: &[Candle], thresholds: &Thresholds) -> IndicatorResult {
        match calculate_volume_regime(candles, self.ma_period, thresholds) {
            Some(volume) => {
                let (classification, note) = classify_volume(&volume);
                IndicatorResult::new(
                    self.kind(),
                    IndicatorValues::Volume(volume),
                    classification,
                    note,
                )
            }
            None => IndicatorResult::insufficient(
                self.kind(),
                self.required_points().max(thresholds.trend_window.max(2)),
                candles.len(),
            ),
        }
    }
}
