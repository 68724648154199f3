use serde::{Deserialize, Serialize};

/// Directional verdict of a single reading or of a whole report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bias {
    Bullish,
    Bearish,
    Neutral,
}

/// Classification attached to an indicator result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    StrongBullish,
    Bullish,
    Neutral,
    Bearish,
    StrongBearish,
    Overbought,
    Oversold,
    /// Undirected: a tradeable trend is present.
    Trending,
    /// Undirected: the market is ranging.
    Ranging,
    /// Not enough history for this indicator.
    Insufficient,
}

/// Every indicator the library computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Rsi,
    Macd,
    Stochastic,
    MovingAverages,
    Adx,
    Bollinger,
    Atr,
    Obv,
    Volume,
    SupportResistance,
}

impl IndicatorKind {
    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::Macd => "MACD",
            IndicatorKind::Stochastic => "Stochastic",
            IndicatorKind::MovingAverages => "Moving Averages",
            IndicatorKind::Adx => "ADX",
            IndicatorKind::Bollinger => "Bollinger Bands",
            IndicatorKind::Atr => "ATR",
            IndicatorKind::Obv => "OBV",
            IndicatorKind::Volume => "Volume",
            IndicatorKind::SupportResistance => "Support/Resistance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossoverType {
    Bullish,
    Bearish,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub period: (u32, u32, u32),
    /// Crossover of the MACD line through the signal line on the latest bar.
    pub crossover: CrossoverType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StochasticIndicator {
    pub k: f64,
    pub d: f64,
    pub k_period: u32,
    pub d_period: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmaIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmaIndicator {
    pub value: f64,
    pub period: u32,
}

/// Medium/long simple average cross.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageCross {
    /// `Bullish` is a golden cross, `Bearish` a death cross.
    pub crossover: CrossoverType,
    /// Series index of the first bar on the new side of the long average.
    pub index: usize,
    pub medium_period: u32,
    pub long_period: u32,
}

impl AverageCross {
    pub fn is_golden(&self) -> bool {
        self.crossover == CrossoverType::Bullish
    }

    pub fn is_death(&self) -> bool {
        self.crossover == CrossoverType::Bearish
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAveragesIndicator {
    pub price: f64,
    pub smas: Vec<SmaIndicator>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub emas: Vec<EmaIndicator>,
    /// Most recent medium/long cross within the recency window.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cross: Option<AverageCross>,
    /// Medium average relative to the long average.
    pub ordering: Bias,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendStrength {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdxIndicator {
    pub value: f64,
    pub plus_di: f64,
    pub minus_di: f64,
    pub period: u32,
    pub strength: TrendStrength,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub period: u32,
    pub std_dev: f64,
    /// Position of the close within the bands, 0 at the lower band and 100 at the upper.
    pub position_pct: f64,
    /// Band width as a percentage of the middle band.
    pub width_pct: f64,
    pub high_volatility: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityLevel {
    VeryHigh,
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtrIndicator {
    pub value: f64,
    pub period: u32,
    pub atr_pct: f64,
    pub volatility: VolatilityLevel,
    pub suggested_stop_distance: f64,
    pub suggested_stop_pct: f64,
}

/// Direction of a fitted slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowTrend {
    Rising,
    Falling,
    Flat,
}

impl FlowTrend {
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            FlowTrend::Rising
        } else if slope < 0.0 {
            FlowTrend::Falling
        } else {
            FlowTrend::Flat
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObvIndicator {
    pub value: f64,
    pub sma: f64,
    pub trend: FlowTrend,
    /// Bias of a price/OBV divergence, if one is present.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub divergence: Option<Bias>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeLevel {
    Extreme,
    VeryHigh,
    High,
    Normal,
    Low,
}

/// Relationship between the recent price slope and the recent volume slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeDivergence {
    /// Price up, volume up.
    Confirmation,
    /// Price up, volume down.
    WeakRally,
    /// Price down, volume up.
    SellingPressure,
    /// Price down, volume down.
    WeakMove,
    NoDivergence,
}

impl VolumeDivergence {
    pub fn bias(&self) -> Bias {
        match self {
            VolumeDivergence::Confirmation => Bias::Bullish,
            VolumeDivergence::WeakRally | VolumeDivergence::SellingPressure => Bias::Bearish,
            VolumeDivergence::WeakMove | VolumeDivergence::NoDivergence => Bias::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpikeMagnitude {
    Extreme,
    Significant,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeAssessment {
    StrongConfirmation,
    ModerateConfirmation,
    WeakConfirmation,
    NoConfirmation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeIndicator {
    pub volume: f64,
    pub volume_ma: f64,
    pub volume_ma_period: u32,
    pub ratio: f64,
    pub level: VolumeLevel,
    pub trend: FlowTrend,
    pub trend_change_pct: f64,
    pub divergence: VolumeDivergence,
    pub spike: SpikeMagnitude,
    /// 0-100 score combining level, trend and divergence.
    pub confirmation_score: u8,
    pub assessment: VolumeAssessment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Proximity {
    NearSupport,
    NearResistance,
    CloserToSupport,
    CloserToResistance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportResistanceIndicator {
    pub current_price: f64,
    pub nearest_support: f64,
    pub nearest_resistance: f64,
    pub support_distance_pct: f64,
    pub resistance_distance_pct: f64,
    /// Up to five support levels below price, nearest first.
    pub support_levels: Vec<f64>,
    /// Up to five resistance levels above price, nearest first.
    pub resistance_levels: Vec<f64>,
    pub proximity: Proximity,
}

/// Values carried by an [`IndicatorResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorValues {
    Rsi(RsiIndicator),
    Macd(MacdIndicator),
    Stochastic(StochasticIndicator),
    MovingAverages(MovingAveragesIndicator),
    Adx(AdxIndicator),
    Bollinger(BollingerBandsIndicator),
    Atr(AtrIndicator),
    Obv(ObvIndicator),
    Volume(VolumeIndicator),
    SupportResistance(SupportResistanceIndicator),
    Insufficient { required: usize, available: usize },
}

/// One indicator reading produced by a single analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    pub kind: IndicatorKind,
    pub values: IndicatorValues,
    pub classification: Classification,
    pub note: String,
}

impl IndicatorResult {
    pub fn new(
        kind: IndicatorKind,
        values: IndicatorValues,
        classification: Classification,
        note: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            values,
            classification,
            note: note.into(),
        }
    }

    pub fn insufficient(kind: IndicatorKind, required: usize, available: usize) -> Self {
        Self {
            kind,
            values: IndicatorValues::Insufficient {
                required,
                available,
            },
            classification: Classification::Insufficient,
            note: format!(
                "Insufficient data for {}: need {} points, have {}",
                kind.name(),
                required,
                available
            ),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_insufficient(&self) -> bool {
        self.classification == Classification::Insufficient
    }
}
