use serde::{Deserialize, Serialize};

/// Purchasable plan from the plan catalog.
///
/// Prices are in cents; a `None` price means the plan cannot be bought for that period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub transfer_enable: i64,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub month_price: Option<i64>,
    #[serde(default)]
    pub quarter_price: Option<i64>,
    #[serde(default)]
    pub half_year_price: Option<i64>,
    #[serde(default)]
    pub year_price: Option<i64>,
    #[serde(default)]
    pub two_year_price: Option<i64>,
    #[serde(default)]
    pub three_year_price: Option<i64>,
    #[serde(default)]
    pub onetime_price: Option<i64>,
    #[serde(default)]
    pub reset_price: Option<i64>,
    #[serde(default)]
    pub original_price: Option<i64>,
    #[serde(default)]
    pub original_month_price: Option<i64>,
    #[serde(default, deserialize_with = "crate::util::lenient::flexible_bool")]
    pub show: bool,
    #[serde(default, deserialize_with = "crate::util::lenient::flexible_bool")]
    pub renew: bool,
}

impl Plan {
    /// Price of the plan for the given billing period, if offered.
    pub fn price_for(&self, period: &Period) -> Option<i64> {
        match period {
            Period::Month => self.month_price,
            Period::Quarter => self.quarter_price,
            Period::HalfYear => self.half_year_price,
            Period::Year => self.year_price,
            Period::TwoYear => self.two_year_price,
            Period::ThreeYear => self.three_year_price,
            Period::Onetime => self.onetime_price,
            Period::Reset => self.reset_price,
            Period::Price => self.price,
            Period::Other(_) => None,
        }
    }
}

/// Billing period, identified on the wire by the plan's price field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Period {
    Month,
    Quarter,
    HalfYear,
    Year,
    TwoYear,
    ThreeYear,
    Onetime,
    Reset,
    /// Legacy single-price plans
    Price,
    /// Key not known to this client, kept verbatim
    Other(String),
}

impl Period {
    pub fn from_key(key: &str) -> Self {
        match key {
            "month_price" => Self::Month,
            "quarter_price" => Self::Quarter,
            "half_year_price" => Self::HalfYear,
            "year_price" => Self::Year,
            "two_year_price" => Self::TwoYear,
            "three_year_price" => Self::ThreeYear,
            "onetime_price" => Self::Onetime,
            "reset_price" => Self::Reset,
            "price" => Self::Price,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Month => "month_price",
            Self::Quarter => "quarter_price",
            Self::HalfYear => "half_year_price",
            Self::Year => "year_price",
            Self::TwoYear => "two_year_price",
            Self::ThreeYear => "three_year_price",
            Self::Onetime => "onetime_price",
            Self::Reset => "reset_price",
            Self::Price => "price",
            Self::Other(key) => key,
        }
    }

    /// Human readable period name; unknown keys are shown as-is.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Month => "Monthly",
            Self::Quarter => "Quarterly",
            Self::HalfYear => "Semi-annually",
            Self::Year => "Annually",
            Self::TwoYear => "Every two years",
            Self::ThreeYear => "Every three years",
            Self::Onetime | Self::Price => "One-time",
            Self::Reset => "Traffic reset",
            Self::Other(key) => key,
        }
    }
}
