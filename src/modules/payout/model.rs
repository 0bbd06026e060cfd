use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::num::IntErrorKind;

pub const DEFAULT_CURRENCY: &str = "usd";
pub const DEFAULT_LIST_LIMIT: u8 = 10;
pub const MAX_LIST_LIMIT: u8 = 100;

/// A payout as returned by the provider. Only the fields this service logs
/// are typed; the rest are carried through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub failure_code: Option<String>,
    #[serde(default)]
    pub failure_message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PayoutList {
    pub data: Vec<Payout>,
    pub has_more: bool,
}

/// Every payout this service creates is instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayoutMethod {
    Instant,
}

impl PayoutMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instant => "instant",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatePayoutParams {
    pub amount: i64,
    pub currency: String,
    pub method: PayoutMethod,
    pub destination: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreatedFilter {
    Exact(i64),
    Range { gte: i64, lte: i64 },
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidCreatedFilter;

impl CreatedFilter {
    /// Accepts either a unix timestamp or `start..end`, split on the first
    /// `..` into inclusive bounds.
    pub fn parse(raw: &str) -> Result<Self, InvalidCreatedFilter> {
        let parse_bound = |value: &str| {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| InvalidCreatedFilter)
        };

        match raw.split_once("..") {
            Some((gte, lte)) => Ok(Self::Range {
                gte: parse_bound(gte)?,
                lte: parse_bound(lte)?,
            }),
            None => parse_bound(raw).map(Self::Exact),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListPayoutsParams {
    pub created: Option<CreatedFilter>,
    pub limit: u8,
    pub starting_after: Option<String>,
    pub ending_before: Option<String>,
}

pub fn clamp_limit(limit: Option<i64>) -> u8 {
    match limit {
        Some(limit) => limit.clamp(1, MAX_LIST_LIMIT as i64) as u8,
        None => DEFAULT_LIST_LIMIT,
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidLimit;

/// Reads the raw `limit` query value. A blank value counts as unset and
/// integers beyond `i64` saturate before clamping.
pub fn parse_limit(raw: Option<&str>) -> Result<u8, InvalidLimit> {
    let limit = match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => Some(match value.parse::<i64>() {
            Ok(limit) => limit,
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(InvalidLimit),
            },
        }),
        None => None,
    };

    Ok(clamp_limit(limit))
}
