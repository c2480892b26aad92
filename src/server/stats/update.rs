//! Partial stat updates parsed from a client supplied JSON object.
//!
//! Only recognised stat keys are read. Every recognised key is validated before anything is
//! written, so a payload with one bad field changes nothing.

use std::{collections::BTreeMap, str::FromStr};

use rust_decimal::Decimal;
use sea_orm::ActiveValue;
use serde_json::{Map, Value};

use crate::server::stats::field::{CountingStat, RateStat};

/// Rates are stored as `decimal(5,3)`.
const RATE_LIMIT: Decimal = Decimal::ONE_HUNDRED;

/// Validated set of stat fields to overwrite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsUpdate {
    /// Counting stats to set, `None` only for an unknown caught stealing count
    pub counts: Vec<(CountingStat, Option<i32>)>,
    /// Rates to set, normalised to three decimal places
    pub rates: Vec<(RateStat, Decimal)>,
}

impl StatsUpdate {
    /// Parse and validate an update payload.
    ///
    /// # Returns
    /// - `Ok(StatsUpdate)` - Every recognised field is valid, unknown keys are ignored
    /// - `Err(BTreeMap)` - Reason each invalid field was rejected, keyed by field name
    pub fn from_json(body: &Map<String, Value>) -> Result<Self, BTreeMap<String, String>> {
        let mut update = StatsUpdate::default();
        let mut errors = BTreeMap::new();

        for (key, value) in body {
            if let Some(stat) = CountingStat::parse(key) {
                match parse_count(stat, value) {
                    Ok(count) => update.counts.push((stat, count)),
                    Err(reason) => {
                        errors.insert(key.clone(), reason);
                    }
                }
            } else if let Some(rate) = RateStat::parse(key) {
                match parse_rate(rate, value) {
                    Ok(value) => update.rates.push((rate, value)),
                    Err(reason) => {
                        errors.insert(key.clone(), reason);
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(update)
        } else {
            Err(errors)
        }
    }

    /// Whether the update carries no fields.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty() && self.rates.is_empty()
    }

    /// Mark every field of the update as set on the active model.
    ///
    /// Fields not present in the update are left untouched.
    pub fn apply(&self, stats: &mut entity::career_stats::ActiveModel) {
        for (stat, value) in &self.counts {
            let value = *value;
            match stat {
                CountingStat::Games => stats.games = set_count(value),
                CountingStat::AtBats => stats.at_bats = set_count(value),
                CountingStat::Runs => stats.runs = set_count(value),
                CountingStat::Hits => stats.hits = set_count(value),
                CountingStat::Doubles => stats.doubles = set_count(value),
                CountingStat::Triples => stats.triples = set_count(value),
                CountingStat::HomeRuns => stats.home_runs = set_count(value),
                CountingStat::Rbis => stats.rbis = set_count(value),
                CountingStat::Walks => stats.walks = set_count(value),
                CountingStat::Strikeouts => stats.strikeouts = set_count(value),
                CountingStat::StolenBases => stats.stolen_bases = set_count(value),
                CountingStat::CaughtStealing => stats.caught_stealing = ActiveValue::Set(value),
            }
        }

        for (rate, value) in &self.rates {
            let value = ActiveValue::Set(*value);
            match rate {
                RateStat::BattingAvg => stats.batting_avg = value,
                RateStat::OnBasePct => stats.on_base_pct = value,
                RateStat::SluggingPct => stats.slugging_pct = value,
                RateStat::Ops => stats.ops = value,
            }
        }
    }
}

// Only caught stealing parses to `None`
fn set_count(value: Option<i32>) -> ActiveValue<i32> {
    ActiveValue::Set(value.unwrap_or_default())
}

fn parse_count(stat: CountingStat, value: &Value) -> Result<Option<i32>, String> {
    let number = match value {
        Value::Null if stat == CountingStat::CaughtStealing => return Ok(None),
        Value::Null => return Err("This field may not be null.".to_string()),
        Value::Number(number) => match number.as_i64() {
            Some(number) => number,
            None => match number.as_f64() {
                Some(float) if float.fract() == 0.0 && float.abs() < i64::MAX as f64 => {
                    float as i64
                }
                _ => return Err("A valid integer is required.".to_string()),
            },
        },
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| "A valid integer is required.".to_string())?,
        _ => return Err("A valid integer is required.".to_string()),
    };

    if number < 0 {
        return Err("Ensure this value is greater than or equal to 0.".to_string());
    }

    let number = i32::try_from(number)
        .map_err(|_| format!("Ensure this value is less than or equal to {}.", i32::MAX))?;

    Ok(Some(number))
}

fn parse_rate(rate: RateStat, value: &Value) -> Result<Decimal, String> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_string(),
        Value::Null => return Err("This field may not be null.".to_string()),
        _ => return Err("A valid number is required.".to_string()),
    };

    let number = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| "A valid number is required.".to_string())?
        .round_dp(3);

    if number.is_sign_negative() && !number.is_zero() {
        return Err("Ensure this value is greater than or equal to 0.".to_string());
    }
    if rate.is_proportion() && number > Decimal::ONE {
        return Err("Ensure this value is less than or equal to 1.".to_string());
    }
    if number >= RATE_LIMIT {
        return Err(
            "Ensure that there are no more than 2 digits before the decimal point.".to_string(),
        );
    }

    Ok(number)
}
