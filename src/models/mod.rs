pub mod clients;
pub mod freelancers;
pub mod matches;
pub mod projects;
pub mod users;

use serde::{Deserialize, Deserializer};

/// Server ids are opaque. Some responses send them as numbers, so accept both
/// and normalize to a string.
pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) if s.is_empty() => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(other) => {
            return Err(serde::de::Error::custom(format!(
                "expected id string or number, got {other}"
            )));
        }
    })
}

/// Match scores are whole percentages. A fractional score is rounded and an
/// out-of-range one clamped, so one odd record can't fail a whole list.
pub(crate) fn match_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let score = f64::deserialize(deserializer)?;
    if !score.is_finite() {
        return Err(serde::de::Error::custom("match score is not a number"));
    }
    Ok(score.round().clamp(0.0, 100.0) as u8)
}

/// Encode filter pairs the way `URLSearchParams` would, skipping unset ones.
pub(crate) fn query_pairs(pairs: &[(&'static str, Option<String>)]) -> Vec<(&'static str, String)> {
    pairs
        .iter()
        .filter_map(|(k, v)| v.clone().map(|v| (*k, v)))
        .collect()
}
