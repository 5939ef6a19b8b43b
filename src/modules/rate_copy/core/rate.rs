use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Amount fields recognized in an upstream rate payload, in precedence
/// order. Patching writes back every field that is present so derived
/// copies of the amount stay consistent.
const AMOUNT_FIELDS: [&str; 3] = ["rate", "roomRate", "totalRate"];

/// Opaque rate payload as returned by the upstream API. Only the amount is
/// interpreted; everything else travels through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateRecord(pub Value);

impl RateRecord {
    /// The single numeric amount of this rate: `rate`, else `roomRate`,
    /// else `totalRate`, else zero. Upstream serializes amounts either as
    /// numbers or as numeric strings; both are accepted.
    pub fn amount(&self) -> f64 {
        AMOUNT_FIELDS
            .iter()
            .find_map(|field| self.0.get(field).and_then(numeric))
            .unwrap_or(0.0)
    }

    /// Overwrites every amount field present in the payload.
    pub fn patch_amount(&mut self, amount: f64) {
        let Some(object) = self.0.as_object_mut() else {
            return;
        };
        for field in AMOUNT_FIELDS {
            if let Some(slot) = object.get_mut(field)
                && let Some(number) = serde_json::Number::from_f64(amount)
            {
                *slot = Value::Number(number);
            }
        }
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
