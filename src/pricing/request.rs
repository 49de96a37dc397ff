use super::policy::{FloorAccess, QuantityTier, Urgency, VehicleSize, WasteCategory};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// Rendered in place of a field the caller left out.
pub const MISSING_FIELD: &str = "not specified";

/// One collection job as posted by the dashboard.
///
/// Every field is optional and held as raw JSON: the values are advisory
/// context for the model and are forwarded into the prompt as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingRequest {
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
    #[serde(default)]
    pub location: Option<Value>,
    #[serde(default)]
    pub distance_km: Option<Value>,
    #[serde(default)]
    pub urgency: Option<Value>,
    #[serde(default)]
    pub floor_info: Option<Value>,
    #[serde(default)]
    pub city: Option<Value>,
    #[serde(default)]
    pub zone: Option<Value>,
    #[serde(default)]
    pub vehicle_size: Option<Value>,
}

fn render(value: &Option<Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(MISSING_FIELD),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

fn outside_vocabulary(value: &Option<Value>, known: impl Fn(&str) -> bool) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !known(s),
        Some(_) => true,
    }
}

fn as_label(value: &Option<Value>) -> Option<&str> {
    value.as_ref().and_then(Value::as_str)
}

impl PricingRequest {
    /// The per-call message: every field interpolated, one per line.
    pub fn user_prompt(&self) -> String {
        format!(
            "Calculate pricing for:\n\
             Category: {}\n\
             Quantity: {}\n\
             Location: {}\n\
             Distance: {} km\n\
             Urgency: {}\n\
             Floor: {}\n\
             City: {}\n\
             Zone: {}\n\
             Vehicle: {}",
            render(&self.category),
            render(&self.quantity),
            render(&self.location),
            render(&self.distance_km),
            render(&self.urgency),
            render(&self.floor_info),
            render(&self.city),
            render(&self.zone),
            render(&self.vehicle_size),
        )
    }

    /// Names of enumerated fields whose value is present but not part of
    /// the tariff vocabulary. Diagnostic only.
    pub fn unrecognized_fields(&self) -> Vec<&'static str> {
        let checks = [
            (
                "category",
                outside_vocabulary(&self.category, |s| WasteCategory::from_label(s).is_some()),
            ),
            (
                "quantity",
                outside_vocabulary(&self.quantity, |s| QuantityTier::from_label(s).is_some()),
            ),
            (
                "urgency",
                outside_vocabulary(&self.urgency, |s| Urgency::from_label(s).is_some()),
            ),
            (
                "floor_info",
                outside_vocabulary(&self.floor_info, |s| FloorAccess::from_label(s).is_some()),
            ),
            (
                "vehicle_size",
                outside_vocabulary(&self.vehicle_size, |s| VehicleSize::from_label(s).is_some()),
            ),
        ];

        let mut fields: Vec<&'static str> = checks
            .into_iter()
            .filter_map(|(name, unknown)| unknown.then_some(name))
            .collect();

        match &self.distance_km {
            None | Some(Value::Null) => {}
            Some(Value::Number(n)) if n.as_f64().is_some_and(|d| d >= 0.0) => {}
            Some(Value::String(s)) if s.trim().parse::<f64>().is_ok_and(|d| d >= 0.0) => {}
            Some(_) => fields.push("distance_km"),
        }

        fields
    }

    pub fn category(&self) -> Option<WasteCategory> {
        as_label(&self.category).and_then(WasteCategory::from_label)
    }

    pub fn urgency(&self) -> Option<Urgency> {
        as_label(&self.urgency).and_then(Urgency::from_label)
    }
}
