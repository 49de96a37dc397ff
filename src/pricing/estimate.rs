use crate::{Error, Result, llm::JsonSchemaFormat};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const SCHEMA_NAME: &str = "price_estimate";

/// The six charge components, in schema order.
pub const BREAKDOWN_FIELDS: [&str; 6] = [
    "base_fare",
    "distance_charge",
    "urgency_charge",
    "vehicle_charge",
    "floor_charge",
    "category_charge",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceEstimate {
    pub estimated_price_min: f64,
    pub estimated_price_max: f64,
    pub recommended_price: f64,
    pub breakdown: PriceBreakdown,
    pub assumptions: Vec<String>,
    pub customer_notes: String,
    pub driver_notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceBreakdown {
    pub base_fare: f64,
    pub distance_charge: f64,
    pub urgency_charge: f64,
    pub vehicle_charge: f64,
    pub floor_charge: f64,
    pub category_charge: f64,
}

impl PriceBreakdown {
    fn components(&self) -> [(&'static str, f64); 6] {
        [
            ("base_fare", self.base_fare),
            ("distance_charge", self.distance_charge),
            ("urgency_charge", self.urgency_charge),
            ("vehicle_charge", self.vehicle_charge),
            ("floor_charge", self.floor_charge),
            ("category_charge", self.category_charge),
        ]
    }
}

impl PriceEstimate {
    /// Strict JSON schema for the completion: every property required,
    /// no additional properties at any level.
    pub fn schema() -> Value {
        let breakdown_properties: serde_json::Map<String, Value> = BREAKDOWN_FIELDS
            .iter()
            .map(|field| (field.to_string(), json!({ "type": "number" })))
            .collect();

        json!({
            "type": "object",
            "properties": {
                "estimated_price_min": { "type": "number" },
                "estimated_price_max": { "type": "number" },
                "recommended_price": { "type": "number" },
                "breakdown": {
                    "type": "object",
                    "properties": breakdown_properties,
                    "required": BREAKDOWN_FIELDS,
                    "additionalProperties": false
                },
                "assumptions": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "customer_notes": { "type": "string" },
                "driver_notes": { "type": "string" }
            },
            "required": [
                "estimated_price_min",
                "estimated_price_max",
                "recommended_price",
                "breakdown",
                "assumptions",
                "customer_notes",
                "driver_notes"
            ],
            "additionalProperties": false
        })
    }

    pub fn response_format() -> JsonSchemaFormat {
        JsonSchemaFormat {
            name: SCHEMA_NAME.to_string(),
            description: None,
            schema: Self::schema(),
            strict: true,
        }
    }

    /// Decodes completion text and re-checks it locally. A provider that
    /// ignored the schema fails here the same way a transport error would.
    pub fn decode(content: &str) -> Result<Self> {
        let estimate: Self = serde_json::from_str(content.trim())?;
        estimate.validate()?;
        Ok(estimate)
    }

    /// Rejects non-finite amounts. Decoded text never carries one, since
    /// serde_json refuses `NaN` and out-of-range literals such as `1e400`;
    /// this guards estimates assembled or adjusted in code.
    pub fn validate(&self) -> Result<()> {
        let totals = [
            ("estimated_price_min", self.estimated_price_min),
            ("estimated_price_max", self.estimated_price_max),
            ("recommended_price", self.recommended_price),
        ];

        for (name, value) in totals.into_iter().chain(self.breakdown.components()) {
            if !value.is_finite() {
                return Err(Error::invalid_estimate(format!(
                    "{} is not a finite number",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Describes a `min <= recommended <= max` violation. The ordering is
    /// the provider's responsibility, so callers log it rather than reject.
    pub fn ordering_breach(&self) -> Option<String> {
        let (min, rec, max) = (
            self.estimated_price_min,
            self.recommended_price,
            self.estimated_price_max,
        );

        if min <= rec && rec <= max {
            None
        } else {
            Some(format!(
                "expected min <= recommended <= max, got {} / {} / {}",
                min, rec, max
            ))
        }
    }
}
