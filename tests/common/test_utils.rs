use pickup_pricing::config::LlmConfig;
use serde_json::{Value, json};

/// LLM configuration pointing at `base_url`, typically a wiremock server.
pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
        model: "gpt-4o-mini".to_string(),
        timeout_secs: None,
        temperature: None,
    }
}

/// The e-waste pickup from the pricing playbook.
pub fn scenario_request() -> Value {
    json!({
        "category": "e-waste",
        "quantity": "large",
        "distance_km": 12,
        "urgency": "emergency",
        "floor_info": "3+",
        "city": "Pune",
        "zone": "A",
        "vehicle_size": "mini-truck"
    })
}

/// A schema-conforming estimate for [`scenario_request`]: 1.5x category
/// multiplier and a 60% emergency surcharge.
pub fn scenario_estimate() -> Value {
    json!({
        "estimated_price_min": 780.0,
        "estimated_price_max": 1040.0,
        "recommended_price": 910.0,
        "breakdown": {
            "base_fare": 80.0,
            "distance_charge": 150.0,
            "urgency_charge": 138.0,
            "vehicle_charge": 150.0,
            "floor_charge": 60.0,
            "category_charge": 115.0
        },
        "assumptions": [
            "Base fare of ₹80 for Pune zone A",
            "E-waste charged at 1.5x for hazardous handling",
            "Emergency pickup adds 60% to base and distance"
        ],
        "customer_notes": "Keep devices unplugged and batteries bagged separately.",
        "driver_notes": "Third floor walk-up; bring a trolley."
    })
}

/// OpenAI chat completion envelope wrapping `content`.
pub fn openai_completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "logprobs": null,
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 320,
            "completion_tokens": 140,
            "total_tokens": 460
        }
    })
}

/// OpenAI error envelope as returned with 4xx statuses.
pub fn openai_error_body(message: &str) -> Value {
    json!({
        "error": {
            "message": message,
            "type": "invalid_request_error",
            "param": null,
            "code": null
        }
    })
}

/// Assertion helper for the uniform failure body.
pub fn assert_estimate_failed(body: &Value, expected_details: &str) {
    assert_eq!(body["error"], "Failed to estimate price");
    let details = body["details"].as_str().unwrap_or_default();
    assert!(
        details.contains(expected_details),
        "Expected details containing '{}', got: {}",
        expected_details,
        details
    );
}
