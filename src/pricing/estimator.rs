use super::{
    estimate::PriceEstimate,
    policy,
    request::PricingRequest,
};
use crate::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Prices a job by asking the completion provider under the fixed tariff
/// and strict output schema. Holds no per-request state and is shared
/// across handlers.
pub struct PriceEstimator {
    llm_client: Arc<dyn LlmClient>,
    model: String,
    system_prompt: String,
}

impl PriceEstimator {
    pub fn new(llm_client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            llm_client,
            model: model.into(),
            system_prompt: policy::system_prompt(),
        }
    }

    pub fn build_request(&self, request: &PricingRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(self.system_prompt.clone()),
                ChatMessage::user(request.user_prompt()),
            ],
            response_format: Some(PriceEstimate::response_format()),
            max_tokens: None,
            temperature: None,
        }
    }

    pub async fn estimate(&self, request: &PricingRequest) -> Result<PriceEstimate> {
        let unrecognized = request.unrecognized_fields();
        if !unrecognized.is_empty() {
            debug!(
                "Forwarding fields outside the tariff vocabulary: {:?}",
                unrecognized
            );
        }
        debug!(
            "Pricing request: category={:?}, urgency={:?}",
            request.category(),
            request.urgency()
        );

        let completion = self
            .llm_client
            .create_chat_completion(self.build_request(request))
            .await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Completion {} used {} tokens",
                completion.id, usage.total_tokens
            );
        }

        let content = completion
            .first_content()
            .ok_or_else(|| Error::llm("Provider returned no completion content"))?;

        let estimate = PriceEstimate::decode(content)?;

        if let Some(breach) = estimate.ordering_breach() {
            warn!("Provider broke the price ordering contract: {}", breach);
        }

        Ok(estimate)
    }
}
