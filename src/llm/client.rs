use super::types::*;
use crate::{Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: Option<f32>,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let mut client = Client::with_config(openai_config).with_backoff(no_retry());

        if let Some(secs) = config.timeout_secs {
            let http_client = reqwest::Client::builder()
                .timeout(Duration::from_secs(secs))
                .build()?;
            client = client.with_http_client(http_client);
        }

        Ok(Self {
            client,
            model: config.model,
            temperature: config.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// A failed completion is reported to the caller as-is, never retried.
fn no_retry() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

/// Wire name of the finish reason, e.g. `stop` or `content_filter`.
fn finish_reason_label(reason: openai_types::FinishReason) -> Option<String> {
    serde_json::to_value(reason)
        .ok()
        .and_then(|value| value.as_str().map(str::to_string))
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Creating chat completion with {} messages",
            request.messages.len()
        );

        let mut messages = Vec::new();
        for msg in &request.messages {
            messages.push(msg.to_openai_message()?);
        }

        let model = if request.model.is_empty() {
            self.model.as_str()
        } else {
            request.model.as_str()
        };

        let mut request_builder = openai_types::CreateChatCompletionRequestArgs::default();
        request_builder.model(model).messages(messages);

        if let Some(temperature) = request.temperature.or(self.temperature) {
            request_builder.temperature(temperature);
        }

        if let Some(ref format) = request.response_format {
            request_builder.response_format(format.to_openai_response_format());
        }

        if let Some(max_tokens) = request.max_tokens {
            request_builder.max_completion_tokens(max_tokens);
        }

        let openai_request = request_builder.build()?;

        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let choices = response
            .choices
            .into_iter()
            .map(|choice| {
                let content = match (choice.message.content, choice.message.refusal) {
                    (Some(content), _) => content,
                    (None, Some(refusal)) => {
                        debug!("Provider refused the completion: {}", refusal);
                        String::new()
                    }
                    (None, None) => String::new(),
                };

                Choice {
                    index: choice.index,
                    message: ChatMessage {
                        role: choice.message.role.to_string(),
                        content,
                    },
                    finish_reason: choice.finish_reason.and_then(finish_reason_label),
                }
            })
            .collect();

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(ChatCompletionResponse {
            id: response.id,
            model: response.model,
            choices,
            usage,
        })
    }
}
