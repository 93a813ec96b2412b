use super::types::{ChatAttachment, ChatMessage, ChatRole, LlmError, LlmProvider, LlmResponse};
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestMessageContentPartText,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, ChatCompletionRequestUserMessageContentPart,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// OpenAI провайдер
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiProvider {
    /// Создать с кастомным endpoint (для совместимых API)
    pub fn new_with_endpoint(
        api_endpoint: String,
        api_key: String,
        model: String,
        temperature: f64,
        max_tokens: u32,
    ) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_endpoint);
        let client = Client::with_config(config);

        Self {
            client,
            model,
            temperature: temperature as f32,
            max_tokens,
        }
    }

    /// Конвертировать наши сообщения в формат OpenAI
    fn convert_messages(
        messages: Vec<ChatMessage>,
    ) -> Result<Vec<ChatCompletionRequestMessage>, LlmError> {
        let mut openai_messages = Vec::with_capacity(messages.len());

        for msg in messages {
            let openai_msg = match msg.role {
                ChatRole::System => ChatCompletionRequestSystemMessageArgs::default()
                    .content(msg.content)
                    .build()
                    .map_err(|e| LlmError::InvalidRequest(e.to_string()))?
                    .into(),
                ChatRole::User => ChatCompletionRequestUserMessageArgs::default()
                    .content(Self::user_content(msg.content, &msg.attachments)?)
                    .build()
                    .map_err(|e| LlmError::InvalidRequest(e.to_string()))?
                    .into(),
            };
            openai_messages.push(openai_msg);
        }

        Ok(openai_messages)
    }

    /// Текст без вложений уходит строкой, с вложениями массивом частей
    fn user_content(
        text: String,
        attachments: &[ChatAttachment],
    ) -> Result<ChatCompletionRequestUserMessageContent, LlmError> {
        if attachments.is_empty() {
            return Ok(text.into());
        }

        let mut parts = vec![ChatCompletionRequestUserMessageContentPart::Text(
            ChatCompletionRequestMessageContentPartText::from(text),
        )];
        for attachment in attachments {
            parts.push(Self::file_part(attachment)?);
        }
        Ok(parts.into())
    }

    /// Часть `file` с содержимым в виде data URL.
    /// Поля FileObject закрыты, поэтому часть собирается через serde.
    fn file_part(
        attachment: &ChatAttachment,
    ) -> Result<ChatCompletionRequestUserMessageContentPart, LlmError> {
        let file_data = format!(
            "data:{};base64,{}",
            attachment.mime_type,
            STANDARD.encode(&attachment.data)
        );
        serde_json::from_value(serde_json::json!({
            "type": "file",
            "file": {
                "filename": attachment.file_name,
                "file_data": file_data,
            }
        }))
        .map_err(|e| LlmError::InvalidRequest(e.to_string()))
    }

    /// Проверяет, поддерживает ли модель расширенные параметры (temperature, max_tokens)
    ///
    /// GPT-5 и o1/o3 модели имеют ограниченный API:
    /// - Не поддерживают кастомный temperature (только дефолт 1.0)
    /// - Не поддерживают max_completion_tokens
    fn supports_advanced_params(model_id: &str) -> bool {
        let is_restricted = model_id.starts_with("gpt-5")
            || model_id.starts_with("o1-")
            || model_id.starts_with("o3-");

        !is_restricted
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<LlmResponse, LlmError> {
        let openai_messages = Self::convert_messages(messages)?;

        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder
            .model(&self.model)
            .messages(openai_messages);

        if Self::supports_advanced_params(&self.model) {
            request_builder
                .temperature(self.temperature)
                .max_completion_tokens(self.max_tokens);
        }

        let request = request_builder
            .build()
            .map_err(|e| LlmError::InvalidRequest(e.to_string()))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("401") || err_str.contains("authentication") {
                LlmError::AuthError(err_str)
            } else if err_str.contains("429") || err_str.contains("rate limit") {
                LlmError::RateLimitExceeded
            } else if err_str.contains("error sending request") || err_str.contains("timed out") {
                LlmError::NetworkError(err_str)
            } else {
                LlmError::ApiError(err_str)
            }
        })?;

        let choice = response
            .choices
            .first()
            .ok_or_else(|| LlmError::ApiError("No response from API".to_string()))?;

        let content = choice.message.content.clone().unwrap_or_default();
        let tokens_used = response.usage.as_ref().map(|u| u.total_tokens as i32);
        let finish_reason = choice.finish_reason.as_ref().map(|r| format!("{:?}", r));

        Ok(LlmResponse {
            content,
            tokens_used,
            model: response.model.clone(),
            finish_reason,
        })
    }

    fn provider_name(&self) -> &str {
        "OpenAI"
    }
}
