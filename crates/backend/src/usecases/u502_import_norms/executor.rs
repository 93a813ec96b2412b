use super::error::NormsImportError;
use super::prompt::{build_messages, extract_json, ImportDocument};
use crate::domain::a001_norms_catalog::NormsStore;
use crate::shared::config::{resolve_api_key, Config};
use crate::shared::format::format_kilobytes;
use crate::shared::llm::{LlmProvider, OpenAiProvider};
use contracts::domain::a001_norms_catalog::parse_professions_json;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_import_norms::{ImportNorms, ImportNormsResponse};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Executor для UseCase импорта норм из документа
pub struct ImportExecutor {
    provider: Option<Arc<dyn LlmProvider>>,
    store: NormsStore,
    /// Одновременно выполняется не более одного импорта
    gate: Mutex<()>,
    max_document_bytes: usize,
}

impl ImportExecutor {
    pub fn new(
        provider: Option<Arc<dyn LlmProvider>>,
        store: NormsStore,
        max_document_bytes: usize,
    ) -> Self {
        Self {
            provider,
            store,
            gate: Mutex::new(()),
            max_document_bytes,
        }
    }

    pub fn max_document_bytes(&self) -> usize {
        self.max_document_bytes
    }

    /// Провайдер OpenAI из конфигурации; без API ключа импорт отключен
    pub fn from_config(config: &Config, store: NormsStore) -> Self {
        let provider = match resolve_api_key(config) {
            Some(api_key) => {
                tracing::info!(
                    "Norms import uses model {} at {}",
                    config.llm.model,
                    config.llm.api_endpoint
                );
                Some(Arc::new(OpenAiProvider::new_with_endpoint(
                    config.llm.api_endpoint.clone(),
                    api_key,
                    config.llm.model.clone(),
                    config.llm.temperature,
                    config.llm.max_tokens,
                )) as Arc<dyn LlmProvider>)
            }
            None => {
                tracing::warn!("LLM API key is not set, norms import is disabled");
                None
            }
        };

        Self::new(provider, store, config.import.max_document_bytes)
    }

    /// Извлечь нормы из документа и заменить ими список профессий периода.
    /// При любой ошибке справочник не меняется.
    pub async fn import(
        &self,
        mut document: ImportDocument,
    ) -> Result<ImportNormsResponse, NormsImportError> {
        document.period = document.period.trim().to_string();
        self.check_document(&document)?;

        let provider = self
            .provider
            .as_ref()
            .ok_or(NormsImportError::NotConfigured)?;

        let _guard = self.gate.try_lock().map_err(|_| NormsImportError::Busy)?;

        tracing::info!(
            "{}: period '{}' from '{}' ({}) via {}",
            ImportNorms::full_name(),
            document.period,
            document.file_name,
            format_kilobytes(document.bytes.len()),
            provider.provider_name()
        );

        let response = provider.chat_completion(build_messages(&document)).await?;
        tracing::debug!(
            "LLM answered: model={}, tokens={:?}, finish={:?}",
            response.model,
            response.tokens_used,
            response.finish_reason
        );

        let json = extract_json(&response.content).ok_or_else(|| {
            NormsImportError::Unparsable("no JSON array in the answer".to_string())
        })?;
        let professions = parse_professions_json(json)?;

        self.store
            .replace_period(&document.period, professions.clone());

        tracing::info!(
            "Period '{}' replaced: {} professions",
            document.period,
            professions.len()
        );

        Ok(ImportNormsResponse {
            period: document.period,
            professions,
            model: Some(response.model),
        })
    }

    fn check_document(&self, document: &ImportDocument) -> Result<(), NormsImportError> {
        if document.period.is_empty() {
            return Err(NormsImportError::BadRequest("Не указан период норм".to_string()));
        }
        if document.bytes.is_empty() {
            return Err(NormsImportError::BadRequest("Файл не выбран или пуст".to_string()));
        }
        if document.bytes.len() > self.max_document_bytes {
            return Err(NormsImportError::DocumentTooLarge {
                limit: self.max_document_bytes,
            });
        }
        if !document.is_supported() {
            return Err(NormsImportError::BadRequest(
                "Поддерживаются текстовые документы (.txt, .csv, .md) и PDF".to_string(),
            ));
        }
        Ok(())
    }
}
