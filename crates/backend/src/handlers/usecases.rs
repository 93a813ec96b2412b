use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
    Json,
};
use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::domain::a001_norms_catalog::NORMS_STORE;
use crate::shared::config::Config;
use crate::usecases::u502_import_norms::{ImportDocument, ImportExecutor, NormsImportError};
use contracts::usecases::common::UseCaseError;
use contracts::usecases::u502_import_norms::{ImportNormsResponse, FIELD_FILE, FIELD_PERIOD};

static IMPORT_EXECUTOR: OnceCell<Arc<ImportExecutor>> = OnceCell::new();

/// Создать executors из конфигурации при старте сервера
pub fn init_executors(config: &Config) {
    if IMPORT_EXECUTOR
        .set(Arc::new(ImportExecutor::from_config(config, NORMS_STORE.clone())))
        .is_err()
    {
        tracing::warn!("Import executor is already initialized");
    }
}

fn import_executor() -> &'static Arc<ImportExecutor> {
    IMPORT_EXECUTOR.get_or_init(|| {
        Arc::new(ImportExecutor::from_config(&Config::default(), NORMS_STORE.clone()))
    })
}

/// POST /api/norms/import
pub async fn u502_import(
    multipart: Multipart,
) -> Result<Json<ImportNormsResponse>, (StatusCode, Json<UseCaseError>)> {
    let result = match read_document(multipart).await {
        Ok(document) => import_executor().import(document).await,
        Err(e) => Err(e),
    };

    result.map(Json).map_err(|e| {
        tracing::error!("Norms import failed: {}", e);
        (e.status_code(), Json(e.to_usecase_error()))
    })
}

async fn read_document(mut multipart: Multipart) -> Result<ImportDocument, NormsImportError> {
    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;
    let mut period = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        match field.name() {
            Some(FIELD_FILE) => {
                let file_name = field.file_name().unwrap_or("document").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(multipart_error)?;
                file = Some((file_name, content_type, bytes.to_vec()));
            }
            Some(FIELD_PERIOD) => {
                period = field
                    .text()
                    .await
                    .map_err(multipart_error)?;
            }
            _ => {}
        }
    }

    let (file_name, content_type, bytes) = file.ok_or_else(|| {
        NormsImportError::BadRequest("Файл не выбран или пуст".to_string())
    })?;

    Ok(ImportDocument {
        file_name,
        content_type,
        bytes,
        period,
    })
}

/// Превышение лимита тела запроса отдается как 413, прочие ошибки разбора как 400
fn multipart_error(e: MultipartError) -> NormsImportError {
    tracing::warn!("Multipart read failed: {}", e.body_text());
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        NormsImportError::DocumentTooLarge {
            limit: import_executor().max_document_bytes(),
        }
    } else {
        NormsImportError::BadRequest("Не удалось прочитать загруженный файл".to_string())
    }
}
