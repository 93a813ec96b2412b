use crate::shared::api_utils::api_url;
use contracts::usecases::common::UseCaseError;
use contracts::usecases::u502_import_norms::{ImportNormsResponse, FIELD_FILE, FIELD_PERIOD};
use wasm_bindgen::JsCast;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// API клиент для UseCase u502: отправить документ на извлечение норм
pub async fn import_norms(file: web_sys::File, period: &str) -> Result<ImportNormsResponse, String> {
    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob_and_filename(FIELD_FILE, &file, &file.name())
        .map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_str(FIELD_PERIOD, period)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let request = Request::new_with_str_and_init(&api_url("/api/norms/import"), &opts)
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    if !resp.ok() {
        // Сервер отвечает UseCaseError; показываем его сообщение, а не статус
        return Err(match serde_json::from_str::<UseCaseError>(&text) {
            Ok(err) => {
                if let Some(details) = &err.details {
                    log::warn!("Norms import rejected: {}", details);
                }
                err.message
            }
            Err(_) => format!("HTTP {}", resp.status()),
        });
    }

    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}
