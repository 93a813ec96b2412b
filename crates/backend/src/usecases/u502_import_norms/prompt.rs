use crate::shared::llm::{ChatAttachment, ChatMessage};

const PDF_MIME: &str = "application/pdf";

const SYSTEM_PROMPT: &str = r#"Ты извлекаешь нормы выдачи средств индивидуальной защиты (СИЗ) из документов.
Ответь ТОЛЬКО JSON-массивом без пояснений, в формате:
[{"name": "<должность>", "items": [{"name": "<наименование СИЗ>", "unit": "<ед. изм.>", "quantity": <число на одного сотрудника>}]}]
Правила:
- каждая должность встречается один раз;
- quantity - неотрицательное число, дробная часть через точку;
- единицы измерения пиши так, как в документе (шт., пар, компл., мл, гр.);
- не придумывай позиции, которых нет в документе."#;

/// Документ, загруженный пользователем
#[derive(Debug, Clone)]
pub struct ImportDocument {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
    pub period: String,
}

impl ImportDocument {
    /// Содержимое текстового документа; для остальных форматов None
    fn as_text(&self) -> Option<&str> {
        let declared_text = match self.content_type.as_deref() {
            Some(ct) => ct.starts_with("text/") || ct.contains("json") || ct.contains("csv"),
            None => {
                let name = self.file_name.to_lowercase();
                name.ends_with(".txt") || name.ends_with(".csv") || name.ends_with(".md")
            }
        };
        if !declared_text {
            return None;
        }
        std::str::from_utf8(&self.bytes).ok()
    }

    fn is_pdf(&self) -> bool {
        match self.content_type.as_deref() {
            Some(PDF_MIME) => true,
            Some("application/octet-stream") | None => {
                self.file_name.to_lowercase().ends_with(".pdf")
            }
            Some(_) => false,
        }
    }

    /// Модель принимает текст в сообщении и PDF как приложенный файл
    pub fn is_supported(&self) -> bool {
        self.as_text().is_some() || self.is_pdf()
    }
}

/// Системное и пользовательское сообщения для извлечения норм периода
pub fn build_messages(document: &ImportDocument) -> Vec<ChatMessage> {
    let header = format!(
        "Период норм: {}\nФайл: {}",
        document.period, document.file_name
    );

    let user = match document.as_text() {
        Some(text) => ChatMessage::user(format!("{}\n\nТекст документа:\n{}", header, text)),
        None => ChatMessage::user(format!("{}\n\nДокумент приложен к сообщению.", header))
            .with_attachment(ChatAttachment {
                file_name: document.file_name.clone(),
                mime_type: PDF_MIME.to_string(),
                data: document.bytes.clone(),
            }),
    };

    vec![ChatMessage::system(SYSTEM_PROMPT), user]
}

/// Вырезать JSON-массив из ответа модели.
///
/// Принимает ответ в блоке ```json ... ``` или массив, окруженный текстом.
pub fn extract_json(answer: &str) -> Option<&str> {
    let trimmed = answer.trim();

    let fenced = trimmed.find("```").and_then(|start| {
        let after = &trimmed[start + 3..];
        let body_start = after.find('\n').map(|i| i + 1).unwrap_or(0);
        let body = &after[body_start..];
        body.find("```").map(|end| body[..end].trim())
    });
    let candidate = fenced.unwrap_or(trimmed);

    let start = candidate.find('[')?;
    let end = candidate.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&candidate[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::ChatRole;

    fn document(content_type: Option<&str>, bytes: &[u8]) -> ImportDocument {
        ImportDocument {
            file_name: "normy.txt".to_string(),
            content_type: content_type.map(str::to_string),
            bytes: bytes.to_vec(),
            period: "Сентябрь".to_string(),
        }
    }

    #[test]
    fn test_text_document_is_embedded_as_text() {
        let messages = build_messages(&document(Some("text/plain"), "Кочегар: мыло 1 шт.".as_bytes()));
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        assert!(messages[1].content.contains("Период норм: Сентябрь"));
        assert!(messages[1].content.contains("Кочегар: мыло 1 шт."));
    }

    #[test]
    fn test_text_document_has_no_attachment() {
        let messages = build_messages(&document(Some("text/plain"), b"norms"));
        assert!(messages[1].attachments.is_empty());
    }

    #[test]
    fn test_pdf_is_attached_as_file() {
        let mut pdf = document(Some("application/pdf"), &[0x25, 0x50, 0x44, 0x46]);
        pdf.file_name = "normy.pdf".to_string();
        let messages = build_messages(&pdf);

        assert!(!messages[1].content.contains("base64"));
        assert!(messages[1].content.contains("Период норм: Сентябрь"));
        assert_eq!(
            messages[1].attachments,
            vec![ChatAttachment {
                file_name: "normy.pdf".to_string(),
                mime_type: "application/pdf".to_string(),
                data: vec![0x25, 0x50, 0x44, 0x46],
            }]
        );
    }

    #[test]
    fn test_supported_formats() {
        assert!(document(Some("text/csv"), b"a;b").is_supported());
        assert!(document(Some("application/pdf"), b"%PDF").is_supported());

        let mut unnamed_pdf = document(None, b"%PDF");
        unnamed_pdf.file_name = "Normy.PDF".to_string();
        assert!(unnamed_pdf.is_supported());

        let docx = document(
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            b"PK",
        );
        assert!(!docx.is_supported());
        assert!(!document(Some("text/plain"), &[0xff, 0xfe, 0x00]).is_supported());
    }

    #[test]
    fn test_extract_plain_array() {
        assert_eq!(extract_json(" [{\"a\":1}] "), Some("[{\"a\":1}]"));
    }

    #[test]
    fn test_extract_fenced_array() {
        let answer = "Вот результат:\n```json\n[{\"name\": \"X\", \"items\": []}]\n```\nГотово.";
        assert_eq!(extract_json(answer), Some("[{\"name\": \"X\", \"items\": []}]"));
    }

    #[test]
    fn test_extract_without_array() {
        assert_eq!(extract_json("Не удалось прочитать документ"), None);
        assert_eq!(extract_json("] oops ["), None);
    }
}
