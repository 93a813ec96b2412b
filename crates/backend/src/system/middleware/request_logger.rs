use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use std::time::Duration;

use crate::shared::format::format_number;

/// Голубой для 200, коричневый для остального
fn status_color(status: StatusCode) -> &'static str {
    if status == StatusCode::OK {
        "36"
    } else {
        "33"
    }
}

fn print_line(color: &str, elapsed: Duration, size: &str, status: StatusCode, method: &Method, path: &str) {
    // Время по Москве (UTC+3)
    let timestamp = Utc::now() + chrono::Duration::hours(3);
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color,
        timestamp.format("%H:%M:%S"),
        elapsed.as_millis(),
        size,
        status.as_u16(),
        method,
        path
    );
}

/// Middleware для логирования HTTP запросов: время, длительность,
/// размер ответа, статус, метод и путь
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Тело читается целиком, чтобы узнать реальный размер
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            print_line(
                status_color(parts.status),
                start.elapsed(),
                &format_number(bytes.len()),
                parts.status,
                &method,
                &path,
            );
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(_) => {
            print_line("33", start.elapsed(), "error", parts.status, &method, &path);
            Response::from_parts(parts, Body::default())
        }
    }
}
