#![allow(dead_code)]

use std::io::Cursor;
use std::time::Duration;

use image::{DynamicImage, ImageFormat, RgbImage};
use reqwest::multipart::{Form, Part};

use instamuse::config::GeminiConfig;
use instamuse::generator::Generator;
use instamuse::server::build_router;
use instamuse::web_pages::AppState;

/// Serves the real router on a loopback port and returns its base URL.
pub async fn spawn_app(generator: Generator) -> String {
    let router = build_router(AppState::new(generator), "static");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{address}")
}

pub fn gemini_generator(base_url: &str, timeout: Duration) -> Generator {
    let config = GeminiConfig::default()
        .with_api_key("test-key")
        .with_base_url(base_url)
        .with_timeout(timeout);
    Generator::new(&config).unwrap()
}

pub fn png_bytes() -> Vec<u8> {
    let mut output = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::new(4, 4))
        .write_to(&mut Cursor::new(&mut output), ImageFormat::Png)
        .unwrap();
    output
}

pub fn image_part(file_name: &str, bytes: Vec<u8>) -> Part {
    Part::bytes(bytes).file_name(file_name.to_string())
}

pub fn style_form(region: &str, num: &str) -> Form {
    Form::new()
        .text("length", "short")
        .text("tone", "cute")
        .text("region", region.to_string())
        .text("mood", "upbeat")
        .text("num", num.to_string())
}

pub async fn post_generate(base_url: &str, form: Form) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{base_url}/generate"))
        .multipart(form)
        .send()
        .await
        .unwrap()
}
