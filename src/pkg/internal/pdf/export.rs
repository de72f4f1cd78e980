use std::io::Write;

use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use standard_error::{Interpolate, StandardError};

use crate::prelude::Result;

/// A4 paper, half-inch margins, background graphics on.
fn print_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        print_background: Some(true),
        paper_width: Some(8.27),
        paper_height: Some(11.69),
        margin_top: Some(0.5),
        margin_bottom: Some(0.5),
        margin_left: Some(0.5),
        margin_right: Some(0.5),
        ..Default::default()
    }
}

/// Converts the rendered markup to PDF bytes in a headless browser. The
/// CDP client is synchronous, so the whole pipeline runs on the blocking
/// pool. No instance pooling: every export launches and tears down its
/// own browser.
pub async fn print_pdf(html: String) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || print_blocking(&html))
        .await
        .map_err(|e| StandardError::new("ERR-PDF-002").interpolate_err(e.to_string()))?
}

fn print_blocking(html: &str) -> Result<Vec<u8>> {
    let mut page = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".html")
        .tempfile()?;
    page.write_all(html.as_bytes())?;
    page.flush()?;
    let url = format!("file://{}", page.path().display());

    let options = LaunchOptions::default_builder()
        .sandbox(false)
        .build()
        .map_err(|e| StandardError::new("ERR-PDF-001").interpolate_err(e.to_string()))?;
    // The browser process is reaped when `browser` leaves this scope,
    // on the error paths included.
    let browser = Browser::new(options)
        .map_err(|e| StandardError::new("ERR-PDF-001").interpolate_err(e.to_string()))?;
    let tab = browser
        .new_tab()
        .map_err(|e| StandardError::new("ERR-PDF-001").interpolate_err(e.to_string()))?;
    tab.navigate_to(&url)
        .map_err(|e| StandardError::new("ERR-PDF-001").interpolate_err(e.to_string()))?;
    tab.wait_until_navigated()
        .map_err(|e| StandardError::new("ERR-PDF-001").interpolate_err(e.to_string()))?;
    let bytes = tab
        .print_to_pdf(Some(print_options()))
        .map_err(|e| StandardError::new("ERR-PDF-001").interpolate_err(e.to_string()))?;
    tracing::debug!("printed pdf, {} bytes", bytes.len());
    Ok(bytes)
}
