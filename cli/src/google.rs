//! Google translation over the public web endpoint.

use std::time::Duration;

use bilingual_pdf::{Block, Error, LanguagePair, Result, Translator};
use indicatif::ProgressBar;

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Translates each block with one HTTP request. No retries: the first
/// failure is returned as `TranslationUnavailable`.
pub struct GoogleTranslator {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    progress: Option<ProgressBar>,
}

impl GoogleTranslator {
    /// Create a translator with its own HTTP client and runtime.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::TranslationUnavailable(format!("HTTP client: {}", e)))?;
        let runtime = tokio::runtime::Runtime::new()?;

        Ok(Self {
            client,
            runtime,
            progress: None,
        })
    }

    /// Report per-block progress on a progress bar.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    async fn translate_text(&self, text: &str, pair: &LanguagePair) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let response = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("sl", pair.source.as_str()),
                ("tl", pair.target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?;

        let body = response.text().await.map_err(unavailable)?;
        parse_response(&body)
    }
}

impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "google"
    }

    fn translate(&self, blocks: &[Block], pair: &LanguagePair) -> Result<Vec<String>> {
        if let Some(ref pb) = self.progress {
            pb.set_length(blocks.len() as u64);
            pb.set_message(format!("Translating {}", pair));
        }

        let result = self.runtime.block_on(async {
            let mut translated = Vec::with_capacity(blocks.len());
            for block in blocks {
                translated.push(self.translate_text(&block.text, pair).await?);
                if let Some(ref pb) = self.progress {
                    pb.inc(1);
                }
            }
            Ok(translated)
        });

        if let Some(ref pb) = self.progress {
            pb.finish_and_clear();
        }
        result
    }
}

fn unavailable(err: reqwest::Error) -> Error {
    Error::TranslationUnavailable(format!("Google Translate request failed: {}", err))
}

/// Extract the translated text from the endpoint's JSON reply.
///
/// The reply is a nested array whose first element lists sentence segments
/// as `[translated, original, ...]`. Only called for non-blank input, so a
/// reply without translated text is an error.
pub fn parse_response(body: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        Error::TranslationUnavailable(format!("unexpected Google Translate reply: {}", e))
    })?;

    let translated: String = match value.get(0) {
        Some(serde_json::Value::Array(segments)) => segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(|s| s.as_str()))
            .collect(),
        _ => String::new(),
    };

    if translated.trim().is_empty() {
        return Err(Error::TranslationUnavailable(
            "no translation returned by Google Translate".into(),
        ));
    }
    Ok(translated)
}
