use crate::error::{DashError, Result};
use crate::types::config::DETECT_LABEL;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Decoded {
    pub text: String,
    /// Canonical name of the encoding that decoded cleanly.
    pub encoding: &'static str,
}

pub fn read_decoded(path: &Path, labels: &[String]) -> Result<(Decoded, Vec<u8>)> {
    let bytes = std::fs::read(path)?;
    let decoded = decode(&path.display().to_string(), &bytes, labels)?;
    Ok((decoded, bytes))
}

/// Tries each label in order and returns the first strict, error-free decode.
pub fn decode(source: &str, bytes: &[u8], labels: &[String]) -> Result<Decoded> {
    for label in labels {
        let encoding = match resolve(label, bytes) {
            Some(encoding) => encoding,
            None => return Err(DashError::UnknownEncoding(label.clone())),
        };
        let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
        if had_errors {
            debug!(source, label = label.as_str(), "decode failed, trying next encoding");
            continue;
        }
        return Ok(Decoded {
            text: text.into_owned(),
            encoding: encoding.name(),
        });
    }

    Err(DashError::EncodingExhausted {
        path: source.to_string(),
        tried: labels.join(", "),
    })
}

fn resolve(label: &str, bytes: &[u8]) -> Option<&'static Encoding> {
    if label == DETECT_LABEL {
        let mut detector = EncodingDetector::new();
        detector.feed(bytes, true);
        return Some(detector.guess(None, true));
    }
    Encoding::for_label(label.as_bytes())
}
