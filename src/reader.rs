use crate::error::{Result, ThumbnailError};
use crate::pattern::Pattern;
use std::fs;
use std::path::Path;

/// Pattern file formats this crate can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternFormat {
    /// Serialized [`Pattern`]: `{"stitches": [...], "threads": [...]}`.
    Json,
}

impl PatternFormat {
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(PatternFormat::Json),
            _ => None,
        }
    }

    pub fn from_content(bytes: &[u8]) -> Option<Self> {
        match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'{') => Some(PatternFormat::Json),
            _ => None,
        }
    }

    /// Extension wins; content sniffing is the fallback.
    pub fn detect(path: &Path, bytes: &[u8]) -> Option<Self> {
        Self::from_extension(path).or_else(|| Self::from_content(bytes))
    }
}

pub fn read_pattern(path: &Path) -> Result<Pattern> {
    let decode_error = |reason: String| ThumbnailError::Decode {
        path: path.to_path_buf(),
        reason,
    };

    let bytes = fs::read(path).map_err(|e| decode_error(e.to_string()))?;
    let format = PatternFormat::detect(path, &bytes)
        .ok_or_else(|| decode_error("unrecognized pattern format".to_string()))?;

    let pattern = match format {
        PatternFormat::Json => {
            serde_json::from_slice::<Pattern>(&bytes).map_err(|e| decode_error(e.to_string()))?
        }
    };

    log::debug!(
        "read {}: {} stitches, {} threads",
        path.display(),
        pattern.stitches.len(),
        pattern.threads.len()
    );
    Ok(pattern)
}

/// Parses a pattern held in memory.
pub fn parse_pattern_json(json: &str) -> Result<Pattern> {
    serde_json::from_str(json).map_err(|e| ThumbnailError::Decode {
        path: "<memory>".into(),
        reason: e.to_string(),
    })
}
