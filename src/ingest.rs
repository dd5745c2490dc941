use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::{message::DEFAULT_IDENTIFIER, RawEmail};

const UNNAMED_FILE: &str = "sem_nome";

/// Builds the batch from uploaded files plus an optional inline text.
pub async fn load_inputs(files: &[PathBuf], text: Option<&str>) -> Result<Vec<RawEmail>> {
    let mut items = Vec::with_capacity(files.len() + 1);

    for path in files {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        items.push(RawEmail::new(Some(file_label(path)), extract_text(path, &bytes)));
    }

    if let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) {
        items.push(RawEmail::new(Some(DEFAULT_IDENTIFIER.to_string()), text));
    }

    Ok(items)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| UNNAMED_FILE.to_string())
}

fn extract_text(path: &Path, bytes: &[u8]) -> String {
    let is_txt = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));

    if is_txt {
        // Invalid byte sequences are dropped rather than replaced.
        bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
    } else {
        tracing::warn!(target: "ingest", path = %path.display(), "unsupported file type; treating as empty text");
        String::new()
    }
}
