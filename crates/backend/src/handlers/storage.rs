use axum::extract::Multipart;
use axum::Json;
use once_cell::sync::OnceCell;
use serde_json::json;
use std::path::PathBuf;

use crate::shared::error::AppError;

static UPLOADS_DIR: OnceCell<PathBuf> = OnceCell::new();

/// Remember the uploads directory resolved from config. Called once at startup.
pub fn init_uploads_dir(dir: PathBuf) -> anyhow::Result<()> {
    std::fs::create_dir_all(&dir)?;
    UPLOADS_DIR
        .set(dir)
        .map_err(|_| anyhow::anyhow!("uploads directory already initialized"))?;
    Ok(())
}

fn uploads_dir() -> Result<&'static PathBuf, AppError> {
    UPLOADS_DIR
        .get()
        .ok_or_else(|| AppError::Config("uploads directory not configured".into()))
}

/// POST /api/admin/storage/upload
///
/// Accepts a single multipart file field, stores it under the uploads
/// directory with a generated name, and returns the public URL the file
/// is served from.
pub async fn upload(mut multipart: Multipart) -> Result<Json<serde_json::Value>, AppError> {
    let dir = uploads_dir()?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("multipart invalide: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let extension = std::path::Path::new(&original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(sanitize_extension)
            .filter(|e| !e.is_empty());

        let stored_name = match extension {
            Some(ext) => format!("{}.{}", uuid::Uuid::new_v4(), ext),
            None => uuid::Uuid::new_v4().to_string(),
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("lecture du fichier impossible: {}", e)))?;

        let dest = dir.join(&stored_name);
        std::fs::write(&dest, &bytes).map_err(|e| AppError::Internal(e.into()))?;

        tracing::info!(
            "stored upload {} ({} bytes) as {}",
            original_name,
            bytes.len(),
            stored_name
        );

        return Ok(Json(json!({ "url": format!("/uploads/{}", stored_name) })));
    }

    Err(AppError::Validation("champ 'file' manquant".into()))
}

fn sanitize_extension(ext: &str) -> String {
    ext.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(10)
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_extension() {
        assert_eq!(sanitize_extension("png"), "png");
        assert_eq!(sanitize_extension("JPG"), "jpg");
        assert_eq!(sanitize_extension("p/n..g"), "png");
    }
}
