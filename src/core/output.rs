//! Gallery document writer.

use std::fs;
use std::path::Path;

use crate::core::models::GalleryDocument;
use crate::error::{GalleryError, Result};

/// Serializes the document as pretty-printed JSON with 2-space indentation.
pub fn to_gallery_json(document: &GalleryDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Writes the document to `output_path` in one step.
///
/// # Format
/// ```json
/// {
///   "posts": [
///     {
///       "id": "1710500000.000100",
///       ...
///     }
///   ]
/// }
/// ```
pub fn write_gallery(document: &GalleryDocument, output_path: &Path) -> Result<()> {
    let json = to_gallery_json(document)?;
    fs::write(output_path, json).map_err(|e| GalleryError::io_at(output_path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{GalleryPost, PostContent};
    use tempfile::tempdir;

    fn post(id: &str) -> GalleryPost {
        GalleryPost {
            id: id.into(),
            timestamp: "2024-03-15T10:53:20".into(),
            month: "2024-03".into(),
            creator: "Alice".into(),
            content: PostContent::default(),
        }
    }

    #[test]
    fn test_to_gallery_json_two_space_indent() {
        let doc = GalleryDocument {
            posts: vec![post("1710500000.000100")],
        };
        let json = to_gallery_json(&doc).unwrap();

        assert!(json.starts_with("{\n  \"posts\": [\n    {\n      \"id\""));
        assert!(json.contains(r#""id": "1710500000.000100""#));
        assert!(json.contains(r#""media": []"#));
    }

    #[test]
    fn test_write_gallery_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gallery_data.json");
        let doc = GalleryDocument {
            posts: vec![post("1.0"), post("2.0")],
        };

        write_gallery(&doc, &path).unwrap();

        let parsed: GalleryDocument =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_write_gallery_missing_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("gallery_data.json");
        let err = write_gallery(&GalleryDocument::new(), &path).unwrap_err();
        assert!(matches!(err, GalleryError::IoAt { .. }));
    }
}
