//! Input document collection
//!
//! Reads the top level of the export directory and returns every `.html`
//! report verbatim. Documents are never parsed.

use crate::error::{HeapsightError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name suffix of memory-analyzer exports
pub const HTML_SUFFIX: &str = ".html";

/// Separator placed between documents in the corpus
pub const CORPUS_SEPARATOR: &str = "\n";

/// A collected export, immutable once read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    pub path: PathBuf,
    pub content: String,
}

/// Collect every `.html` regular file directly inside `dir`
///
/// An unset or missing directory yields an empty list. Order follows the
/// directory listing returned by the OS.
pub fn collect_documents(dir: Option<&Path>) -> Result<Vec<InputDocument>> {
    let Some(dir) = dir else {
        tracing::debug!("No input directory configured");
        return Ok(Vec::new());
    };

    if !dir.exists() {
        tracing::info!("Input directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }

    if !dir.is_dir() {
        return Err(HeapsightError::Config(format!(
            "input path is not a directory: {}",
            dir.display()
        )));
    }

    let mut documents = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_dangling_link(&err) => {
                tracing::debug!("Skipping dangling link: {}", err);
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(HTML_SUFFIX) {
            continue;
        }

        documents.push(read_document(entry.path())?);
    }

    tracing::info!(
        "Collected {} document(s) from {}",
        documents.len(),
        dir.display()
    );

    Ok(documents)
}

/// Join document contents into the corpus sent to the backend
pub fn join_corpus(documents: &[InputDocument]) -> String {
    documents
        .iter()
        .map(|d| d.content.as_str())
        .collect::<Vec<_>>()
        .join(CORPUS_SEPARATOR)
}

fn read_document(path: &Path) -> Result<InputDocument> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|source| HeapsightError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Read {} ({} bytes)", path.display(), content.len());

    Ok(InputDocument {
        path: path.to_path_buf(),
        content,
    })
}

fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.io_error()
        .map(|e| e.kind() == ErrorKind::NotFound)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_unset_directory() {
        assert!(collect_documents(None).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("not-there");
        assert!(collect_documents(Some(&missing)).unwrap().is_empty());
    }

    #[test]
    fn test_only_non_html_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("heap.hprof"), "binary-ish").unwrap();
        fs::write(temp.path().join("notes.txt"), "notes").unwrap();
        fs::write(temp.path().join("report.HTML"), "upper").unwrap();

        assert!(collect_documents(Some(temp.path())).unwrap().is_empty());
    }

    #[test]
    fn test_collects_html_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.html"), "AAA").unwrap();
        fs::write(temp.path().join("b.html"), "BBB").unwrap();
        fs::write(temp.path().join("c.txt"), "CCC").unwrap();

        let docs = collect_documents(Some(temp.path())).unwrap();
        assert_eq!(docs.len(), 2);

        let mut contents: Vec<_> = docs.iter().map(|d| d.content.as_str()).collect();
        contents.sort();
        assert_eq!(contents, vec!["AAA", "BBB"]);
        assert!(docs.iter().all(|d| d.path.starts_with(temp.path())));
    }

    #[test]
    fn test_does_not_recurse() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.html"), "DEEP").unwrap();
        fs::create_dir(temp.path().join("dir.html")).unwrap();
        fs::write(temp.path().join("top.html"), "TOP").unwrap();

        let docs = collect_documents(Some(temp.path())).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].content, "TOP");
    }

    #[test]
    fn test_invalid_utf8_fails() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ok.html"), "fine").unwrap();
        fs::write(temp.path().join("bad.html"), [0x3c, 0xff, 0xfe, 0x3e]).unwrap();

        let err = collect_documents(Some(temp.path())).unwrap_err();
        match err {
            HeapsightError::Decode { path, .. } => {
                assert_eq!(path.file_name().unwrap(), "bad.html")
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_file_instead_of_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("single.html");
        fs::write(&file, "x").unwrap();

        assert!(matches!(
            collect_documents(Some(&file)),
            Err(HeapsightError::Config(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_report_is_collected() {
        let temp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let target = outside.path().join("target.html");
        fs::write(&target, "LINKED").unwrap();
        std::os::unix::fs::symlink(&target, temp.path().join("link.html")).unwrap();
        std::os::unix::fs::symlink(
            outside.path().join("gone.html"),
            temp.path().join("dangling.html"),
        )
        .unwrap();

        let docs = collect_documents(Some(temp.path())).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].content, "LINKED");
    }

    #[test]
    fn test_join_corpus() {
        let docs = vec![
            InputDocument {
                path: PathBuf::from("a.html"),
                content: "AAA".to_string(),
            },
            InputDocument {
                path: PathBuf::from("b.html"),
                content: "BBB".to_string(),
            },
        ];
        assert_eq!(join_corpus(&docs), "AAA\nBBB");
        assert_eq!(join_corpus(&[]), "");
    }
}
