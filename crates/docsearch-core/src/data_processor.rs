use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::Document;

type Tagger = Box<dyn Fn(&str) -> Vec<String>>;

#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub extensions: Vec<String>,
    pub max_suggested_tags: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { extensions: vec!["txt".to_string(), "md".to_string()], max_suggested_tags: 3 }
    }
}

/// Turns a directory of text files into [`Document`]s.
///
/// Ids are paths relative to the root, titles are file stems, and tags come
/// from the directory components. Files at the root have no directory tags;
/// those fall back to the tagger, if one is set.
#[derive(Default)]
pub struct DocumentLoader {
    config: LoaderConfig,
    tagger: Option<Tagger>,
}

impl DocumentLoader {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: LoaderConfig) -> Self { Self { config, tagger: None } }

    pub fn with_tagger(mut self, tagger: impl Fn(&str) -> Vec<String> + 'static) -> Self {
        self.tagger = Some(Box::new(tagger));
        self
    }

    pub fn load_directory(&self, data_dir: &Path) -> Result<Vec<Document>> {
        self.load_directory_limited(data_dir, usize::MAX)
    }

    pub fn load_directory_limited(&self, data_dir: &Path, limit: usize) -> Result<Vec<Document>> {
        let mut files = self.list_files(data_dir);
        if files.is_empty() {
            tracing::warn!(dir = %data_dir.display(), "no matching files found");
            return Ok(vec![]);
        }
        if files.len() > limit {
            files.truncate(limit);
            tracing::info!(limit, "limited to first files");
        }
        let mut documents = Vec::with_capacity(files.len());
        for (file_index, file_path) in files.iter().enumerate() {
            tracing::debug!(file = %file_path.display(), "loading file {}/{}", file_index + 1, files.len());
            documents.push(self.load_file(file_path, data_dir)?);
        }
        tracing::info!(files = files.len(), "loaded documents");
        Ok(documents)
    }

    fn load_file(&self, file_path: &Path, data_dir: &Path) -> Result<Document> {
        let content = self.read_file_content(file_path)?;
        let relative_path = file_path.strip_prefix(data_dir).unwrap_or(file_path);
        let mut tags = self.tags_from_path(relative_path);
        if tags.is_empty() {
            if let Some(tagger) = &self.tagger {
                tags = tagger(&content).into_iter().take(self.config.max_suggested_tags).collect();
            }
        }
        Ok(Document {
            id: relative_path.to_string_lossy().replace('\\', "/"),
            title: self.extract_title(file_path),
            content,
            tags,
            created_at: self.created_at(file_path),
        })
    }

    fn read_file_content(&self, file_path: &Path) -> Result<String> {
        match fs::read_to_string(file_path) {
            Ok(content) => Ok(content),
            Err(_) => Ok(String::from_utf8_lossy(&fs::read(file_path)?).to_string()),
        }
    }

    fn extract_title(&self, file_path: &Path) -> String {
        file_path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default()
    }

    fn created_at(&self, file_path: &Path) -> DateTime<Utc> {
        fs::metadata(file_path).and_then(|m| m.modified()).map(DateTime::<Utc>::from).unwrap_or_else(|_| Utc::now())
    }

    fn tags_from_path(&self, relative_path: &Path) -> Vec<String> {
        relative_path
            .parent()
            .map(|parent| parent.components().map(|c| c.as_os_str().to_string_lossy().to_string()).collect())
            .unwrap_or_default()
    }

    fn list_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(root).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
            let path = entry.path();
            let matches = path
                .extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| self.config.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)));
            if matches { files.push(path.to_path_buf()); }
        }
        files.sort(); files
    }
}
