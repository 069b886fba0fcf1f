use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// One recorded game.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Kifu {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sig: Option<String>,
    #[serde(default)]
    pub moves: Vec<String>,
}

impl Kifu {
    /// Display title: name, then id, then `#<position in folder>`.
    pub fn title(&self, index: usize) -> String {
        self.name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.id.as_deref().filter(|s| !s.is_empty()))
            .map_or_else(|| format!("#{}", index + 1), str::to_string)
    }

    fn matches(&self, needle: &str) -> bool {
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(needle))
        };
        contains(&self.name) || contains(&self.comment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigFolder {
    pub name: String,
    #[serde(
        rename = "defaultColor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_color: Option<String>,
}

/// List entry for one kifu in a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KifuSummary {
    /// Position in the unfiltered folder list.
    pub index: usize,
    pub title: String,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Store {
    #[serde(rename = "bigFolders", default)]
    pub big_folders: Vec<BigFolder>,
    #[serde(rename = "smallByBig", default)]
    pub small_by_big: HashMap<String, Vec<String>>,
    #[serde(rename = "kifuByPath", default)]
    pub kifu_by_path: HashMap<String, Vec<Kifu>>,
}

impl Store {
    pub fn from_json(text: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn small_folders(&self, big: &str) -> &[String] {
        self.small_by_big
            .get(big)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn kifus(&self, big: &str, small: &str) -> &[Kifu] {
        self.kifu_by_path
            .get(&folder_path(big, small))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Case-insensitive substring filter over name and comment.
    /// Matches keep their index in the unfiltered list.
    pub fn search<'a>(
        &'a self,
        big: &str,
        small: &str,
        query: &str,
    ) -> impl Iterator<Item = (usize, &'a Kifu)> + 'a {
        let needle = query.trim().to_lowercase();
        self.kifus(big, small)
            .iter()
            .enumerate()
            .filter(move |(_, kifu)| needle.is_empty() || kifu.matches(&needle))
    }

    pub fn summaries(
        &self,
        big: &str,
        small: &str,
        query: &str,
        preview_chars: usize,
    ) -> Vec<KifuSummary> {
        self.search(big, small, query)
            .map(|(index, kifu)| KifuSummary {
                index,
                title: kifu.title(index),
                preview: kifu
                    .comment
                    .as_deref()
                    .unwrap_or_default()
                    .chars()
                    .take(preview_chars)
                    .collect(),
            })
            .collect()
    }

    pub fn kifu(&self, big: &str, small: &str, index: usize) -> Result<&Kifu, StoreError> {
        let path = folder_path(big, small);
        let list = self
            .kifu_by_path
            .get(&path)
            .ok_or_else(|| StoreError::UnknownFolder { path: path.clone() })?;
        list.get(index)
            .ok_or(StoreError::KifuNotFound { path, index })
    }
}

fn folder_path(big: &str, small: &str) -> String {
    format!("{big}/{small}")
}
