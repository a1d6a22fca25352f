//! 应用仓库分类索引
//!
//! 仓库根目录下每个应用一个子目录，内含 `metadata.json`（以及清单工具生成的 `files.json`）。
//! 这里只关心 `categories` 字段：按分类聚合应用目录名。
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ManifestError, Result};

const METADATA_FILE: &str = "metadata.json";

/// 应用 metadata.json 中用到的部分；其余字段忽略
#[derive(Debug, Clone, Deserialize)]
struct AppMetadata {
    #[serde(default)]
    categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// 首次出现时的原始分类名
    pub name: String,
    pub apps: Vec<String>,
}

/// 顶层索引结构：slug -> 分类
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryIndex {
    pub categories: BTreeMap<String, Category>,
}

impl CategoryIndex {
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn add(&mut self, category: &str, app: &str) {
        let slug = category_slug(category);
        let entry = self.categories.entry(slug).or_insert_with(|| {
            info!(category, "added category");
            Category { name: category.to_string(), apps: Vec::new() }
        });
        entry.apps.push(app.to_string());
    }
}

/// 分类名转 slug：转小写，仅替换第一个空格为 `_`
pub fn category_slug(name: &str) -> String {
    name.to_lowercase().replacen(' ', "_", 1)
}

/// 扫描仓库目录并构建分类索引
/// - 跳过以 `.` 开头的目录与非目录条目，按目录名顺序处理
/// - 单个应用的 metadata 缺失或无效时告警并跳过，不影响其他应用
pub fn build_category_index(repo_dir: &Path) -> Result<CategoryIndex> {
    let mut apps: Vec<String> = Vec::new();
    for entry in fs::read_dir(repo_dir).map_err(|e| ManifestError::read(repo_dir, e))? {
        let entry = entry.map_err(|e| ManifestError::read(repo_dir, e))?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir {
            continue;
        }
        let name = match entry.file_name().into_string() {
            Ok(n) => n,
            Err(raw) => return Err(ManifestError::NonUtf8Path { path: repo_dir.join(raw) }),
        };
        if name.starts_with('.') {
            continue;
        }
        apps.push(name);
    }
    apps.sort();

    let mut index = CategoryIndex::default();
    for app in &apps {
        info!(app = app.as_str(), "processing app");
        match load_app_metadata(&repo_dir.join(app)) {
            Ok(md) => {
                for category in &md.categories {
                    index.add(category, app);
                }
            }
            Err(err) => warn!(app = app.as_str(), error = %err, "failed to import app"),
        }
    }
    Ok(index)
}

fn load_app_metadata(app_dir: &Path) -> Result<AppMetadata> {
    let path = app_dir.join(METADATA_FILE);
    let txt = fs::read_to_string(&path).map_err(|e| ManifestError::read(&path, e))?;
    serde_json::from_str(&txt).map_err(|source| ManifestError::Metadata { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_replaces_first_space_only() {
        assert_eq!(category_slug("Games"), "games");
        assert_eq!(category_slug("Demo Apps"), "demo_apps");
        assert_eq!(category_slug("Very Useful Tools"), "very_useful tools");
    }

    #[test]
    fn add_keeps_first_seen_name() {
        let mut index = CategoryIndex::default();
        index.add("Demo Apps", "a");
        index.add("demo apps", "b");
        let cat = &index.categories["demo_apps"];
        assert_eq!(cat.name, "Demo Apps");
        assert_eq!(cat.apps, vec!["a".to_string(), "b".to_string()]);
    }
}
