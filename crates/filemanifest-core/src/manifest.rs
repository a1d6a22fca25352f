//! 目录遍历与清单构建
use std::fs;
use std::path::{Component, Path};

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{ManifestError, Result};
use crate::extract::extract_metadata;
use crate::options::{ManifestOptions, ManifestStats};
use crate::record::FileRecord;

/// 递归遍历 `root`，为每个文件生成一条记录
/// 稳定性保证：
/// - 深度优先，同一目录内按文件名排序，未改动的目录树多次运行输出完全一致
/// - 任一文件读取失败即中止，不返回部分结果
/// - 根目录以下不可读的子目录跳过并告警（与系统默认遍历行为一致）
pub fn build_manifest(
    root: &Path,
    opts: &ManifestOptions,
) -> Result<(Vec<FileRecord>, ManifestStats)> {
    check_root(root)?;
    info!(root = %root.display(), "building manifest");

    let mut stats = ManifestStats::default();
    let mut records: Vec<FileRecord> = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(opts.follow_links)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                // 根目录本身读不了是致命错误；更深层的目录只跳过
                if err.depth() == 0 {
                    return Err(ManifestError::Walk { path: root.to_path_buf(), source: err });
                }
                warn!(error = %err, "skipping unreadable entry");
                stats.entries_skipped += 1;
                continue;
            }
        };

        if !is_recordable(&entry) {
            if !entry.file_type().is_dir() {
                debug!(path = %entry.path().display(), "skipping non-regular entry");
                stats.entries_skipped += 1;
            }
            continue;
        }

        let base_name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| ManifestError::NonUtf8Path { path: entry.path().to_path_buf() })?;
        let rel_path = relative_path(root, entry.path())?;
        let record = extract_metadata(entry.path(), &rel_path, base_name)?;

        stats.record(record.size);
        records.push(record);
    }

    info!(
        files_recorded = stats.files_recorded,
        bytes_total = stats.bytes_total,
        entries_skipped = stats.entries_skipped,
        "manifest built"
    );
    Ok((records, stats))
}

fn check_root(root: &Path) -> Result<()> {
    let md = fs::metadata(root).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ManifestError::RootNotFound { path: root.to_path_buf() },
        _ => ManifestError::read(root, e),
    })?;
    if !md.is_dir() {
        return Err(ManifestError::NotADirectory { path: root.to_path_buf() });
    }
    Ok(())
}

/// 普通文件，或指向非目录的符号链接（不跟随时）
fn is_recordable(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    if ft.is_file() {
        return true;
    }
    if ft.is_symlink() {
        // 断开的链接也记录，读取时按读取错误处理
        return !entry.path().is_dir();
    }
    false
}

/// 计算相对根目录的路径，分隔符统一为 `/`
fn relative_path(root: &Path, path: &Path) -> Result<String> {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let mut parts: Vec<&str> = Vec::new();
    for comp in rel.components() {
        if let Component::Normal(name) = comp {
            let name = name
                .to_str()
                .ok_or_else(|| ManifestError::NonUtf8Path { path: path.to_path_buf() })?;
            parts.push(name);
        }
    }
    Ok(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn relative_path_uses_forward_slashes() {
        let root = PathBuf::from("assets");
        let path = root.join("apps").join("demo").join("icon.png");
        assert_eq!(relative_path(&root, &path).unwrap(), "apps/demo/icon.png");
    }

    #[test]
    fn relative_path_top_level_file() {
        let root = PathBuf::from("/tmp/root");
        assert_eq!(relative_path(&root, &root.join("notes.txt")).unwrap(), "notes.txt");
    }
}
