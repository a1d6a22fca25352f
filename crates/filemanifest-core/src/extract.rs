//! 单文件元数据提取（整读 + CRC-32 + 标志位）
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::checksum::crc32;
use crate::error::{ManifestError, Result};
use crate::record::{FileFlags, FileRecord};

/// 读取单个文件并生成清单条目
/// - `full_path` 用于打开文件；`base_name` 仅用于计算标志位
/// - `rel_path` 为相对根目录、已统一为 `/` 分隔的路径，原样写入条目
/// - 长度与校验和来自同一次读取，不会混用两个快照
pub fn extract_metadata(full_path: &Path, rel_path: &str, base_name: &str) -> Result<FileRecord> {
    let buf = read_all(full_path)?;
    let size = buf.len() as u64;
    let checksum = crc32(&buf);
    debug!(path = %full_path.display(), size, checksum, "file read");

    Ok(FileRecord {
        path: rel_path.to_string(),
        size,
        checksum,
        flags: FileFlags::derive(base_name, size),
    })
}

fn read_all(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path).map_err(|e| ManifestError::read(path, e))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(|e| ManifestError::read(path, e))?;
    Ok(buf)
}
