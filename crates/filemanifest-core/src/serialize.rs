//! 清单序列化
use std::io::Write;

use crate::error::Result;
use crate::record::FileRecord;

/// 将记录序列渲染为紧凑 JSON 数组
pub fn to_json_string(records: &[FileRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

/// 先在内存中完成渲染，再一次性写入 `out`（末尾带换行），避免半截数组
pub fn write_manifest(records: &[FileRecord], out: &mut dyn Write) -> Result<()> {
    let json = to_json_string(records)?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}
