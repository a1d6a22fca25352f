//! 资源清单核心库
//!
//! 设计要点：
//! - 递归遍历根目录，每个普通文件生成一条 `FileRecord`（相对路径统一为 `/` 分隔）。
//! - 单次整读文件内容，`size` 与 `checksum`（CRC-32）来自同一份缓冲区。
//! - 全部记录先收集到内存，再一次性序列化为 JSON 数组；任何错误都不会产生半截输出。
//! - 附带应用仓库的分类索引（`metadata.json` → 分类 → 应用列表）。

mod error;
mod options;
mod record;
mod checksum;
mod extract;
mod manifest;
mod serialize;
mod catalog;

pub use error::{ManifestError, Result};
pub use options::{ManifestOptions, ManifestStats};
pub use record::{FileFlags, FileRecord};
pub use checksum::crc32;
pub use extract::extract_metadata;
pub use manifest::build_manifest;
pub use serialize::{to_json_string, write_manifest};
pub use catalog::{build_category_index, category_slug, Category, CategoryIndex};
