//! 清单条目（对外暴露）
use serde::Serialize;

/// 文件名前缀：图标资源
const ICON_PREFIX: &str = "icon";
/// 文件名后缀：应用镜像
const APPFS_SUFFIX: &str = ".bin";

/// 输出数组中的单个元素；字段顺序即 JSON 中的键顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// 相对根目录的路径，分隔符统一为 `/`
    pub path: String,
    pub size: u64,
    /// 文件内容的 CRC-32（zlib 多项式）
    pub checksum: u32,
    pub flags: FileFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FileFlags {
    pub icon: bool,
    pub appfs: bool,
    pub skip: bool,
}

impl FileFlags {
    /// 根据文件名（不含目录部分）与内容长度计算标志位
    /// - 大小写敏感的前缀/后缀匹配，只看文件名，不看完整路径
    pub fn derive(base_name: &str, size: u64) -> Self {
        Self {
            icon: base_name.starts_with(ICON_PREFIX),
            appfs: base_name.ends_with(APPFS_SUFFIX),
            skip: size == 0,
        }
    }
}
