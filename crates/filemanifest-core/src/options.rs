//! 清单选项与统计信息

/// 清单生成选项
#[derive(Debug, Clone, Default)]
pub struct ManifestOptions {
    /// 是否跟随符号链接进入目录；默认不跟随（与系统默认遍历行为一致）
    pub follow_links: bool,
}

/// 统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManifestStats {
    pub files_recorded: usize,
    pub bytes_total: u64,
    pub empty_files: usize,
    /// 被跳过的条目：不可读的子目录、特殊文件等
    pub entries_skipped: usize,
}

impl ManifestStats {
    pub(crate) fn record(&mut self, size: u64) {
        self.files_recorded += 1;
        self.bytes_total += size;
        if size == 0 {
            self.empty_files += 1;
        }
    }
}
