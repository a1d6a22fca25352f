//! 错误类型
use std::path::PathBuf;
use thiserror::Error;

/// 清单生成过程中的错误（均为致命错误，调用方直接向上传播）
#[derive(Debug, Error)]
pub enum ManifestError {
    /// 根目录不存在
    #[error("root directory not found: {path}")]
    RootNotFound { path: PathBuf },

    /// 根路径存在但不是目录
    #[error("root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// 目录遍历失败（例如根目录不可读）
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// 无权限读取
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// 文件读取失败（打开失败、读取中途出错、遍历后被删除等）
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 路径无法表示为 UTF-8，写不进 JSON 字符串
    #[error("path is not valid UTF-8: {path}")]
    NonUtf8Path { path: PathBuf },

    /// 应用 metadata.json 解析失败
    #[error("invalid metadata in {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON 编码失败
    #[error("failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),

    /// 输出流写入失败
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl ManifestError {
    /// 带路径上下文的读取错误；权限问题单独归类
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Read { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, ManifestError>;
