use crc32fast::Hasher;

/// 标准 CRC-32（与 zlib/zip 相同的多项式），用于变更指纹而非安全校验
pub fn crc32(data: &[u8]) -> u32 {
    let mut h = Hasher::new();
    h.update(data);
    h.finalize()
}
