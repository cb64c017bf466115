/// 验证图片文件内容的魔术字节是否与扩展名匹配
///
/// 头像与学生照片上传只接受图片，其余类型一律拒绝。
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_lowercase().as_str() {
        ".png" => data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
        ".jpg" | ".jpeg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
        ".gif" => data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a"),
        ".webp" => data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP",
        ".bmp" => data.starts_with(b"BM"),

        // 非图片格式 - 默认拒绝
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_magic() {
        let png_header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(validate_magic_bytes(&png_header, ".png"));
        assert!(validate_magic_bytes(&png_header, ".PNG"));
        assert!(!validate_magic_bytes(&png_header, ".jpg"));
    }

    #[test]
    fn test_jpeg_magic() {
        let jpeg_header = [0xFF, 0xD8, 0xFF, 0xE0];
        assert!(validate_magic_bytes(&jpeg_header, ".jpg"));
        assert!(validate_magic_bytes(&jpeg_header, ".jpeg"));
        assert!(!validate_magic_bytes(&jpeg_header, ".png"));
    }

    #[test]
    fn test_non_image_rejected() {
        let pdf_header = b"%PDF-1.4";
        assert!(!validate_magic_bytes(pdf_header, ".pdf"));
        assert!(!validate_magic_bytes(b"Hello", ".txt"));
        assert!(!validate_magic_bytes(&[0x00, 0x01], ".exe"));
    }

    #[test]
    fn test_empty_data() {
        assert!(!validate_magic_bytes(&[], ".png"));
    }
}
