/// 校验提交的文件地址
///
/// 文件本身由文件服务上传，这里只检查引用地址是否可存储：
/// 去掉首尾空白后非空，字符数不超过上限，且不含控制字符。
pub fn validate_file_url(file_url: &str, max_len: usize) -> Result<(), &'static str> {
    let trimmed = file_url.trim();
    if trimmed.is_empty() {
        return Err("文件地址不能为空");
    }
    if trimmed.chars().count() > max_len {
        return Err("文件地址过长");
    }
    if trimmed.chars().any(|c| c.is_control()) {
        return Err("文件地址包含非法字符");
    }
    Ok(())
}
