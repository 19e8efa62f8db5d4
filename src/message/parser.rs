/// 从编辑后的文本中解析 commit message
///
/// - 支持 `\n`、`\r\n`、`\r` 三种换行
/// - 删除以 `#` 开头的行（行内的 `#` 保留）
/// - 去掉首尾空行，最后整体 trim
///
/// 结果可能为空字符串，由调用方决定是否中止 commit。
pub fn parse_message(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");

    let lines: Vec<&str> = normalized
        .split('\n')
        .filter(|line| !line.starts_with('#'))
        .collect();

    let is_blank = |line: &&str| line.trim().is_empty();
    let start = lines.iter().position(|l| !is_blank(l)).unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !is_blank(l))
        .map_or(start, |i| i + 1);

    lines[start..end].join("\n").trim().to_string()
}
