//! URI 转义，与 ECMAScript `encodeURI` 行为一致。
//!
//! 资源路径经常包含空格和括号（如 `Project Report/Report (1).pdf`），
//! 写入 `src` / `href` 前统一经过 [`encode_uri`]。

/// `encodeURI` 保留不转义的 ASCII 标点
const PRESERVED: &[u8] = b";,/?:@&=+$-_.!~*'()#";

/// 按 `encodeURI` 规则转义：保留字母数字与 URI 保留字符，其余字节按 UTF-8 百分号编码
pub fn encode_uri(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if byte.is_ascii_alphanumeric() || PRESERVED.contains(&byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(hex_digit(byte >> 4));
            out.push(hex_digit(byte & 0x0F));
        }
    }
    out
}

fn hex_digit(nibble: u8) -> char {
    char::from(b"0123456789ABCDEF"[usize::from(nibble)])
}
