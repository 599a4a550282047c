//! 数値の文字列化（SVG 属性用）

/// 小数点以下最大2桁で数値を文字列にする
///
/// 末尾の 0 と小数点は落とす（`16.0` → `"16"`, `2.5` → `"2.5"`）。`-0` は `"0"` にする。
pub fn num_string(x: f32) -> String {
    let s = format!("{x:.2}");
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
