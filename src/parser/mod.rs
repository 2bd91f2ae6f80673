//! テイスティングノートMarkdownのパーサー
//!
//! Notionエクスポートの行を順に走査して豆レコード列を組み立てる。
//!
//! ## 行の分類（優先順位順）
//! 1. 国見出し（`# `）: 現在の生産国を更新し、直前のレコードを確定
//! 2. 豆見出し（`### `）: 新しいレコードを開始し、直後のメタデータ行を消費
//! 3. 箇条書き（`- `）: アクティブなレコードに特徴を追加
//! 4. その他の非空行: 無視

pub mod characteristics;
pub mod country;
pub mod metadata;
pub mod types;

use crate::error::{BeanSeedError, Result};
use std::path::Path;
use types::{BeanRecord, Characteristics};

/// Markdownファイルを読み込んで解析する
pub fn parse_file(path: &Path) -> Result<Vec<BeanRecord>> {
    if !path.exists() {
        return Err(BeanSeedError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    Ok(parse_document(&content))
}

/// ドキュメント全体を解析して出現順の豆レコード列を返す
///
/// 国見出しが現れる前の豆は生産国 "Unknown" になる。
/// 次の豆見出し・国見出しが現れた時点でレコードは確定し、
/// 以降の行が遡って変更することはない。
pub fn parse_document(input: &str) -> Vec<BeanRecord> {
    let lines: Vec<&str> = input.lines().collect();
    let mut beans: Vec<BeanRecord> = Vec::new();
    let mut current_country = String::from("Unknown");
    let mut current_bean: Option<BeanRecord> = None;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        i += 1;

        if line.is_empty() {
            continue;
        }

        // 国見出し
        if let Some(text) = heading_text(line, "#") {
            if let Some(bean) = current_bean.take() {
                beans.push(bean);
            }
            current_country = country::normalize_country(text);
            continue;
        }

        // 豆見出し
        if let Some(text) = heading_text(line, "###") {
            if let Some(bean) = current_bean.take() {
                beans.push(bean);
            }

            let name = text.replace("**", "");

            // 直後の空行・画像行を読み飛ばし、最初の内容行をメタデータとして消費
            let mut metadata_line = "";
            while i < lines.len() {
                let next = lines[i].trim();
                i += 1;
                if next.is_empty() || next.starts_with('!') {
                    continue;
                }
                metadata_line = next;
                break;
            }

            let fields = metadata::parse_metadata(metadata_line);
            current_bean = Some(BeanRecord {
                country: current_country.clone(),
                name,
                roaster: fields.roaster,
                process: fields.process,
                variety: fields.variety,
                characteristics: Characteristics::default(),
            });
            continue;
        }

        // 特徴の箇条書き（アクティブな豆がない場合は無視）
        if let Some(content) = line.strip_prefix('-') {
            if let Some(bean) = current_bean.as_mut() {
                if let Some((key, value)) = content.trim().split_once('：') {
                    if let Some(mapped) = characteristics::map_key(key.trim()) {
                        bean.characteristics.append(mapped, value.trim());
                    }
                }
            }
            continue;
        }

        // 上記のいずれにも該当しない行は無視する
    }

    if let Some(bean) = current_bean.take() {
        beans.push(bean);
    }

    beans
}

/// 見出しマーカーに一致すれば見出しテキストを返す
///
/// マーカー直後に空白を要求するため、`#` が `###` に誤一致することはない
fn heading_text<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(marker)?;
    let first = rest.chars().next()?;
    if first.is_whitespace() {
        Some(rest.trim())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_text() {
        assert_eq!(heading_text("# Ethiopian Coffee", "#"), Some("Ethiopian Coffee"));
        assert_eq!(heading_text("### Yirgacheffe", "###"), Some("Yirgacheffe"));
        assert_eq!(heading_text("### Yirgacheffe", "#"), None);
        assert_eq!(heading_text("## Section", "#"), None);
        assert_eq!(heading_text("#NoSpace", "#"), None);
        assert_eq!(heading_text("plain text", "#"), None);
    }

    #[test]
    fn test_single_bean() {
        let doc = "# Ethiopian Coffee\n\n### **Chelbesa**\n\nHeirloom, Washed\n";
        let beans = parse_document(doc);

        assert_eq!(beans.len(), 1);
        assert_eq!(beans[0].country, "Ethiopia");
        assert_eq!(beans[0].name, "Chelbesa");
        assert_eq!(beans[0].process, Some("Washed".to_string()));
        assert_eq!(beans[0].variety, Some("Heirloom".to_string()));
    }

    #[test]
    fn test_country_inherited_until_next_heading() {
        let doc = "\
# Ethiopian Coffee

### Bean A

Heirloom

### Bean B

Heirloom

# Kenya Coffee

### Bean C

SL28
";
        let beans = parse_document(doc);
        assert_eq!(beans.len(), 3);
        assert_eq!(beans[0].country, "Ethiopia");
        assert_eq!(beans[1].country, "Ethiopia");
        assert_eq!(beans[2].country, "Kenya");
    }

    #[test]
    fn test_default_country_unknown() {
        let doc = "### Mystery Bean\n\nBourbon\n";
        let beans = parse_document(doc);
        assert_eq!(beans[0].country, "Unknown");
    }

    #[test]
    fn test_metadata_skips_image_lines() {
        let doc = "\
### Bean A

![cover](images/bean_a.jpg)

Bourbon, Natural
";
        let beans = parse_document(doc);
        assert_eq!(beans[0].process, Some("Natural".to_string()));
        assert_eq!(beans[0].variety, Some("Bourbon".to_string()));
    }

    #[test]
    fn test_bean_heading_at_eof_has_no_metadata() {
        let doc = "### Last Bean\n";
        let beans = parse_document(doc);

        assert_eq!(beans.len(), 1);
        assert_eq!(beans[0].roaster, None);
        assert_eq!(beans[0].process, None);
        assert_eq!(beans[0].variety, None);
    }

    #[test]
    fn test_bullet_accumulation() {
        let doc = "\
### Bean A

Heirloom

- 前段：Citrus
- 前段：Floral
- 中段：蜂蜜
";
        let beans = parse_document(doc);
        assert_eq!(beans[0].characteristics.beginning, Some("Citrus; Floral".to_string()));
        assert_eq!(beans[0].characteristics.middle, Some("蜂蜜".to_string()));
    }

    #[test]
    fn test_bullet_without_fullwidth_colon_ignored() {
        let doc = "### Bean A\n\nHeirloom\n\n- 前段: Citrus\n";
        let beans = parse_document(doc);
        assert_eq!(beans[0].characteristics.beginning, None);
    }

    #[test]
    fn test_bullet_with_unknown_key_dropped() {
        let doc = "### Bean A\n\nHeirloom\n\n- 備考：雜項\n";
        let beans = parse_document(doc);
        assert_eq!(beans[0].characteristics, Characteristics::default());
    }

    #[test]
    fn test_bullet_before_any_bean_ignored() {
        let doc = "- 前段：Citrus\n\n### Bean A\n\nHeirloom\n";
        let beans = parse_document(doc);
        assert_eq!(beans.len(), 1);
        assert_eq!(beans[0].characteristics.beginning, None);
    }

    #[test]
    fn test_country_heading_closes_extension_window() {
        let doc = "\
### Bean A

Heirloom

# Kenya Coffee

- 前段：Citrus

### Bean B

SL28
";
        let beans = parse_document(doc);
        assert_eq!(beans.len(), 2);
        // 国見出しの後の箇条書きは前の豆に付かない
        assert_eq!(beans[0].characteristics.beginning, None);
        assert_eq!(beans[1].characteristics.beginning, None);
    }

    #[test]
    fn test_other_lines_ignored() {
        let doc = "\
# Ethiopian Coffee

散文の説明行は無視される

### Bean A

Heirloom

ここにある散文も無視される
";
        let beans = parse_document(doc);
        assert_eq!(beans.len(), 1);
        assert_eq!(beans[0].variety, Some("Heirloom".to_string()));
    }
}
