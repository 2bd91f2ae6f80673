//! 国見出しの正規化

/// 既知の国名テーブル（部分一致・先頭優先）
const COUNTRY_TABLE: &[(&str, &str)] = &[
    ("Ethiopian", "Ethiopia"),
    ("Kenya", "Kenya"),
    ("Burundi", "Burundi"),
    ("Tanzania", "Tanzania"),
    ("Rwanda", "Rwanda"),
    ("Costa Rica", "Costa Rica"),
    ("Colombia", "Colombia"),
];

/// 国見出しのテキストを正規化された国名に変換する
///
/// テーブルに一致しない場合は "Ethiopian Coffee" 形式の
/// 末尾修飾語を除いた見出しテキストをそのまま返す
pub fn normalize_country(heading: &str) -> String {
    for (marker, canonical) in COUNTRY_TABLE {
        if heading.contains(marker) {
            return (*canonical).to_string();
        }
    }
    heading.replace(" Coffee", "")
}
