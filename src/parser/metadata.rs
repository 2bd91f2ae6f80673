//! メタデータ行の解析
//!
//! 豆見出し直後の1行から焙煎者・精製方法・品種を抽出する:
//! 1. "Roasted by" マーカーで焙煎者を切り出し、行から除去
//! 2. 残りをカンマで分割し、精製キーワードの有無で精製方法と品種に振り分け

use regex::Regex;

/// 精製方法のキーワード（断片ごとに先頭一致で打ち切り）
const PROCESS_KEYWORDS: &[&str] = &[
    "Washed",
    "Natural",
    "Honey",
    "Anaerobic",
    "Maceration",
    "Wet Hull",
    "Giling Basah",
    "Hybrid",
    "F1",
    "Double Fermentation",
    "Carbonic",
    "Yabai",
    "JH Natural",
    "Cold Fermentation",
    "Dark Room",
];

/// メタデータ行から抽出したフィールド
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataFields {
    pub roaster: Option<String>,
    pub process: Option<String>,
    pub variety: Option<String>,
}

/// メタデータ行を解析する
///
/// 精製方法と品種は断片の排他的な振り分けになる:
/// キーワードを含む断片は精製方法、残りはすべて品種
pub fn parse_metadata(line: &str) -> MetadataFields {
    lazy_static::lazy_static! {
        static ref ROASTER_RE: Regex =
            Regex::new(r"(?i),?\s*roasted by\s*:?\s*(.*)").unwrap();
    }

    let mut roaster = None;
    let mut rest = line;

    if let Some(caps) = ROASTER_RE.captures(line) {
        if let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) {
            roaster = Some(name.as_str().trim().to_string());
            rest = line[..whole.start()].trim();
        }
    }

    let mut processes: Vec<&str> = Vec::new();
    let mut varieties: Vec<&str> = Vec::new();

    for part in rest.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let lowered = part.to_lowercase();
        let is_process = PROCESS_KEYWORDS
            .iter()
            .any(|k| lowered.contains(&k.to_lowercase()));
        if is_process {
            processes.push(part);
        } else {
            varieties.push(part);
        }
    }

    MetadataFields {
        roaster,
        process: join_nonempty(&processes),
        variety: join_nonempty(&varieties),
    }
}

fn join_nonempty(parts: &[&str]) -> Option<String> {
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
