//! 豆レコードの型定義

use serde::Serialize;

/// テイスティング特徴のキー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacteristicKey {
    Aroma,
    Beginning,
    Middle,
    End,
    Aftertaste,
    Mouthfeel,
    ColorTone,
}

/// テイスティング特徴（JSONカラムに格納される）
///
/// フィールドの宣言順がそのままJSONのキー順になる。
/// 未設定のキーはJSONに含めない。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Characteristics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aroma: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub beginning: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aftertaste: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouthfeel: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_tone: Option<String>,
}

impl Characteristics {
    /// 特徴値を設定する。設定済みのキーには "; " 区切りで連結する
    pub fn append(&mut self, key: CharacteristicKey, value: &str) {
        let slot = match key {
            CharacteristicKey::Aroma => &mut self.aroma,
            CharacteristicKey::Beginning => &mut self.beginning,
            CharacteristicKey::Middle => &mut self.middle,
            CharacteristicKey::End => &mut self.end,
            CharacteristicKey::Aftertaste => &mut self.aftertaste,
            CharacteristicKey::Mouthfeel => &mut self.mouthfeel,
            CharacteristicKey::ColorTone => &mut self.color_tone,
        };

        match slot {
            Some(existing) => {
                existing.push_str("; ");
                existing.push_str(value);
            }
            None => *slot = Some(value.to_string()),
        }
    }
}

/// 1つのコーヒー豆のテイスティングデータ
#[derive(Debug, Clone, PartialEq)]
pub struct BeanRecord {
    /// 生産国（直近の国見出しから継承）
    pub country: String,

    /// 豆の名前（見出しから強調記号を除去したもの）
    pub name: String,

    /// 焙煎者（"Roasted by" マーカーから抽出）
    pub roaster: Option<String>,

    /// 精製方法（キーワードに一致した断片のカンマ連結）
    pub process: Option<String>,

    /// 品種（キーワードに一致しなかった断片のカンマ連結）
    pub variety: Option<String>,

    /// テイスティング特徴
    pub characteristics: Characteristics,
}
