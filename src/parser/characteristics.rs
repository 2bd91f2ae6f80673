//! 特徴キーのマッピング

use super::types::CharacteristicKey;

/// 特徴キーのマーカーテーブル（先頭一致優先）
///
/// マーカーは小文字で保持し、キー側を小文字化して部分一致で照合する
const KEY_MARKERS: &[(&[&str], CharacteristicKey)] = &[
    (&["香氣", "乾香"], CharacteristicKey::Aroma),
    (&["前段"], CharacteristicKey::Beginning),
    (&["中段"], CharacteristicKey::Middle),
    (&["後段"], CharacteristicKey::End),
    (&["aftertaste"], CharacteristicKey::Aftertaste),
    (&["mouthfeel"], CharacteristicKey::Mouthfeel),
    (&["color tone"], CharacteristicKey::ColorTone),
];

/// 箇条書きのキーを特徴キーに対応付ける
///
/// どのマーカーにも一致しないキーはNone（その行は捨てられる）
pub fn map_key(key: &str) -> Option<CharacteristicKey> {
    let lowered = key.to_lowercase();
    for (markers, mapped) in KEY_MARKERS {
        if markers.iter().any(|m| lowered.contains(m)) {
            return Some(*mapped);
        }
    }
    None
}
