//! SQL文の生成
//!
//! 豆レコードをbeansテーブルへのINSERT文に変換する。
//! user_idは開発環境向けにprofilesの先頭行を参照するサブクエリで固定する
//! （シードユーザーが1人だけの環境を想定。本番投入時は置き換えが必要）

use crate::error::Result;
use crate::parser::types::BeanRecord;

/// 出力ファイル先頭のコメント行
pub const SQL_HEADER: &str = "-- Seed data generated from Notion Export";

/// user_id用のプレースホルダサブクエリ
const USER_ID_SUBQUERY: &str = "(SELECT id FROM profiles LIMIT 1)";

/// 文字列をSQLリテラルに変換する
///
/// 未設定はNULLリテラル、シングルクォートは二重化する
pub fn quote_literal(value: Option<&str>) -> String {
    match value {
        Some(text) => format!("'{}'", text.replace('\'', "''")),
        None => "NULL".to_string(),
    }
}

/// 豆レコード列からSQLシード全体を生成する
///
/// 1レコード1文、改行区切り、先頭にコメント行
pub fn generate_sql(beans: &[BeanRecord]) -> Result<String> {
    let mut lines = vec![SQL_HEADER.to_string()];

    for bean in beans {
        let characteristics = serde_json::to_string(&bean.characteristics)?;
        lines.push(format!(
            "INSERT INTO beans (user_id, name, country, roaster, variety, process, characteristics) VALUES ({}, {}, {}, {}, {}, {}, '{}'::jsonb);",
            USER_ID_SUBQUERY,
            quote_literal(Some(bean.name.as_str())),
            quote_literal(Some(bean.country.as_str())),
            quote_literal(bean.roaster.as_deref()),
            quote_literal(bean.variety.as_deref()),
            quote_literal(bean.process.as_deref()),
            characteristics.replace('\'', "''"),
        ));
    }

    Ok(lines.join("\n"))
}
