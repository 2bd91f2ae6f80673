//! SQLシードファイルの出力

pub mod sql;

use crate::error::Result;
use crate::parser::types::BeanRecord;
use std::path::Path;

/// SQLシードをファイルに書き出す
///
/// 親ディレクトリが存在しなければ作成する
pub fn write_seed_file(beans: &[BeanRecord], output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let content = sql::generate_sql(beans)?;
    std::fs::write(output, content)?;
    Ok(())
}
