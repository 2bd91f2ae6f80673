use clap::Parser;
use std::path::PathBuf;

/// デフォルトの入力Markdownファイル（Notionエクスポート）
pub const DEFAULT_INPUT: &str = "NotionExport/Coffee_Tasting.md";

/// デフォルトの出力SQLファイル
pub const DEFAULT_OUTPUT: &str = "supabase/seed_notion_beans.sql";

#[derive(Parser)]
#[command(name = "bean-seed")]
#[command(about = "コーヒーテイスティングノートからSQLシードを生成", long_about = None)]
pub struct Cli {
    /// 入力Markdownファイル（Notionエクスポート）
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// 出力SQLファイル
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}
