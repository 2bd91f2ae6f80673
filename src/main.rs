use bean_seed_rust::{cli, error, export, parser};
use clap::Parser;
use cli::Cli;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("☕ bean-seed-rust - テイスティングノート変換\n");

    // 1. Markdown解析
    println!("[1/2] {} を解析中...", cli.input.display());
    let beans = parser::parse_file(&cli.input)?;
    println!("✔ {}件の豆データを検出\n", beans.len());

    // 2. SQL生成
    println!("[2/2] SQLを生成中...");
    export::write_seed_file(&beans, &cli.output)?;
    println!("✔ SQL出力: {}", cli.output.display());

    println!("\n✅ 変換完了");
    Ok(())
}
