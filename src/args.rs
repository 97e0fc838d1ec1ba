// src/args.rs
use crate::options::ReportFormat;
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use decomment_engine::config::{DEFAULT_PROGRESS_STEP, DEFAULT_SUFFIX};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "decomment",
    version,
    about = "C/C++ ソースからコメントを削除するツール (文字列/文字リテラルと行番号は保持)"
)]
pub struct Args {
    /// コメントを削除するソースファイル
    #[arg(value_hint = ValueHint::FilePath, help_heading = "入力/出力")]
    pub source: PathBuf,

    /// 出力ファイル（省略時: <名前><suffix>.<拡張子>）
    #[arg(value_hint = ValueHint::FilePath, help_heading = "入力/出力")]
    pub destination: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力ファイル名の自動生成で付加する接尾辞
    #[arg(long, default_value = DEFAULT_SUFFIX, help_heading = "入力/出力")]
    pub suffix: String,

    /// ファイルではなく標準出力へ書き出す
    #[arg(long, conflicts_with = "destination", help_heading = "入力/出力")]
    pub stdout: bool,

    /// 実行レポートの形式（標準エラーへ出力）
    #[arg(long, value_enum, default_value = "text", help_heading = "レポート")]
    pub format: ReportFormat,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// 読み込み/処理の進捗を表示
    #[arg(long, help_heading = "動作")]
    pub progress: bool,

    /// 進捗表示の間隔（%）
    #[arg(
        long,
        default_value_t = DEFAULT_PROGRESS_STEP,
        value_parser = clap::value_parser!(u8).range(1..=100),
        help_heading = "動作"
    )]
    pub progress_step: u8,

    /// レポートと警告を出さない
    #[arg(short, long, conflicts_with = "verbose", help_heading = "動作")]
    pub quiet: bool,

    /// ログを詳細にする (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
