use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use crossbeam_channel::unbounded;

use padsolver::domain::matching::MatchRecord;
use padsolver::domain::search::{FrontierWidth, PathLength, SolverConfig};
use padsolver::infrastructure::{
    BoardGenerator, FileResultWriter, ParallelConfig, ParallelExecutor, ResultWriter,
};
use padsolver::logging::{enable_verbose_logging, init_log_file};
use padsolver::presentation::{BoardView, PathView, SolverViewState};
use padsolver::{Grid, SolverService};

#[derive(Parser, Debug)]
#[command(name = "padsolver", version, about = "ドロップ盤面の最適な入れ替え経路を探索する")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 盤面を求解して上位の経路を表示
    Solve(SolveArgs),
    /// マッチのないランダム盤面を表示
    Random(RandomArgs),
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// 盤面（行を '/' で区切る。例: "RBGLDH/...")
    #[arg(short, long)]
    board: String,

    /// 設定ファイル（JSON）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 経路長（ステップ数）
    #[arg(short, long)]
    steps: Option<u32>,

    /// ビーム幅（0 で無制限）
    #[arg(short, long)]
    width: Option<usize>,

    /// 表示・出力する解の数（0 で全件）
    #[arg(short, long)]
    top: Option<usize>,

    /// 解の出力先（.json なら配列、それ以外は JSON Lines）
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// ワーカースレッド数（既定は論理CPU数）
    #[arg(long)]
    threads: Option<usize>,

    /// 展開を並列化しない
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// 詳細ログ
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// 詳細ログの出力先（未指定なら標準エラー）
    #[arg(long)]
    log: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RandomArgs {
    /// 乱数シード（再現用）
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 5)]
    rows: usize,

    #[arg(long, default_value_t = 6)]
    cols: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Solve(args) => run_solve(args),
        Command::Random(args) => run_random(args),
    }
}

fn build_config(args: &SolveArgs, board: &Grid) -> Result<SolverConfig> {
    let mut config = match &args.config {
        Some(path) => SolverConfig::from_json_file(path)?,
        // 設定ファイルがなければ盤面サイズに合わせる
        None => SolverConfig {
            rows: board.rows(),
            cols: board.cols(),
            ..SolverConfig::default()
        },
    };
    if let Some(steps) = args.steps {
        config.search.max_path_length = PathLength::new(steps)?;
    }
    if let Some(width) = args.width {
        config.search.frontier_width = FrontierWidth::new(width);
    }
    if let Some(top) = args.top {
        config.search.max_solutions = top;
    }
    if args.sequential {
        config.search.parallel = false;
    }
    config.validate()?;
    Ok(config)
}

fn format_matches(matches: &[MatchRecord]) -> String {
    if matches.is_empty() {
        return "-".to_string();
    }
    matches
        .iter()
        .map(|m| format!("{}{}", m.token.to_char(), m.size))
        .collect::<Vec<_>>()
        .join(" ")
}

fn open_writer(path: &Path) -> Result<FileResultWriter> {
    if path.extension().is_some_and(|e| e == "json") {
        FileResultWriter::json_array(path)
    } else {
        FileResultWriter::json_lines(path)
    }
}

fn run_solve(args: SolveArgs) -> Result<()> {
    if args.verbose {
        enable_verbose_logging();
        if let Some(path) = &args.log {
            init_log_file(path)
                .with_context(|| format!("ログファイルを開けません: {}", path.display()))?;
        }
    }

    let board = Grid::parse(&args.board).context("盤面の読み込みに失敗しました")?;
    let config = build_config(&args, &board)?;

    let executor = ParallelExecutor::new(match args.threads {
        Some(n) => ParallelConfig::new(n),
        None => ParallelConfig::default(),
    })?;

    let (tx, rx) = unbounded();
    let mut service = SolverService::new(config)
        .with_events(tx)
        .with_pool(executor.pool());

    let mut view = SolverViewState::new();
    view.start();
    let result = service.solve(&board);
    for event in rx.try_iter() {
        view.apply(&event);
    }
    let outcome = result?;

    println!("初期盤面:");
    print!("{}", BoardView::new(&board));
    if !outcome.base.matches.is_empty() {
        println!(
            "開始前に消えたマッチ: {}",
            format_matches(&outcome.base.matches)
        );
    }
    println!();

    println!("順位  経路                             スコア    マッチ");
    for (rank, s) in outcome.solutions.iter().enumerate() {
        println!(
            "#{:<3}  {:<32} {:>8.4}  {}",
            rank,
            PathView::from_solution(s).compact(),
            s.score,
            format_matches(&s.matches)
        );
    }

    if let Some(best) = outcome.best() {
        println!();
        println!("起点:");
        print!("{}", BoardView::with_origin(&outcome.base.board, best.origin));
        println!("最終盤面（#0）:");
        print!("{}", BoardView::new(&best.board));
    }

    if let Some(path) = &args.out {
        let mut writer = open_writer(path)?;
        writer.write_batch(&outcome.solutions)?;
        writer.flush()?;
        println!("{}件を書き込みました: {}", writer.count(), path.display());
    }

    println!("{}", view.status_line());
    Ok(())
}

fn run_random(args: RandomArgs) -> Result<()> {
    let generator = BoardGenerator::new(args.rows, args.cols);
    let board = match args.seed {
        Some(seed) => generator.generate_seeded(seed)?,
        None => generator.generate(&mut rand::thread_rng())?,
    };
    println!("{}", board.to_text());
    print!("{}", BoardView::new(&board));
    Ok(())
}
