use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use surf_integral::tools::{load_rgb, table_stats};
use surf_integral::{IntegralError, IntegralTable, RgbBuffer};

#[derive(Parser)]
#[command(name = "integral_tool", version, about = "Integral table CLI tools")]
struct Cli {
    /// Build row sums in parallel
    #[arg(long, global = true)]
    parallel: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print table dimensions and total/mean intensity for an image
    Stats {
        #[arg(long)]
        image: PathBuf,
    },
    /// Print the intensity sum over one rectangle
    Sum {
        #[arg(long)]
        image: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        row: isize,
        #[arg(long, allow_hyphen_values = true)]
        col: isize,
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        cols: usize,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Stats { image } => stats_cmd(&image, cli.parallel),
        Command::Sum {
            image,
            row,
            col,
            rows,
            cols,
        } => sum_cmd(&image, cli.parallel, row, col, rows, cols),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Failed to process image: {err}");
            ExitCode::FAILURE
        }
    }
}

fn build_table(image: &Path, parallel: bool) -> Result<IntegralTable, IntegralError> {
    let (pixels, width, height) = load_rgb(image)?;
    let source = RgbBuffer::new(&pixels, width, height)?;

    let start = Instant::now();
    let table = if parallel {
        IntegralTable::new_parallel(&source)
    } else {
        IntegralTable::new(&source)
    };
    info!(
        "built {}x{} table in {:.2} ms",
        width,
        height,
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(table)
}

fn stats_cmd(image: &Path, parallel: bool) -> Result<(), IntegralError> {
    let table = build_table(image, parallel)?;
    let stats = table_stats(&table);
    println!("Image: {} ({}x{})", image.display(), stats.width, stats.height);
    println!("Total intensity: {:.4}", stats.total);
    println!("Mean intensity: {:.4}", stats.mean);
    Ok(())
}

fn sum_cmd(
    image: &Path,
    parallel: bool,
    row: isize,
    col: isize,
    rows: usize,
    cols: usize,
) -> Result<(), IntegralError> {
    let table = build_table(image, parallel)?;
    if table.is_empty() {
        println!("Image {} has no pixels", image.display());
        return Ok(());
    }
    let sum = table.rectangle_sum(row, col, rows, cols);
    println!(
        "Sum over {}x{} rectangle at row {} col {}: {:.4}",
        rows, cols, row, col, sum
    );
    Ok(())
}
