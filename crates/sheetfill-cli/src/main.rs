//! Sheetfill CLI - fill workbook snapshots with synthetic data

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sheetfill::prelude::*;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetfill")]
#[command(
    author,
    version,
    about = "Fill workbook snapshots with synthetic presence, grade, or answer data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill the selected cells of every data sheet and write the result
    Fill {
        /// Input workbook snapshot (JSON)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fill policy to run
        #[arg(short, long, value_enum)]
        mode: FillMode,

        /// Column letters to fill, e.g. "A,C,F"
        #[arg(short, long)]
        columns: String,

        /// Rows to fill, as integers and inclusive ranges, e.g. "2,5-9"
        #[arg(short, long)]
        rows: String,

        /// Full-marks value (graded mode)
        #[arg(long)]
        marks: Option<i64>,

        /// Reference column letter holding the answer key (answers mode)
        #[arg(long)]
        ref_column: Option<String>,

        /// Seed for the random source, for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Rebuild the workbook instead of mutating the loaded one
        #[arg(long)]
        copy: bool,
    },

    /// Show information about a workbook snapshot
    Info {
        /// Input workbook snapshot
        input: PathBuf,
    },

    /// List all sheets in a workbook snapshot
    Sheets {
        /// Input workbook snapshot
        input: PathBuf,
    },
}

/// CLI-facing fill mode names
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FillMode {
    /// Mark most selected cells with a "v"
    Presence,
    /// Assign teams/projects and fill marks
    Graded,
    /// Copy answers from a reference column
    Answers,
}

impl From<FillMode> for Mode {
    fn from(mode: FillMode) -> Self {
        match mode {
            FillMode::Presence => Mode::PresenceMark,
            FillMode::Graded => Mode::GradedTeam,
            FillMode::Answers => Mode::AnswerKey,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fill {
            input,
            output,
            mode,
            columns,
            rows,
            marks,
            ref_column,
            seed,
            copy,
        } => {
            let mut request = FillRequest::new(mode.into(), columns, rows);
            request.marks = marks;
            request.ref_column = ref_column;
            fill(&input, output.as_deref(), &request, seed, copy)
        }
        Commands::Info { input } => show_info(&input),
        Commands::Sheets { input } => list_sheets(&input),
    }
}

fn fill(
    input: &PathBuf,
    output: Option<&std::path::Path>,
    request: &FillRequest,
    seed: Option<u64>,
    copy: bool,
) -> Result<()> {
    let mut workbook = JsonReader::read_file(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    let options = FillOptions::default();
    let mut filler = match seed {
        Some(seed) => Filler::from_seed(options, seed),
        None => Filler::new(options),
    };

    let filled = if copy {
        filler
            .fill_into_copy(&workbook, request)
            .context("Fill failed")?
    } else {
        filler.fill(&mut workbook, request).context("Fill failed")?;
        workbook
    };

    let write_options = JsonWriteOptions::default();
    if let Some(output_path) = output {
        JsonWriter::write_file(&filled, output_path, &write_options)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Filled {} sheets into '{}'",
            filled.sheet_count().saturating_sub(1),
            output_path.display()
        );
    } else {
        JsonWriter::write(&filled, io::stdout().lock(), &write_options)
            .context("Failed to write to stdout")?;
        println!();
    }

    Ok(())
}

fn show_info(input: &PathBuf) -> Result<()> {
    let workbook = JsonReader::read_file(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    println!("File: {}", input.display());
    println!("Sheets: {}", workbook.sheet_count());

    for (i, sheet) in workbook.worksheets().enumerate() {
        println!();
        println!("  Sheet {}: \"{}\"", i, sheet.name());

        match sheet.used_bounds() {
            Some((min_row, min_col, max_row, max_col)) => {
                println!(
                    "    Used range: rows {}-{}, columns {}-{}",
                    min_row, max_row, min_col, max_col
                );
                println!("    Stored cells: {}", sheet.cell_count());
            }
            None => println!("    Used range: empty"),
        }
    }

    Ok(())
}

fn list_sheets(input: &PathBuf) -> Result<()> {
    let workbook = JsonReader::read_file(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    for (i, sheet) in workbook.worksheets().enumerate() {
        println!("{}\t{}", i, sheet.name());
    }

    Ok(())
}
