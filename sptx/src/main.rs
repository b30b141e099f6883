use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use sptx::{load_matrix, save_matrix, SparseMatrix, SptxError};

const ADD_RESULT_FILE: &str = "addition_result.txt";
const SUBTRACT_RESULT_FILE: &str = "subtraction_result.txt";
const MULTIPLY_RESULT_FILE: &str = "multiplication_result.txt";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "SPTX CLI - Load sparse matrix text files and compute sums, differences, and products")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load two matrices and run arithmetic operations interactively
    Compute {
        /// Path to the first matrix file
        matrix_a: PathBuf,

        /// Path to the second matrix file
        matrix_b: PathBuf,

        /// Directory where result files are written
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// Show matrix file info
    Info {
        /// Path to a matrix file
        file: PathBuf,

        /// Emit the summary as JSON
        #[cfg(feature = "serde")]
        #[arg(long)]
        json: bool,
    },
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct MatrixSummary {
    rows: i64,
    cols: i64,
    nnz: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Compute {
            matrix_a,
            matrix_b,
            output_dir,
        } => {
            handle_compute(matrix_a, matrix_b, output_dir)?;
        }
        #[cfg(feature = "serde")]
        Commands::Info { file, json } => {
            handle_info(file, *json)?;
        }
        #[cfg(not(feature = "serde"))]
        Commands::Info { file } => {
            handle_info(file, false)?;
        }
    }

    Ok(())
}

fn handle_compute(
    matrix_a: &Path,
    matrix_b: &Path,
    output_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let a = load_matrix(matrix_a)?;
    let b = load_matrix(matrix_b)?;

    println!("Matrix 1: {} rows, {} cols", a.nrows(), a.ncols());
    println!("Matrix 2: {} rows, {} cols", b.nrows(), b.ncols());

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("Select operation:");
        println!("1. Addition");
        println!("2. Subtraction");
        println!("3. Multiplication");
        println!("4. Exit");
        print!("Enter choice: ");
        std::io::stdout().flush()?;

        let choice = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        // Dimension mismatches are reported for all three operations; any
        // other failure (result file not writable) aborts the loop.
        match choice.trim() {
            "1" => run_operation(&a, &b, SparseMatrix::add, "Addition", output_dir, ADD_RESULT_FILE)?,
            "2" => run_operation(
                &a,
                &b,
                SparseMatrix::subtract,
                "Subtraction",
                output_dir,
                SUBTRACT_RESULT_FILE,
            )?,
            "3" => run_operation(
                &a,
                &b,
                SparseMatrix::multiply,
                "Multiplication",
                output_dir,
                MULTIPLY_RESULT_FILE,
            )?,
            "4" => break,
            _ => println!("Invalid choice. Please select again."),
        }
    }

    Ok(())
}

fn run_operation(
    a: &SparseMatrix,
    b: &SparseMatrix,
    op: fn(&SparseMatrix, &SparseMatrix) -> sptx::Result<SparseMatrix>,
    label: &str,
    output_dir: &Path,
    file_name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match op(a, b) {
        Ok(result) => {
            println!("{label} Result:\n{result}");
            let output_path = output_dir.join(file_name);
            save_matrix(&output_path, &result)?;
            println!("Result written to {}", output_path.display());
        }
        Err(err @ SptxError::DimensionMismatch { .. }) => {
            println!("{err}");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn handle_info(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let matrix = load_matrix(file)?;

    #[cfg(feature = "serde")]
    if json {
        let summary = MatrixSummary {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
            nnz: matrix.nnz(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    let _ = json;

    println!("Matrix Info:");
    println!("  File: {}", file.display());
    println!("  Dimensions: {} x {}", matrix.nrows(), matrix.ncols());
    println!("  Stored elements: {}", matrix.nnz());

    Ok(())
}
