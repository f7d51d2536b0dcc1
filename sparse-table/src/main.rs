use std::process::ExitCode;

use clap::Parser;
use sparse_table::{Operation, SparseTable};

/// Build a sparse table and answer one range query.
#[derive(clap::Parser)]
struct Args {
    /// Left end of the query, inclusive.
    #[clap(default_value_t = 2)]
    left: usize,
    /// Right end of the query, inclusive.
    #[clap(default_value_t = 7)]
    right: usize,
    /// One of min, max, sum, gcd.
    #[clap(short, long, default_value_t = Operation::Min)]
    op: Operation,
    /// Comma-separated input array. Use `--values=-3,4` when it starts negative.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_value = "2,-3,4,1,0,-1,-1,5,6"
    )]
    values: Vec<i64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> sparse_table::Result<()> {
    let Args {
        left, right, op, ..
    } = *args;
    let start = std::time::Instant::now();
    let table = SparseTable::new(&args.values, op)?;
    log::info!("built {} elements in {:?}", table.len(), start.elapsed());

    let name = op.name();
    println!(
        "{}{} value between [{left}, {right}] = {}",
        name[..1].to_uppercase(),
        &name[1..],
        table.query(left, right)?
    );
    if op.supports_index_query() {
        println!(
            "Index of {name} value between [{left}, {right}] = {}",
            table.query_index(left, right)?
        );
    }
    Ok(())
}
