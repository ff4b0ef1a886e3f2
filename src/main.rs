use clap::Parser;
use log::error;
use std::{error::Error, path::PathBuf, process};

use salary_totals::total_salary;

/// Prints the total and average salary of a headerless CSV file
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// CSV file with an id in the first column and a salary in the second
    file: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let totals = match total_salary(&args.file) {
        Ok(totals) => totals,
        Err(err) => {
            error!("failed to total salaries, err={}", err);
            process::exit(1);
        }
    };

    let mut wtr = csv::WriterBuilder::new().from_writer(std::io::stdout());
    wtr.serialize(totals)?;
    wtr.flush()?;

    Ok(())
}
