use std::path::PathBuf;

use lp_quicklook::{Sweep, SweepLoader};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "lp-quicklook", about = "Langmuir probe I-V sweep quick-look analysis")]
struct Opt {
    /// Path to the I-V sweep file (CSV/TSV, optionally gzipped)
    #[structopt(long)]
    path: Option<PathBuf>,
    /// Field delimiter (sniffed from the first line when omitted)
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Lowest probe bias to keep [V]
    #[structopt(short, long)]
    start: Option<f64>,
    /// Highest probe bias to keep [V]
    #[structopt(short, long)]
    end: Option<f64>,
    /// Print the result record as JSON
    #[structopt(long)]
    json: bool,
    /// Write the cleaned sweep to a CSV file
    #[structopt(long)]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let mut loader = SweepLoader::default();
    if let Some(arg) = opt.path {
        loader = loader.data_path(arg);
    }
    if let Some(arg) = opt.delimiter {
        loader = loader.delimiter(arg as u8);
    }
    if let Some(arg) = opt.start {
        loader = loader.start_voltage(arg);
    }
    if let Some(arg) = opt.end {
        loader = loader.end_voltage(arg);
    }

    let sweep = Sweep::prepare(loader.load()?);
    let result = sweep.analyze();
    if opt.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        result.summary();
    }
    if let Some(filename) = opt.csv {
        sweep.to_csv(filename)?;
    }

    Ok(())
}
