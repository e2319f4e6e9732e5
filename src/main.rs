use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, trace};
use rdepict::{run, Config, Error};

/// Render the SMILES column of a tab-separated file to images, one call to
/// the conversion tool per row. Flags override values from `--config`, which
/// override the built-in defaults.
#[derive(Parser)]
struct Cli {
    /// TOML file providing any of the options below.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The tab-separated input file. [default: smiles.txt]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// The first row to convert, counting the header as row 0. [default: 1]
    #[arg(short = 's', long)]
    row_start: Option<usize>,

    /// One past the last row to convert. [default: 143]
    #[arg(short = 'e', long)]
    row_end: Option<usize>,

    /// The column naming the output directory in the header and holding the
    /// SMILES in every other row. [default: 16]
    #[arg(long)]
    column: Option<usize>,

    /// The conversion program. [default: obabel]
    #[arg(short, long)]
    tool: Option<String>,

    /// Extension of the generated images. [default: png]
    #[arg(short, long)]
    format: Option<String>,

    /// Where to create the output directory. Defaults to the current
    /// directory.
    #[arg(short, long)]
    output_root: Option<PathBuf>,

    /// Print the commands without running them or creating the output
    /// directory.
    #[arg(short = 'n', long)]
    dry_run: bool,
}

impl Cli {
    fn into_config(self) -> Result<Config, Error> {
        let mut config = match &self.config {
            Some(path) => {
                trace!("loading config from {}", path.display());
                Config::load(path)?
            }
            None => Config::default(),
        };
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(row_start) = self.row_start {
            config.row_start = row_start;
        }
        if let Some(row_end) = self.row_end {
            config.row_end = row_end;
        }
        if let Some(column) = self.column {
            config.column = column;
        }
        if let Some(tool) = self.tool {
            config.tool = tool;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.output_root.is_some() {
            config.output_root = self.output_root;
        }
        config.dry_run |= self.dry_run;
        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let res = cli
        .into_config()
        .and_then(|config| run(&config, io::stdout().lock()));
    match res {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
