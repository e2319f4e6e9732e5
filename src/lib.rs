use std::io::Write;

use log::{debug, info, warn};

pub mod config;
pub mod convert;
pub mod error;
pub mod report;
pub mod table;

pub use config::Config;
pub use convert::{ConvertCommand, ConvertError};
pub use error::Error;
pub use report::{Outcome, RowReport, Summary};
pub use table::{Table, WorkRow};

use report::{write_command, write_outcome};

/// convert every work row of `config.input` into an image, writing the
/// per-row report to `out`.
///
/// a failing conversion is recorded in the returned [Summary] and the batch
/// moves on to the next row. only problems with the input table, the output
/// directory, or `out` itself abort the run
pub fn run(config: &Config, mut out: impl Write) -> Result<Summary, Error> {
    info!("reading {}", config.input.display());
    let table = Table::open(&config.input, config.column)?;
    let name = table.name().to_owned();

    let directory = config.output_dir(&name);
    if config.dry_run {
        info!("dry run, not creating {}", directory.display());
    } else if !directory.exists() {
        std::fs::create_dir_all(&directory).map_err(|source| {
            Error::CreateDir {
                path: directory.clone(),
                source,
            }
        })?;
        info!("created output directory {}", directory.display());
    }

    let mut rows = Vec::new();
    for row in table.work_rows(config.row_start..config.row_end) {
        let WorkRow { index, structure } = row?;
        let output = config.output_path(&name, index);
        let cmd = ConvertCommand::new(&config.tool, structure, &output);
        write_command(&mut out, &cmd.args())?;

        let outcome = if config.dry_run {
            Outcome::DryRun
        } else {
            match cmd.run() {
                Ok(()) => Outcome::Created,
                Err(e) => {
                    warn!("row {index}: {e}");
                    Outcome::Failed(e)
                }
            }
        };
        debug!("row {index} -> {}: {outcome:?}", output.display());
        write_outcome(&mut out, &outcome, &output, index, &name)?;

        rows.push(RowReport {
            row: index,
            output,
            outcome,
        });
    }

    let summary = Summary { directory, rows };
    summary.write(&mut out)?;
    info!(
        "finished {} rows: {} created, {} failed",
        summary.rows.len(),
        summary.created(),
        summary.failed()
    );
    Ok(summary)
}
