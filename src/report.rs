use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::convert::ConvertError;

const RULE_WIDTH: usize = 80;

/// What happened to a single work row
#[derive(Debug)]
pub enum Outcome {
    Created,
    /// the command was only printed
    DryRun,
    Failed(ConvertError),
}

#[derive(Debug)]
pub struct RowReport {
    /// file row index, which is also the number in the output file name
    pub row: usize,
    pub output: PathBuf,
    pub outcome: Outcome,
}

/// The result of a whole batch, one [RowReport] per processed row in file
/// order.
#[derive(Debug)]
pub struct Summary {
    pub directory: PathBuf,
    pub rows: Vec<RowReport>,
}

impl Summary {
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Created))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    fn count(&self, f: impl Fn(&Outcome) -> bool) -> usize {
        self.rows.iter().filter(|r| f(&r.outcome)).count()
    }

    pub fn write(&self, mut out: impl Write) -> io::Result<()> {
        let skipped = self.rows.len() - self.created() - self.failed();
        write!(
            out,
            "{} rows processed into {}: {} created, {} failed",
            self.rows.len(),
            self.directory.display(),
            self.created(),
            self.failed(),
        )?;
        if skipped > 0 {
            write!(out, ", {skipped} dry run")?;
        }
        writeln!(out)
    }
}

fn rule(out: &mut impl Write, c: char) -> io::Result<()> {
    writeln!(out, "{}", c.to_string().repeat(RULE_WIDTH))
}

/// the argument list, printed before anything is run
pub fn write_command(out: &mut impl Write, args: &[String]) -> io::Result<()> {
    writeln!(out, "{args:?}")
}

/// report the outcome of converting file row `row` into `output`, where
/// `name` is the header field naming the output directory
pub fn write_outcome(
    out: &mut impl Write,
    outcome: &Outcome,
    output: &Path,
    row: usize,
    name: &str,
) -> io::Result<()> {
    let output = output.display();
    match outcome {
        Outcome::Created => {
            writeln!(out, "{output} created row number: {row} Column: {name}")?;
            rule(out, '-')
        }
        Outcome::DryRun => {
            writeln!(out, "{output} dry run row number: {row} Column: {name}")?;
            rule(out, '-')
        }
        Outcome::Failed(e) => {
            rule(out, '*')?;
            writeln!(out, "{output} failed  row number: {row} Column: {name}")?;
            writeln!(out, "{e}")?;
            rule(out, '*')
        }
    }
}
