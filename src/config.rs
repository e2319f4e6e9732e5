use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// The tab-separated file to read. Its first row is a header naming the
    /// output directory, the following rows hold one SMILES each.
    pub input: PathBuf,

    /// The first file row to convert, counting the header as row 0.
    pub row_start: usize,

    /// One past the last file row to convert.
    pub row_end: usize,

    /// The column holding the output directory name in the header and the
    /// SMILES string in every other row.
    pub column: usize,

    /// The conversion program, invoked as `tool -:<smiles> -O <output>`.
    pub tool: String,

    /// Extension of the generated images. The tool picks its output format
    /// from it.
    pub format: String,

    /// Directory in which to create the output directory. Defaults to the
    /// working directory.
    pub output_root: Option<PathBuf>,

    /// Print the commands without creating anything or running the tool.
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("smiles.txt"),
            row_start: 1,
            row_end: 143,
            column: 16,
            tool: "obabel".to_owned(),
            format: "png".to_owned(),
            output_root: None,
            dry_run: false,
        }
    }
}

impl Config {
    /// load a [Config] from the TOML file at `path`. keys missing from the
    /// file keep their default values
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let s = read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_owned(),
            source,
        })?;
        toml::from_str(&s).map_err(|source| Error::ParseConfig {
            path: path.to_owned(),
            source,
        })
    }

    /// the directory holding the images for a header named `name`
    pub fn output_dir(&self, name: &str) -> PathBuf {
        match &self.output_root {
            Some(root) => root.join(name),
            None => PathBuf::from(name),
        }
    }

    /// the image path for file row `row`, `{dir}/{name}_{row}.{format}`
    pub fn output_path(&self, name: &str, row: usize) -> PathBuf {
        self.output_dir(name)
            .join(format!("{name}_{row}.{}", self.format))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.input, PathBuf::from("smiles.txt"));
        assert_eq!((c.row_start, c.row_end, c.column), (1, 143, 16));
        assert_eq!(c.tool, "obabel");
        assert!(!c.dry_run);
    }

    #[test]
    fn output_paths() {
        let mut c = Config::default();
        assert_eq!(
            c.output_path("structure", 1),
            PathBuf::from("structure/structure_1.png")
        );

        c.output_root = Some(PathBuf::from("/tmp/out"));
        c.format = "svg".to_owned();
        assert_eq!(
            c.output_path("structure", 142),
            PathBuf::from("/tmp/out/structure/structure_142.svg")
        );
    }

    #[test]
    fn load_partial() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "input = \"data/chembl.tsv\"").unwrap();
        writeln!(f, "row_end = 10").unwrap();
        writeln!(f, "tool = \"/usr/local/bin/obabel\"").unwrap();

        let got = Config::load(f.path()).unwrap();
        let want = Config {
            input: PathBuf::from("data/chembl.tsv"),
            row_end: 10,
            tool: "/usr/local/bin/obabel".to_owned(),
            ..Config::default()
        };
        assert_eq!(got, want);
    }

    #[test]
    fn load_errors() {
        let err = Config::load("/nonexistent/rdepict.toml").unwrap_err();
        assert!(matches!(err, Error::ReadConfig { .. }));

        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "row_start = \"one\"").unwrap();
        let err = Config::load(f.path()).unwrap_err();
        assert!(matches!(err, Error::ParseConfig { .. }));
    }
}
