use std::fs;
use std::path::{Path, PathBuf};

use primer_common::error::RosterError;
use rand::Rng;
use tracing::debug;

/// Job titles read from a newline-delimited text file, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTitles {
    titles: Vec<String>,
}

impl JobTitles {
    /// Reads every line of `path` as one title.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let titles = Self::parse(&text, path)?;
        debug!(count = titles.len(), path = %path.display(), "job titles loaded");
        Ok(titles)
    }

    /// Splits `text` into titles, one per line.
    pub fn from_text(text: &str) -> Result<Self, RosterError> {
        Self::parse(text, Path::new("<text>"))
    }

    fn parse(text: &str, origin: &Path) -> Result<Self, RosterError> {
        let titles: Vec<String> = text.lines().map(String::from).collect();
        if titles.is_empty() {
            return Err(RosterError::NoTitles {
                path: PathBuf::from(origin),
            });
        }
        Ok(Self { titles })
    }

    /// Picks one title uniformly at random.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &str {
        let idx = rng.random_range(0..self.titles.len());
        &self.titles[idx]
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
