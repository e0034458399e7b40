/*!
 * Configuration handling for gut
 */

use std::env;
use std::io::IsTerminal;
use std::path::{Component, Path, PathBuf};

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::error::{GutError, Result};
use crate::lister::ensure_directory;

/// When to emit colored output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and NO_COLOR is unset (default)
    Auto,
    /// Always emit color escapes
    Always,
    /// Never emit color escapes
    Never,
}

impl Default for ColorChoice {
    fn default() -> Self {
        Self::Auto
    }
}

impl ColorChoice {
    /// Decide whether color is on, given what we know about the terminal
    pub fn enabled(self, is_terminal: bool, no_color: bool) -> bool {
        match self {
            Self::Auto => is_terminal && !no_color,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Command-line arguments for gut
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "gut",
    version = env!("CARGO_PKG_VERSION"),
    about = "ls replacement with colorized, column-aligned output",
    long_about = "Lists one directory with permissions, size, owner, modification time and name. Directories come first, symlinks show their resolved target."
)]
pub struct Args {
    /// Directory to list
    #[clap(default_value = ".")]
    pub path: String,

    /// Regular expression to search for in file and directory names
    #[clap(short = 'x', long = "regexp", default_value = "")]
    pub regexp: String,

    /// When to use colors
    #[clap(long, value_enum, default_value_t = ColorChoice::default())]
    pub color: ColorChoice,

    /// Print a header line with column titles
    #[clap(long)]
    pub header: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Absolute path of the directory to list
    pub target_dir: PathBuf,

    /// Filter pattern (empty means no filtering)
    pub pattern: String,

    /// Whether output is colored
    pub color: bool,

    /// Whether to print the column header
    pub header: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| GutError::path(".", e))?;
        let color = args.color.enabled(
            std::io::stdout().is_terminal(),
            env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        );

        Ok(Self {
            target_dir: absolute_path(&cwd, Path::new(&args.path)),
            pattern: args.regexp,
            color,
            header: args.header,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure_directory(&self.target_dir)
    }
}

/// Join `path` onto `base` and drop `.`/`..` components lexically
pub fn absolute_path(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
