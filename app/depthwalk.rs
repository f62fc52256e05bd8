//! Command-line interface for depthwalk.
//!
//! Walks a directory tree and prints the paths it finds, one per line, NUL
//! separated, or as a JSON array.

use clap::{Parser, ValueEnum};
use depthwalk::output::{self, OutputFormat as PathFormat};
use depthwalk::select::{SelectAny, SelectGlob, Selector, select_dots, select_vcs};
use depthwalk::{WalkBuilder, WalkError};
use std::path::PathBuf;
use std::process::exit;

/// depthwalk — depth-first directory listing
#[derive(Parser)]
#[command(name = "depthwalk", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    format: OutputFormat,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Yield directories after their contents
    #[arg(long)]
    post_order: bool,

    /// Include the root directory itself
    #[arg(long)]
    include_root: bool,

    /// Leave directories out of the output (they are still descended into)
    #[arg(long)]
    no_dirs: bool,

    /// Follow symlinks to directories
    #[arg(long)]
    follow_links: bool,

    /// Sort each directory by name
    #[arg(short, long)]
    sort: bool,

    /// Reverse the sort order
    #[arg(short, long)]
    reverse: bool,

    /// Print paths relative to the root
    #[arg(long)]
    relative: bool,

    /// Only list files whose names match this glob (can be repeated)
    #[arg(short = 'g', long = "glob")]
    globs: Vec<String>,

    /// Skip version control directories and files
    #[arg(long)]
    exclude_vcs: bool,

    /// Skip names beginning with a period
    #[arg(long)]
    exclude_dots: bool,

    /// Stop at the first unreadable directory instead of skipping it
    #[arg(long)]
    strict: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Lines,
    Null,
    Json,
}

impl From<OutputFormat> for PathFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Lines => PathFormat::Lines,
            OutputFormat::Null => PathFormat::Null,
            OutputFormat::Json => PathFormat::Json,
        }
    }
}

impl Cli {
    fn into_builder(self) -> Result<WalkBuilder, WalkError> {
        let mut builder = match self.root {
            Some(root) => WalkBuilder::new(root),
            None => WalkBuilder::current_dir(),
        }
        .topdown(!self.post_order)
        .include_root(self.include_root)
        .dirs(!self.no_dirs)
        .follow_links(self.follow_links)
        .sort(self.sort)
        .sort_reverse(self.reverse)
        .return_relative(self.relative);

        if !self.globs.is_empty() {
            let mut any = SelectAny::default();
            for pattern in &self.globs {
                any = any.or(SelectGlob::new(pattern)?);
            }
            builder = builder.filter_files(any);
        }

        let exclude = match (self.exclude_vcs, self.exclude_dots) {
            (true, true) => Some(select_vcs().or(select_dots())),
            (true, false) => Some(select_vcs()),
            (false, true) => Some(SelectAny::default().or(select_dots())),
            (false, false) => None,
        };
        if let Some(exclude) = exclude {
            builder = builder.exclude(exclude);
        }

        builder = if self.strict {
            builder.on_error(Err)
        } else {
            builder.on_error(|e| {
                eprintln!("Warning: {}", e);
                Ok(())
            })
        };
        Ok(builder)
    }
}

fn main() {
    let cli = Cli::parse();
    let format = PathFormat::from(cli.format);
    let pretty = cli.pretty;
    let output_file = cli.output.clone();

    if let Err(e) = run(cli, format, pretty, output_file) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(
    cli: Cli,
    format: PathFormat,
    pretty: bool,
    output_file: Option<PathBuf>,
) -> Result<(), WalkError> {
    let walk = cli.into_builder()?.build()?;
    let paths = walk.collect::<Result<Vec<_>, _>>()?;
    match output_file {
        Some(file) => output::write_paths_to_file(&paths, format, file, pretty),
        None => {
            let out = output::format_paths(&paths, format, pretty)?;
            if format == PathFormat::Json {
                println!("{}", out);
            } else {
                print!("{}", out);
            }
            Ok(())
        }
    }
}
