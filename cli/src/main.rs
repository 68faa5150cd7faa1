//! uswds-blocks CLI - decorate authored blocks into USWDS markup

mod http;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use uswds_blocks::render::to_json;
use uswds_blocks::{
    DecorateStats, Decorator, DirectoryLoader, JsonFormat, PageMetadata, ParseOptions,
    RenderOptions,
};

use crate::http::HttpLoader;

#[derive(Parser)]
#[command(name = "uswds-blocks")]
#[command(version)]
#[command(about = "Decorate authored content blocks into U.S. Web Design System markup", long_about = None)]
struct Cli {
    /// Input HTML page
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decorate every block on a page
    Decorate {
        /// Input HTML page ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        site: SiteArgs,

        /// Print decoration statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Decorate a single block element
    Block {
        /// File holding one block element ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        site: SiteArgs,
    },

    /// Show the records a block's decorator reads, as JSON
    Inspect {
        /// File holding one block element ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// JSON output style
        #[arg(long, value_enum, default_value = "pretty")]
        format: OutputStyle,
    },

    /// Split a header or footer fragment into sections, as JSON
    Sections {
        /// Fragment HTML file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Heading level that opens a section (1-6)
        #[arg(long, default_value = "2")]
        level: u8,

        /// JSON output style
        #[arg(long, value_enum, default_value = "pretty")]
        format: OutputStyle,
    },

    /// Decorate every HTML page in a directory
    Batch {
        /// Input directory
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        #[command(flatten)]
        site: SiteArgs,

        /// Write aggregated statistics as JSON to this file
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

/// Options shared by the decorating commands.
#[derive(Args, Clone, Default)]
struct SiteArgs {
    /// Directory holding header and footer fragments
    #[arg(long, value_name = "DIR", conflicts_with = "origin")]
    fragments: Option<PathBuf>,

    /// Site origin to fetch header and footer fragments from
    #[arg(long, value_name = "URL", env = "USWDS_BLOCKS_ORIGIN")]
    origin: Option<String>,

    /// Site name used in the generated copyright line
    #[arg(long)]
    site_name: Option<String>,

    /// Copyright year (current year if not specified)
    #[arg(long)]
    year: Option<i32>,

    /// Icons base path
    #[arg(long, value_name = "PATH")]
    icons: Option<String>,

    /// Prepend the government banner when the page has none
    #[arg(long)]
    banner: bool,

    /// Keep absolute preview and live links in fragments
    #[arg(long)]
    absolute_links: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputStyle {
    /// Indented JSON
    Pretty,
    /// Single-line JSON
    Compact,
}

impl From<OutputStyle> for JsonFormat {
    fn from(style: OutputStyle) -> Self {
        match style {
            OutputStyle::Pretty => JsonFormat::Pretty,
            OutputStyle::Compact => JsonFormat::Compact,
        }
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Decorate {
            input,
            output,
            site,
            stats,
        }) => cmd_decorate(&input, output.as_deref(), &site, stats),
        Some(Commands::Block { input, site }) => cmd_block(&input, &site),
        Some(Commands::Inspect { input, format }) => cmd_inspect(&input, format),
        Some(Commands::Sections {
            input,
            level,
            format,
        }) => cmd_sections(&input, level, format),
        Some(Commands::Batch {
            input,
            output,
            site,
            report,
        }) => cmd_batch(&input, &output, &site, report.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: decorate if input is provided
            if let Some(input) = cli.input {
                cmd_decorate(&input, None, &SiteArgs::default(), false)
            } else {
                println!("{}", "Usage: uswds-blocks <FILE>".yellow());
                println!("       uswds-blocks --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_input(input: &Path) -> io::Result<String> {
    if input.as_os_str() == "-" {
        let mut html = String::new();
        io::stdin().read_to_string(&mut html)?;
        Ok(html)
    } else {
        fs::read_to_string(input)
    }
}

fn build_decorator(site: &SiteArgs) -> Result<Decorator, Box<dyn std::error::Error>> {
    let mut options = RenderOptions::new().with_auto_banner(site.banner);
    if let Some(name) = &site.site_name {
        options = options.with_site_name(name);
    }
    if let Some(year) = site.year {
        options = options.with_copyright_year(year);
    }
    if let Some(icons) = &site.icons {
        options = options.with_icons_base(icons);
    }

    let decorator = Decorator::new()
        .with_options(options)
        .with_parse_options(ParseOptions::new().with_relative_links(!site.absolute_links));

    Ok(match (&site.fragments, &site.origin) {
        (Some(dir), _) => decorator.with_loader(DirectoryLoader::new(dir)),
        (None, Some(origin)) => decorator.with_loader(HttpLoader::new(origin)?),
        (None, None) => decorator,
    })
}

fn write_output(output: Option<&Path>, content: &str) -> io::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_decorate(input: &Path, output: Option<&Path>, site: &SiteArgs, stats: bool) -> CliResult {
    let html = read_input(input)?;
    let decorator = build_decorator(site)?;
    let result = decorator.decorate_page_with_stats(&html);

    write_output(output, &result.html)?;
    if stats {
        print_stats(&result.stats);
    }
    Ok(())
}

fn cmd_block(input: &Path, site: &SiteArgs) -> CliResult {
    let html = read_input(input)?;
    let decorator = build_decorator(site)?;
    println!("{}", decorator.decorate_block_html(&html)?);
    Ok(())
}

fn cmd_inspect(input: &Path, format: OutputStyle) -> CliResult {
    let html = read_input(input)?;
    let report = Decorator::new().inspect_block(&html)?;
    println!("{}", to_json(&report, format.into())?);
    Ok(())
}

fn cmd_sections(input: &Path, level: u8, format: OutputStyle) -> CliResult {
    let html = read_input(input)?;
    let decorator = Decorator::new().with_parse_options(ParseOptions::new().with_section_level(level));
    let sections = decorator.split_sections(&html);
    println!("{}", to_json(&sections, format.into())?);
    Ok(())
}

fn cmd_batch(input: &Path, output: &Path, site: &SiteArgs, report: Option<&Path>) -> CliResult {
    // Fragments default to the input directory itself
    let mut site = site.clone();
    if site.fragments.is_none() && site.origin.is_none() {
        site.fragments = Some(input.to_path_buf());
    }
    let skip = site.fragments.as_deref().map(fragment_files).unwrap_or_default();

    let pages = collect_pages(input, &skip)?;
    if pages.is_empty() {
        println!("{} no HTML pages in {}", "Nothing to do:".yellow(), input.display());
        return Ok(());
    }
    let decorator = build_decorator(&site)?;

    let pb = ProgressBar::new(pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut totals = DecorateStats::new();
    for page in &pages {
        let relative = page.strip_prefix(input)?;
        pb.set_message(relative.display().to_string());

        let html = fs::read_to_string(page)?;
        let result = decorator.decorate_page_with_stats(&html);
        totals.merge(&result.stats);

        let target = output.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, &result.html)?;
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    println!("\n{} {} pages", "Decorated".green().bold(), pages.len());
    print_stats(&totals);

    if let Some(path) = report {
        fs::write(path, serde_json::to_string_pretty(&totals)?)?;
        println!("{} {}", "Report saved to".green(), path.display());
    }
    Ok(())
}

/// Files the header and footer fragments resolve to under `dir`.
fn fragment_files(dir: &Path) -> Vec<PathBuf> {
    let loader = DirectoryLoader::new(dir);
    let metadata = PageMetadata::new();
    ["header", "footer"]
        .iter()
        .flat_map(|key| loader.candidates(&metadata.fragment_path(key)))
        .collect()
}

/// HTML pages under a directory, skipping fragment files and `skip`.
fn collect_pages(dir: &Path, skip: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let mut pages = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if is_page(&path) && !skip.contains(&path) {
                pages.push(path);
            }
        }
    }
    pages.sort();
    Ok(pages)
}

fn is_page(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".html") && !name.ends_with(".plain.html")
}

fn print_stats(stats: &DecorateStats) {
    eprintln!("{}", "Decoration Statistics".cyan().bold());
    eprintln!("{}", "─".repeat(40).dimmed());
    eprintln!("{}: {}", "Blocks".bold(), stats.block_count);
    eprintln!("{}: {}", "Decorated".bold(), stats.decorated.to_string().green());
    eprintln!("{}: {}", "Skipped".bold(), stats.skipped.to_string().yellow());
    eprintln!("{}: {}", "Failed".bold(), stats.failed.to_string().red());
    eprintln!("{}: {}", "Rows".bold(), stats.row_count);
    if !stats.unknown.is_empty() {
        eprintln!("{}: {}", "Unknown blocks".bold(), stats.unknown.join(", "));
    }
}

fn cmd_version() {
    println!("{} {}", "uswds-blocks".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("USWDS block decoration tool");
    println!();
    println!(
        "Blocks: {}",
        Decorator::new().registry().names().join(", ").dimmed()
    );
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_pages_skips_fragments() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nav")).unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("nav/about.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("footer.plain.html"), "<h2>Legal</h2>").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let pages = collect_pages(dir.path(), &[]).unwrap();
        let names: Vec<_> = pages
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![PathBuf::from("index.html"), PathBuf::from("nav/about.html")]
        );
    }

    #[test]
    fn test_collect_pages_skips_fragment_fallback_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nav")).unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("header.html"), "<h2>Brand</h2>").unwrap();
        fs::write(dir.path().join("footer.html"), "<h2>Legal</h2>").unwrap();
        fs::write(dir.path().join("nav/footer.html"), "<html></html>").unwrap();

        let pages = collect_pages(dir.path(), &fragment_files(dir.path())).unwrap();
        assert_eq!(
            pages,
            vec![dir.path().join("index.html"), dir.path().join("nav/footer.html")]
        );
    }

    #[test]
    fn test_build_decorator_options() {
        let site = SiteArgs {
            site_name: Some("Example Agency".to_string()),
            year: Some(2024),
            banner: true,
            ..Default::default()
        };
        let decorator = build_decorator(&site).unwrap();
        assert_eq!(decorator.options().site_name, "Example Agency");
        assert_eq!(decorator.options().copyright_year, Some(2024));
        assert!(decorator.options().auto_banner);
    }
}
