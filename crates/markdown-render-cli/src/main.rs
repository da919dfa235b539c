use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use markdown_render_config::Config;
use markdown_render_engine::{PageTemplate, io, render, title_from_markdown};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

/// Convert markdown documents into standalone HTML pages.
///
/// Settings come from the command line first, then the config file
/// (~/.config/markdown-render/config.toml unless --config is given).
#[derive(Debug, Parser)]
#[command(name = "markdown-render", version, about)]
struct Cli {
    /// Markdown file, or directory of markdown files, to render
    input: Option<PathBuf>,

    /// Output file (stdout if omitted), or output directory for directory input
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Page title (defaults to the first `#` heading, then the file name)
    #[arg(long)]
    title: Option<String>,

    /// Stylesheet href to link from each page
    #[arg(long, value_name = "HREF")]
    stylesheet: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit only the converted fragment, without the page shell
    #[arg(long)]
    fragment: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Effective settings after merging the command line over the config file.
#[derive(Debug)]
struct Settings {
    input: PathBuf,
    output: Option<PathBuf>,
    title: Option<String>,
    stylesheet: Option<String>,
    fragment: bool,
}

impl Settings {
    fn resolve(cli: Cli, config: Config) -> Result<Self> {
        let Some(input) = cli.input.or(config.source) else {
            bail!(
                "No input provided and no `source` in the config file ({})",
                Config::config_path().display()
            );
        };

        Ok(Self {
            input,
            output: cli.output.or(config.output),
            title: cli.title.or(config.title),
            stylesheet: cli.stylesheet.or(config.stylesheet),
            fragment: cli.fragment,
        })
    }

    fn page_for(&self, source: &Path, markdown: &str) -> PageTemplate {
        let title = self
            .title
            .clone()
            .or_else(|| title_from_markdown(markdown))
            .unwrap_or_else(|| {
                source
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default()
            });

        let page = PageTemplate::new(title);
        match &self.stylesheet {
            Some(href) => page.with_stylesheet(href.clone()),
            None => page,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found: {}", path.display())),
        None => {
            let config = Config::load()?;
            if config.is_some() {
                log::info!("Using config file {}", Config::config_path().display());
            }
            Ok(config.unwrap_or_default())
        }
    }
}

/// Reads one markdown file and produces either a page or a bare fragment.
fn convert_file(source: &Path, settings: &Settings) -> Result<String> {
    let markdown =
        io::read_file(source).with_context(|| format!("Failed to read {}", source.display()))?;
    let fragment = render(&markdown);

    if settings.fragment {
        return Ok(fragment);
    }
    Ok(settings.page_for(source, &markdown).wrap(&fragment))
}

fn convert_single(settings: &Settings) -> Result<()> {
    let html = convert_file(&settings.input, settings)?;

    match &settings.output {
        Some(output) => {
            io::write_file(output, &html)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            log::info!(
                "Rendered {} -> {}",
                settings.input.display(),
                output.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

fn convert_directory(settings: &Settings) -> Result<()> {
    let Some(output_root) = &settings.output else {
        bail!(
            "An output directory (--output) is required when rendering the directory {}",
            settings.input.display()
        );
    };

    let files = io::scan_markdown_files(&settings.input)?;
    if files.is_empty() {
        log::warn!("No markdown files found in {}", settings.input.display());
    }

    for source in &files {
        let html = convert_file(source, settings)?;
        let destination = io::output_path_for(&settings.input, source, output_root)?;
        io::write_file(&destination, &html)
            .with_context(|| format!("Failed to write {}", destination.display()))?;
        log::info!("Rendered {} -> {}", source.display(), destination.display());
    }

    log::info!(
        "Rendered {} file(s) into {}",
        files.len(),
        output_root.display()
    );
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(cli, config)?;
    log::debug!("Effective settings: {settings:?}");

    if settings.input.is_dir() {
        convert_directory(&settings)
    } else {
        convert_single(&settings)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
