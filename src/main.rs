use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use simple_git_ver::config::{self, Backend, Settings};
use simple_git_ver::git::{describe_version, describer_for};
use simple_git_ver::ui::{self, OutputFormat};
use simple_git_ver::{derive_version, VersionResult};

#[derive(clap::Parser)]
#[command(
    name = "simple-git-ver",
    version,
    about = "Derive a four-part version from git describe output"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Tag prefix used to filter and parse tags")]
    prefix: Option<String>,

    #[arg(
        long,
        conflicts_with = "no_auto_increment",
        help = "Add commits since the tag to the build number"
    )]
    auto_increment: bool,

    #[arg(long, help = "Keep the build number exactly as tagged")]
    no_auto_increment: bool,

    #[arg(long, value_name = "PATH", help = "Path to the git executable")]
    git: Option<String>,

    #[arg(long, value_enum, help = "How to query the repository")]
    backend: Option<Backend>,

    #[arg(long, help = "Do not mark modified working trees as dirty")]
    no_dirty: bool,

    #[arg(long, default_value = ".", help = "Repository directory")]
    repo: PathBuf,

    #[arg(long, value_name = "TEXT", help = "Parse this describe output instead of running git")]
    raw: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    format: OutputFormat,

    #[arg(long, help = "Print the tagged version instead of the final one (version format)")]
    base: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

impl Args {
    /// Apply command-line overrides on top of file settings
    fn merge_into(&self, mut settings: Settings) -> Settings {
        if let Some(prefix) = &self.prefix {
            settings.tag_prefix = prefix.clone();
        }
        if self.auto_increment {
            settings.auto_increment_build_number = true;
        }
        if self.no_auto_increment {
            settings.auto_increment_build_number = false;
        }
        if let Some(git) = &self.git {
            settings.git_exe = git.clone();
        }
        if let Some(backend) = self.backend {
            settings.backend = backend;
        }
        if self.no_dirty {
            settings.dirty = false;
        }
        settings
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let settings = args.merge_into(config::load_config(args.config.as_deref())?);
    let result = resolve(args, &settings)?;

    println!("{}", ui::render(&result, args.format, args.base)?);
    Ok(())
}

fn resolve(args: &Args, settings: &Settings) -> Result<VersionResult> {
    if let Some(raw) = &args.raw {
        tracing::debug!("Parsing describe output given on the command line");
        return Ok(derive_version(
            raw,
            &settings.tag_prefix,
            settings.auto_increment_build_number,
        )?);
    }

    if args.verbose {
        ui::display_status(&format!(
            "Describing {} with tags matching '{}*'",
            args.repo.display(),
            settings.tag_prefix
        ));
    }
    let describer = describer_for(settings, &args.repo)?;
    Ok(describe_version(describer.as_ref(), settings)?)
}
