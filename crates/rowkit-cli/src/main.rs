use anyhow::Result;
use clap::Parser;
use rowkit_codegen::{Config, Diagnostic, Generator, Severity};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rowkit")]
#[command(about = "rowkit - generate storage accessors for #[db] annotated structs")]
#[command(version)]
struct Cli {
    /// Directory to scan
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// File name that holds record declarations; may be repeated
    #[arg(long = "model-file", value_name = "NAME")]
    model_files: Vec<String>,

    /// Directory name to leave out of the scan; may be repeated
    #[arg(long = "skip-dir", value_name = "NAME")]
    skip_dirs: Vec<String>,

    /// Log every scanned and written file
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::new().root_dir(&self.root);

        if !self.model_files.is_empty() {
            config = config.model_files(self.model_files.iter().cloned());
        }

        if !self.skip_dirs.is_empty() {
            config = config.skip_dirs(self.skip_dirs.iter().cloned());
        }

        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "rowkit=debug" } else { "rowkit=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    let mut generator = Generator::new(cli.config()).log(report);
    generator.run()?;

    info!("Generated code under {}", cli.root.display());
    Ok(())
}

fn report(diagnostic: &Diagnostic) {
    let location = diagnostic
        .path
        .as_ref()
        .map(|path| format!("{}: ", path.display()))
        .unwrap_or_default();

    match diagnostic.severity {
        Severity::Warning => warn!("{location}{}", diagnostic.message),
        Severity::Error => error!("{location}{}", diagnostic.message),
    }
}
