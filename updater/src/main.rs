use clap::{Parser, Subcommand};
use estado::{ReadmeDoc, ReportDoc, TestRunner, UpdaterConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "updater")]
#[command(about = "Runs the test suite and patches the outcome into README.md")]
struct Cli {
    /// Load defaults from a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Readme to patch (overrides config)
    #[arg(long, global = true)]
    readme: Option<PathBuf>,
    /// Report history log (overrides config)
    #[arg(long, global = true)]
    report: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the test command and record the outcome
    Run {
        /// Skip appending the outcome to the report history
        #[arg(long)]
        no_report: bool,
        /// Test command to run (overrides the configured one)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        test_command: Vec<String>,
    },
    /// Patch the readme from the latest report entry without running tests
    Sync,
    /// Show the latest status and historical counts
    Status,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => UpdaterConfig::from_file(path)?,
        None => UpdaterConfig::default(),
    };
    if let Some(readme) = cli.readme {
        config.readme_path = readme;
    }
    if let Some(report) = cli.report {
        config.report_path = report;
    }

    match cli.command {
        Commands::Run {
            no_report,
            test_command,
        } => {
            if !test_command.is_empty() {
                config.test_command = test_command;
            }
            config.validate()?;
            run(&config, no_report)?;
        }
        Commands::Sync => {
            config.validate()?;
            sync(&config)?;
        }
        Commands::Status => {
            config.validate()?;
            show_status(&config)?;
        }
    }

    Ok(())
}

fn run(config: &UpdaterConfig, no_report: bool) -> Result<(), Box<dyn std::error::Error>> {
    let runner = TestRunner::new(config.test_command.clone())?;
    let status = runner.run()?;
    println!("{}", status);

    let mut readme = ReadmeDoc::load(&config.readme_path)?;
    readme.set_status(&status);
    readme.store(&config.readme_path)?;
    info!(path = %config.readme_path.display(), "readme updated");

    if !no_report {
        let mut report = ReportDoc::load(&config.report_path)?;
        report.record(&status);
        report.store(&config.report_path)?;
        info!(path = %config.report_path.display(), "report updated");
    }

    Ok(())
}

fn sync(config: &UpdaterConfig) -> Result<(), Box<dyn std::error::Error>> {
    let report = ReportDoc::load(&config.report_path)?;
    let status = report.last_status()?;

    let mut readme = ReadmeDoc::load(&config.readme_path)?;
    readme.set_status(&status);
    readme.store(&config.readme_path)?;

    println!("Readme actualizado: {}", status);
    Ok(())
}

fn show_status(config: &UpdaterConfig) -> Result<(), Box<dyn std::error::Error>> {
    let report = ReportDoc::load(&config.report_path)?;

    match report.last_status() {
        Ok(status) => println!("Último estado: {}", status),
        Err(estado::ReportError::NoMarker) => println!("Sin resultados registrados."),
        Err(e) => return Err(e.into()),
    }

    let counts = report.counts();
    println!(
        "Test realizados hasta ahora: {} ({} correctos, {} fallidos)",
        counts.total, counts.passed, counts.failed
    );

    Ok(())
}
