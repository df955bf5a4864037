use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use optiplan_model::{Model, Status};
use optiplan_solver::MicrolpSolver;

mod config;
mod problems;
mod report;

use config::Config;

#[derive(Parser)]
#[command(name = "optiplan")]
#[command(about = "Canned LP/MILP business-optimization demos", long_about = None)]
struct Cli {
    /// Path to the JSON settings file
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a demo problem, solve it, and report the results
    Solve {
        /// Which problem to run
        #[arg(value_enum)]
        problem: ProblemName,
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Skip writing the .lp artifact
        #[arg(long)]
        no_export: bool,
    },
    /// Write a demo problem as an .lp file without solving
    Export {
        /// Which problem to export
        #[arg(value_enum)]
        problem: ProblemName,
        /// Destination file (defaults to the configured DATA directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the loaded configuration
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProblemName {
    Factory,
    Advertising,
    All,
}

impl ProblemName {
    fn selection(self) -> &'static [ProblemName] {
        match self {
            ProblemName::Factory => &[ProblemName::Factory],
            ProblemName::Advertising => &[ProblemName::Advertising],
            ProblemName::All => &[ProblemName::Factory, ProblemName::Advertising],
        }
    }

    fn build(self) -> Result<Model, optiplan_model::ModelError> {
        match self {
            ProblemName::Factory => problems::factory_products(),
            ProblemName::Advertising => problems::advertisement_campaign(),
            ProblemName::All => unreachable!("selection() never yields All"),
        }
    }

    fn lp_file_name(self) -> &'static str {
        match self {
            ProblemName::Factory => "MaximisedProfit.lp",
            ProblemName::Advertising => "AdvertisementCampaign.lp",
            ProblemName::All => unreachable!("selection() never yields All"),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading {}: {}", cli.config.display(), e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Solve {
            problem,
            format,
            no_export,
        } => {
            let mut all_optimal = true;
            for &name in problem.selection() {
                if !solve_one(name, &config, format, no_export) {
                    all_optimal = false;
                }
            }
            if !all_optimal {
                std::process::exit(1);
            }
        }
        Commands::Export { problem, output } => {
            if output.is_some() && problem == ProblemName::All {
                eprintln!("Error: --output cannot be combined with 'all'");
                std::process::exit(1);
            }
            for &name in problem.selection() {
                let model = match name.build() {
                    Ok(m) => m,
                    Err(e) => {
                        eprintln!("Error building model: {}", e);
                        std::process::exit(1);
                    }
                };
                let path = match output.clone() {
                    Some(path) => path,
                    None => artifact_path(&config, name),
                };
                if let Err(e) = model.write_lp(&path) {
                    eprintln!("Error writing {}: {}", path.display(), e);
                    std::process::exit(1);
                }
                println!("Wrote {}", path.display());
            }
        }
        Commands::Info => {
            println!("{} v{}", config.app_name, config.version);
            println!("Environment: {}", config.env);
            println!("Source path: {}", config.paths.source_code.display());
            println!("Data path:   {}", config.paths.data.display());
            println!("Log path:    {}", config.paths.log.display());
            println!("Test path:   {}", config.paths.test.display());
        }
    }
}

/// Path for a problem's .lp artifact under the configured DATA directory,
/// creating the directory if needed.
fn artifact_path(config: &Config, name: ProblemName) -> PathBuf {
    if let Err(e) = std::fs::create_dir_all(&config.paths.data) {
        eprintln!(
            "Error creating {}: {}",
            config.paths.data.display(),
            e
        );
        std::process::exit(1);
    }
    config.paths.data.join(name.lp_file_name())
}

/// Build, export, and solve a single problem; report the outcome.
/// Returns whether the solve ended optimal.
fn solve_one(name: ProblemName, config: &Config, format: OutputFormat, no_export: bool) -> bool {
    let mut model = match name.build() {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error building model: {}", e);
            std::process::exit(1);
        }
    };

    if !no_export {
        let path = artifact_path(config, name);
        if let Err(e) = model.write_lp(&path) {
            eprintln!("Error writing {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let status = match model.solve(&MicrolpSolver::new()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error solving model: {}", e);
            std::process::exit(1);
        }
    };

    match format {
        OutputFormat::Text => report::print_text(&model),
        OutputFormat::Json => report::print_json(&model),
    }

    status == Status::Optimal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_formats_parse() {
        assert!(Cli::try_parse_from(["optiplan", "solve", "factory", "--format", "json"]).is_ok());
        assert!(Cli::try_parse_from(["optiplan", "solve", "all", "--format", "text"]).is_ok());
        assert!(Cli::try_parse_from(["optiplan", "solve", "advertising"]).is_ok());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["optiplan", "solve", "factory", "--format", "josn"]).is_err());
    }
}
