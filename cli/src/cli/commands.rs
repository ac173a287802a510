// cli/src/cli/commands.rs

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "intake-cli")]
#[command(version = "0.1.0")]
#[command(about = "Patient intake form with cached reference data")]
pub struct CliArgs {
    /// Configuration file (TOML or YAML). Defaults to ./intake.toml when present.
    #[arg(long, global = true, value_name = "PATH", env = "INTAKE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<IntakeCommand>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum IntakeCommand {
    /// Print reference data (loaded from cache when available)
    Refs {
        #[arg(value_enum, default_value_t = RefsTarget::All)]
        target: RefsTarget,
    },
    /// Show the doctors left after applying the form's filters
    Doctors(DoctorsArgs),
    /// Fill and submit the form in one go
    Submit(SubmitArgs),
    /// Fill the form interactively (default when no command is given)
    Fill,
    /// Manage the reference cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefsTarget {
    Cities,
    Specialities,
    Doctors,
    All,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum CacheAction {
    /// Remove cached cities, specialities and doctors
    Clear,
}

#[derive(Args, Debug, Default, PartialEq)]
pub struct DoctorsArgs {
    /// Birthday as dd/mm/yyyy or yyyy-mm-dd
    #[arg(long)]
    pub birthday: Option<String>,
    #[arg(long)]
    pub sex: Option<String>,
    /// City id
    #[arg(long)]
    pub city: Option<String>,
    /// Speciality id
    #[arg(long, alias = "specialty")]
    pub speciality: Option<String>,
}

#[derive(Args, Debug, Default, PartialEq)]
pub struct SubmitArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// Birthday as dd/mm/yyyy or yyyy-mm-dd
    #[arg(long)]
    pub birthday: Option<String>,
    #[arg(long)]
    pub sex: Option<String>,
    /// City id
    #[arg(long)]
    pub city: Option<String>,
    /// Speciality id
    #[arg(long, alias = "specialty")]
    pub speciality: Option<String>,
    /// Doctor id
    #[arg(long)]
    pub doctor: Option<String>,
    /// Email address or mobile number
    #[arg(long)]
    pub contact: Option<String>,
}
