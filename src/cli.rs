use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stackplan")]
#[command(version)]
#[command(about = "Compile environment profiles into resource-provisioning plans", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile a plan for an environment
    Compile(CompileArgs),

    /// Load and resolve an environment without emitting a plan
    Validate(ValidateArgs),

    /// List the known environments in the config directory
    Environments {
        /// Config directory holding environment documents
        #[arg(short, long)]
        config_dir: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser)]
pub struct CompileArgs {
    /// Environment to compile
    #[arg(default_value = "dev")]
    pub environment: String,

    /// Config directory holding environment documents
    /// (default: ./environments, then ~/.config/stackplan/environments)
    #[arg(short, long)]
    pub config_dir: Option<String>,

    /// Write the JSON plan to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Environment to validate
    #[arg(default_value = "dev")]
    pub environment: String,

    /// Config directory holding environment documents
    #[arg(short, long)]
    pub config_dir: Option<String>,
}
