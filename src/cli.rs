use crate::core::Gender;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "wellscore",
    version,
    about = "Wellness score calculator for sleep, stress, and activity"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Eval(EvalArgs),
    Classify(ClassifyArgs),
    Advice(AdviceArgs),
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct EvalArgs {
    #[arg(long)]
    pub sleep: Option<f64>,
    #[arg(long)]
    pub stress: Option<f64>,
    #[arg(long)]
    pub activity: Option<f64>,
    #[arg(long)]
    pub gender: Option<Gender>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub score: i32,
}

#[derive(Debug, Args)]
pub struct AdviceArgs {
    #[arg(long)]
    pub gender: Option<Gender>,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}
