mod cli;
mod config;
mod core;

use anyhow::Result;
use clap::Parser;
use cli::{AdviceArgs, Cli, Commands, EvalArgs};
use core::report::{EvalReport, Status};
use core::{Gender, WellnessInput, advice, evaluate, report, score};

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval(args) => run_eval(args),
        Commands::Classify(args) => {
            println!("{}", score::classify(args.score));
            Ok(0)
        }
        Commands::Advice(args) => {
            print_advice(&args);
            Ok(0)
        }
        Commands::Init(args) => {
            if args.config.is_some() {
                eprintln!(
                    "warning: --config is ignored by `wellscore init`; writing ./wellscore.toml"
                );
            }

            let path = std::env::current_dir()?.join("wellscore.toml");
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn run_eval(args: EvalArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.config.as_deref(), &cwd)?;
    let cfg = loaded.config;

    let input = WellnessInput::new(
        args.sleep.unwrap_or(cfg.defaults.sleep_hours),
        args.stress.unwrap_or(cfg.defaults.stress_level),
        args.activity.unwrap_or(cfg.defaults.activity_minutes),
        args.gender.unwrap_or(cfg.defaults.gender),
        &cfg.limits,
    )?;

    let result = evaluate(&input);
    let gate = report::evaluate_gate(result.score, &cfg);
    let eval_report = EvalReport {
        input,
        result,
        min_score: cfg.general.min_score,
        gate,
    };

    let output_json = args.json || cfg.general.json;
    if output_json {
        let json_report = report::JsonReport::from(&eval_report);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        report::print_human(&eval_report);
    }

    if eval_report.gate.ok { Ok(0) } else { Ok(1) }
}

fn print_advice(args: &AdviceArgs) {
    let genders: &[Gender] = match args.gender {
        Some(Gender::Male) => &[Gender::Male],
        Some(Gender::Female) => &[Gender::Female],
        None => &[Gender::Male, Gender::Female],
    };

    for (idx, gender) in genders.iter().enumerate() {
        if idx > 0 {
            println!();
        }

        println!("{}", gender);
        for status in [Status::Excellent, Status::Good, Status::Fair, Status::Poor] {
            println!("  [{}] {}", status, advice::recommend(status, *gender));
        }
    }
}
