//! Adaptive Play Binary
//!
//! Builds the unperturbed and perturbed chains for a stage game and
//! reports recurrent classes and stochastically stable states.

use adaptive_play::analysis::Markov;
use adaptive_play::config::Game;
use adaptive_play::config::Parameters;
use adaptive_play::pipeline::Experiment;
use adaptive_play::*;
use clap::Parser;
use colored::Colorize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "JSON parameter file; flags below override it")]
    config: Option<std::path::PathBuf>,
    #[arg(long, short = 'm', help = "memory length")]
    memory: Option<usize>,
    #[arg(long, short = 'k', help = "sample size")]
    sample: Option<usize>,
    #[arg(long, short = 'e', help = "experimentation probability")]
    epsilon: Option<Probability>,
    #[arg(long, value_enum, help = "payoff preset")]
    game: Option<Game>,
    #[arg(long, help = "actions per player (random games)")]
    actions: Option<usize>,
    #[arg(long, default_value_t = SEED, help = "seed for random payoffs and simulation")]
    seed: u64,
    #[arg(long, help = "also simulate this many periods of the perturbed chain")]
    simulate: Option<usize>,
    #[arg(long, help = "write the report as JSON")]
    output: Option<std::path::PathBuf>,
    #[arg(long, help = "write both transition matrices as JSON")]
    matrices: Option<std::path::PathBuf>,
}

impl Args {
    fn parameters(&self) -> anyhow::Result<Parameters> {
        let mut parameters = match self.config {
            Some(ref path) => Parameters::load(path)?,
            None => Parameters::default(),
        };
        if let Some(game) = self.game {
            let actions = self.actions.unwrap_or(parameters.num_act);
            parameters.payoffs = game.payoffs(actions, self.seed);
            parameters.num_act = parameters.payoffs.num_act();
        }
        parameters.m = self.memory.unwrap_or(parameters.m);
        parameters.k = self.sample.unwrap_or(parameters.k);
        parameters.epsilon = self.epsilon.unwrap_or(parameters.epsilon);
        Ok(parameters)
    }
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let experiment = Experiment::new(args.parameters()?)?;
    let unperturbed = experiment.unperturbed()?;
    let perturbed = experiment.perturbed()?;
    let mut report = experiment.analyze(&Markov, &unperturbed, &perturbed)?;
    if let Some(periods) = args.simulate {
        report.simulated = Some(experiment.simulate(&perturbed, periods, args.seed)?);
    }
    if let Some(ref path) = args.matrices {
        let json = serde_json::json!({
            "unperturbed": unperturbed,
            "perturbed": perturbed,
        });
        std::fs::write(path, serde_json::to_string(&json)?)?;
        log::info!("{:<32}{:<16}", "wrote matrices", path.display());
    }
    println!("{}", "recurrent classes (unperturbed)".bold());
    report.recurrent.iter().for_each(|e| println!("{}", e));
    println!("{}", "stochastically stable states (perturbed)".bold());
    match report.stable.is_empty() {
        true => println!("{}", "none above threshold".yellow()),
        false => report.stable.iter().for_each(|e| println!("{}", e.to_string().green())),
    }
    if let Some(ref visited) = report.simulated {
        println!("{}", "frequently visited (simulated)".bold());
        visited.iter().for_each(|e| println!("{}", e));
    }
    if let Some(ref path) = args.output {
        std::fs::write(path, report.to_json())?;
        log::info!("{:<32}{:<16}", "wrote report", path.display());
    }
    Ok(())
}
