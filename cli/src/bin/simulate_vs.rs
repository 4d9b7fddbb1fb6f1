use clap::Parser;
use hero_cli::init_tracing;
use hero_engine::api::{simulate_duel_many, DuelConfig};
use hero_engine::HeroArchetype;

#[derive(Parser)]
#[command(name = "simulate-vs")]
#[command(about = "Monte Carlo sim: many battles between two archetypes")]
struct Args {
    /// Archetype of the first hero (warrior | mage | archer)
    #[arg(long)]
    first: HeroArchetype,

    /// Archetype of the second hero (warrior | mage | archer)
    #[arg(long)]
    second: HeroArchetype,

    /// Number of trials
    #[arg(long, default_value_t = 1000)]
    trials: u32,

    /// RNG base seed (trial i uses seed+i)
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Print the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let cfg = DuelConfig {
        first: args.first,
        second: args.second,
        seed: args.seed,
    };
    let summary = simulate_duel_many(&cfg, args.trials)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let trials_f = summary.samples as f64;
    println!("simulate-vs results");
    println!("-------------------");
    println!("trials:             {}", summary.samples);
    println!("matchup:            {} vs {}", args.first, args.second);
    println!();
    println!(
        "{:<20}{:.1}%",
        format!("{} win rate:", args.first),
        summary.first_wins as f64 / trials_f * 100.0
    );
    println!(
        "{:<20}{:.1}%",
        format!("{} win rate:", args.second),
        summary.second_wins as f64 / trials_f * 100.0
    );
    println!("crit rate:          {:.1}%", summary.crit_rate * 100.0);
    println!("avg rounds:         {:.2}", summary.avg_rounds);

    Ok(())
}
