use clap::{Parser, Subcommand};
use hero_cli::init_tracing;
use hero_engine::query::find_by_archetype;
use hero_engine::{heroes_pair_mut, Arena, Dice, Hero, HeroArchetype};

#[derive(Subcommand)]
enum Cmd {
    /// Run the built-in demo: two scenarios, lookups and running totals
    Demo {
        /// RNG seed for determinism (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Print hero records as JSON instead of one-line summaries
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Fight one battle between two freshly created heroes
    Duel {
        /// Archetype of the first hero (warrior | mage | archer)
        #[arg(long)]
        first: HeroArchetype,
        /// Archetype of the second hero (warrior | mage | archer)
        #[arg(long)]
        second: HeroArchetype,
        /// RNG seed for determinism (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Serialize the demo heroes to JSON (stdout)
    Roster {
        /// Pretty-print JSON
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

#[derive(Parser)]
#[command(name = "hero-battle")]
#[command(about = "Turn-based hero battle demo")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

fn demo_trio(arena: &mut Arena) -> Vec<Hero> {
    vec![
        arena.create_hero("Dmytro", HeroArchetype::Warrior),
        arena.create_hero("Merlin", HeroArchetype::Mage),
        arena.create_hero("Leona", HeroArchetype::Archer),
    ]
}

fn print_hero(hero: &Hero, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(hero)?);
    } else {
        println!("{}", hero);
    }
    Ok(())
}

fn print_heroes(heroes: &[Hero], json: bool) -> anyhow::Result<()> {
    for hero in heroes {
        print_hero(hero, json)?;
    }
    Ok(())
}

/// Create a trio, fight `first` vs `second`, look up the mage and report totals.
fn run_scenario(
    arena: &mut Arena,
    dice: &mut Dice,
    title: &str,
    first: usize,
    second: usize,
    json: bool,
) -> anyhow::Result<()> {
    let mut heroes = demo_trio(arena);

    println!("=== {}: heroes ===", title);
    print_heroes(&heroes, json)?;

    println!("\n=== {}: battle ===", title);
    let (a, b) = heroes_pair_mut(&mut heroes, first, second)
        .ok_or_else(|| anyhow::anyhow!("invalid demo pairing {}/{}", first, second))?;
    let report = arena.tracked_battle(a, b, dice);
    println!("{}", report.log_text());

    println!("\n=== {}: hero lookup ===", title);
    match find_by_archetype(&heroes, HeroArchetype::Mage) {
        Some(hero) => {
            print!("Found hero: ");
            print_hero(hero, json)?;
        }
        None => println!("Found hero: none"),
    }

    println!("\n=== {}: final state ===", title);
    print_heroes(&heroes, json)?;

    let stats = arena.stats();
    println!("\nTotal damage dealt: {}", stats.total_damage);
    println!("Critical hits: {}", stats.critical_hits);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd.unwrap_or(Cmd::Demo { seed: None, json: false }) {
        Cmd::Demo { seed, json } => {
            let mut arena = Arena::new();
            let mut dice = Dice::from_seed(seed.unwrap_or_else(rand::random));
            run_scenario(&mut arena, &mut dice, "Scenario 1", 0, 1, json)?;
            println!();
            run_scenario(&mut arena, &mut dice, "Scenario 2", 2, 0, json)?;
        }
        Cmd::Duel { first, second, seed } => {
            let mut arena = Arena::new();
            let mut a = arena.create_hero(first.to_string(), first);
            let mut b = arena.create_hero(second.to_string(), second);
            let mut dice = Dice::from_seed(seed.unwrap_or_else(rand::random));
            println!("{}\n{}\n", a, b);
            let report = arena.tracked_battle(&mut a, &mut b, &mut dice);
            println!("{}", report.log_text());
            println!(
                "\nwinner={} loser={} rounds={} total_damage={} critical_hits={}",
                report.winner_name,
                report.loser_name,
                report.round_count(),
                arena.stats().total_damage,
                arena.stats().critical_hits
            );
        }
        Cmd::Roster { pretty } => {
            let mut arena = Arena::new();
            let heroes = demo_trio(&mut arena);
            if pretty {
                println!("{}", serde_json::to_string_pretty(&heroes)?);
            } else {
                println!("{}", serde_json::to_string(&heroes)?);
            }
        }
    }
    Ok(())
}
