//! Console adapter for the combat core.
//!
//! Presentation glue only: turns CLI flags and stdin lines into
//! [`Action`]s, and renders the [`CombatEvent`]s the core emits. All game
//! rules live in the library.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use skirmish::character::archetypes::{default_archetypes, find_archetype};
use skirmish::character::player::Player;
use skirmish::combat::data::default_bestiary;
use skirmish::combat::logic::{Action, CombatEvent, Encounter};
use skirmish::combat::types::MonsterTemplate;

#[derive(Parser)]
#[command(name = "skirmish", about = "Turn-based combat simulator")]
struct Args {
    /// Archetype to play as
    #[arg(long, default_value = "Guerrier")]
    archetype: String,

    /// Auto-play: keep attacking until the player dies
    #[arg(long)]
    auto: bool,

    /// Stop auto-play after this many rounds
    #[arg(long)]
    rounds: Option<u32>,

    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with a custom monster catalog
    #[arg(long)]
    bestiary: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let roster = default_archetypes();
    let archetype = find_archetype(&roster, &args.archetype)
        .with_context(|| format!("unknown archetype `{}`", args.archetype))?;
    let player = Player::from_archetype(archetype);

    let catalog = match &args.bestiary {
        Some(path) => load_bestiary(path)?,
        None => default_bestiary(),
    };

    match args.seed {
        Some(seed) => run(player, catalog, &args, StdRng::seed_from_u64(seed)),
        None => run(player, catalog, &args, rand::thread_rng()),
    }
}

fn run(
    player: Player,
    catalog: Vec<MonsterTemplate>,
    args: &Args,
    mut rng: impl Rng,
) -> Result<()> {
    let mut encounter = Encounter::new(player, catalog, &mut rng)?;
    println!(
        "The battle begins: {} against {}.",
        encounter.player().name(),
        encounter.current_monster().name()
    );

    if args.auto {
        run_auto(&mut encounter, args.rounds, &mut rng);
    } else {
        run_interactive(&mut encounter, &mut rng)?;
    }

    println!("Monsters defeated: {}.", encounter.monsters_killed());
    Ok(())
}

fn run_auto(encounter: &mut Encounter, rounds: Option<u32>, rng: &mut impl Rng) {
    let mut round = 0u32;
    while !encounter.is_over() {
        if rounds.is_some_and(|cap| round >= cap) {
            break;
        }
        round += 1;
        render(&encounter.submit_action(Action::Attack, rng));
    }
}

fn run_interactive(encounter: &mut Encounter, rng: &mut impl Rng) -> Result<()> {
    let stdin = io::stdin();
    while !encounter.is_over() {
        print!(
            "[hp {:.0} | mana {} | kills {}] {} vs {} > ",
            encounter.player().health(),
            encounter.player().mana,
            encounter.monsters_killed(),
            encounter.player().name(),
            encounter.current_monster().name()
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") {
            break;
        }

        match input.parse::<Action>() {
            Ok(action) => render(&encounter.submit_action(action, rng)),
            Err(err) => println!("{}", err),
        }
    }
    Ok(())
}

fn render(events: &[CombatEvent]) {
    for event in events {
        println!("{}", event.message());
    }
}

fn load_bestiary(path: &Path) -> Result<Vec<MonsterTemplate>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading bestiary {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing bestiary {}", path.display()))
}
