//! Duel simulator entry point.
mod config;
mod duel;

use anyhow::{Context, Result};
use clap::Parser;
use config::SimConfig;
use duel::{Duel, DuelSummary, Side, Team};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tcg_battle::Effectiveness;
use tcg_deck::{starter_deck, CardCatalog, Deck};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = SimConfig::parse();
    setup_logging();

    let catalog = CardCatalog::load(&config.catalog)
        .with_context(|| format!("Failed to load catalog {}", config.catalog.display()))?;

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    tracing::info!(seed, max_rounds = config.max_rounds, "dealing starter decks");
    let mut rng = StdRng::seed_from_u64(seed);

    let red = starter_deck(&catalog, &mut rng).context("Failed to deal Red's deck")?;
    let blue = starter_deck(&catalog, &mut rng).context("Failed to deal Blue's deck")?;

    print_deck(Side::Red, &red);
    print_deck(Side::Blue, &blue);

    let mut duel = Duel::new(Team::new(red.to_fighters()), Team::new(blue.to_fighters()));
    let summary = duel.run(config.max_rounds);
    print_summary(&duel, &summary);

    Ok(())
}

/// Log to stderr, `info` unless `RUST_LOG` says otherwise
fn setup_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_deck(side: Side, deck: &Deck) {
    println!("{} - {}", side, deck.name());
    for card in deck.cards() {
        println!(
            "  #{:<4} {:<12} {:<9} HP {:>3}  ATK {:>3}",
            card.pokedex_number,
            card.name,
            card.element.as_str(),
            card.hp,
            card.attack
        );
    }
    println!();
}

fn print_summary(duel: &Duel, summary: &DuelSummary) {
    for attack in &summary.attacks {
        let mut line = format!(
            "Round {:>3}: {} {} hits {} for {}",
            attack.round, attack.side, attack.attacker, attack.defender, attack.outcome.damage
        );
        if attack.outcome.effectiveness == Effectiveness::SuperEffective {
            line.push_str(" (super effective!)");
        }
        if attack.outcome.knocked_out {
            line.push_str(&format!(" - {} is knocked out", attack.defender));
        } else {
            line.push_str(&format!(" - {} HP left", attack.defender_hp));
        }
        println!("{}", line);
    }

    println!();
    match summary.winner {
        Some(side) => println!(
            "{} wins after {} rounds with {} cards standing",
            side,
            summary.rounds,
            duel.team(side).remaining()
        ),
        None => println!("Draw after {} rounds", summary.rounds),
    }
}
