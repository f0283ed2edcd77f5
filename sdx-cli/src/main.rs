//! sdx-cli - terminal client for the ShinobiDex API
//!
//! Thin front end over the client library: lists and looks up characters,
//! printing an advisory when running on the bundled fallback data.

use anyhow::Result;
use clap::{Parser, Subcommand};
use sdx_cli::client::DEFAULT_API_URL;
use sdx_cli::squad::power_level;
use sdx_cli::{CharacterClient, Role, Squad};
use sdx_common::model::Stat;
use sdx_common::Character;

#[derive(Parser, Debug)]
#[command(name = "sdx-cli")]
#[command(about = "Character browser for ShinobiDex")]
#[command(version)]
struct Args {
    /// API base URL
    #[arg(long, env = "SDX_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all characters
    List,
    /// Show one character by id
    Show { id: String },
    /// Search characters by name
    Search { query: String },
    /// List the squad roles
    Roles,
    /// Assemble a squad and show its combat analysis
    ///
    /// Assignments are role=id pairs, e.g. `igl=shikamaru_nara sniper=tenten`
    Squad {
        #[arg(required = true)]
        assignments: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let args = Args::parse();

    if let Command::Roles = args.command {
        for role in Role::ALL {
            println!("{:14} {} - {}", role.id(), role.name(), role.description());
        }
        return Ok(());
    }

    let mut client = CharacterClient::new(&args.api_url)?;
    client.load().await;

    if let Some(advisory) = client.advisory() {
        eprintln!("! {}", advisory);
    }

    match args.command {
        Command::List => {
            for character in client.characters() {
                print_summary(character);
            }
        }
        Command::Show { id } => match client.get_by_id(&id).await? {
            Some(character) => print_detail(&character),
            None => {
                eprintln!("Character not found: {}", id);
                std::process::exit(1);
            }
        },
        Command::Search { query } => {
            let results = client.search(&query).await?;
            if results.is_empty() {
                println!("No matches for '{}'", query);
            }
            for character in &results {
                print_summary(character);
            }
        }
        Command::Squad { assignments } => {
            let squad = build_squad(&client, &assignments).await?;
            print_analysis(&squad);
        }
        Command::Roles => unreachable!("handled above"),
    }

    Ok(())
}

async fn build_squad(client: &CharacterClient, assignments: &[String]) -> Result<Squad> {
    let mut squad = Squad::new();
    for assignment in assignments {
        let (role_id, character_id) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Expected role=id, got '{}'", assignment))?;
        let role = Role::from_id(role_id)
            .ok_or_else(|| anyhow::anyhow!("Unknown role '{}'", role_id))?;
        let character = client
            .get_by_id(character_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Character not found: {}", character_id))?;
        squad.assign(role, character)?;
    }
    Ok(squad)
}

fn print_analysis(squad: &Squad) {
    println!("Squad ({}/{} roles filled)", squad.len(), Role::ALL.len());
    for role in Role::ALL {
        match squad.get(role) {
            Some(character) => println!(
                "  {:14} {:20} power {}",
                role.id(),
                character.name,
                power_level(character)
            ),
            None => println!("  {:14} (unassigned)", role.id()),
        }
    }

    println!("Combat analysis:");
    for stat in [Stat::Ninjutsu, Stat::Taijutsu, Stat::Intelligence, Stat::Speed] {
        if let Some(average) = squad.average_stat(stat) {
            println!("  {:14} {:.1}", stat.name(), average);
        }
    }
}

fn print_summary(character: &Character) {
    println!(
        "{:20} {:12} power {}",
        character.name,
        character.basic_info.display_rank(),
        power_level(character)
    );
}

fn print_detail(character: &Character) {
    let stats = &character.databook_stats;
    println!("{} ({})", character.name, character.id);
    println!("  Rank:         {}", character.basic_info.display_rank());
    println!(
        "  Affiliations: {}",
        character.basic_info.affiliations.join(", ")
    );
    println!(
        "  Stats:        nin {} / tai {} / gen {} / int {} / str {} / spd {} / sta {} / seals {}",
        stats.ninjutsu,
        stats.taijutsu,
        stats.genjutsu,
        stats.intelligence,
        stats.strength,
        stats.speed,
        stats.stamina,
        stats.hand_seals
    );
    if let Some(kekkei_genkai) = &character.abilities.kekkei_genkai {
        println!("  Kekkei Genkai: {}", kekkei_genkai);
    }
    if !character.abilities.unique_jutsu.is_empty() {
        println!(
            "  Unique jutsu: {}",
            character.abilities.unique_jutsu.join(", ")
        );
    }
    println!("  Power level:  {}", power_level(character));
}
