use std::env;
use std::process;

use kantodex::config::AppConfig;
use kantodex::core::api::ApiClient;
use kantodex::core::catalog::Catalog;
use kantodex::core::compare::{self, Side};
use kantodex::core::history::{ComparisonHistory, FileStore};
use kantodex::core::Result;

#[tokio::main]
async fn main() {
    env_logger::init();
    log::info!("kantodex v{} starting", kantodex::VERSION);

    let config = AppConfig::load();
    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(e) = run(&config, &args).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(config: &AppConfig, args: &[String]) -> Result<()> {
    let client = ApiClient::new(&config.api.base_url);
    let catalog = Catalog::new(client, &config.api.language);

    match args.first().map(String::as_str) {
        Some("list") => {
            let limit = args
                .get(1)
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(config.api.catalog_limit);
            for entry in catalog.list_localized(limit).await? {
                let display = entry.display_name.as_deref().unwrap_or(&entry.name);
                println!("#{:03}  {}  ({})", entry.id, display, entry.name);
            }
        }
        Some("show") => {
            let Some(query) = args.get(1) else {
                usage();
                return Ok(());
            };
            let pokemon = catalog.get(query).await?;
            println!("#{:03}  {}  ({})", pokemon.id, pokemon.display_name, pokemon.name);
            println!("タイプ: {}", pokemon.display_types.join(" / "));
            println!("高さ: {}m  重さ: {}kg", pokemon.height_m, pokemon.weight_kg);
            println!("特性: {}", pokemon.display_abilities.join(" / "));
            for stat in &pokemon.stats {
                println!("  {:16} {}", stat.name, stat.value);
            }
            println!("合計: {}", pokemon.total_stats());
            if pokemon.gender.is_genderless {
                println!("性別: なし");
            } else {
                let mut sexes = Vec::new();
                if pokemon.gender.has_male {
                    sexes.push("オス");
                }
                if pokemon.gender.has_female {
                    sexes.push("メス");
                }
                println!("性別: {}", sexes.join(" / "));
            }
            println!("画像: {}", pokemon.image);
        }
        Some("compare") => {
            let (Some(first), Some(second)) = (args.get(1), args.get(2)) else {
                usage();
                return Ok(());
            };
            let (first, second) =
                futures::try_join!(catalog.get(first), catalog.get(second))?;

            let result = compare::compare(&first, &second);
            println!(
                "{} ({}) vs {} ({})",
                first.display_name, result.total_first, second.display_name, result.total_second
            );
            match result.winner {
                Some(Side::First) => println!("勝者: {}", first.display_name),
                Some(Side::Second) => println!("勝者: {}", second.display_name),
                None => println!("引き分け"),
            }
            println!(
                "{} → {}: {}x",
                first.display_name, second.display_name, result.effectiveness_first
            );
            println!(
                "{} → {}: {}x",
                second.display_name, first.display_name, result.effectiveness_second
            );

            let history = ComparisonHistory::new(FileStore::new(config.history_path()));
            history.record(&first, &second);
        }
        Some("history") => {
            let history = ComparisonHistory::new(FileStore::new(config.history_path()));
            for (index, entry) in history.entries().iter().enumerate() {
                println!(
                    "{}. {} vs {}",
                    index + 1,
                    entry.display_name_first,
                    entry.display_name_second
                );
            }
        }
        _ => usage(),
    }

    Ok(())
}

fn usage() {
    eprintln!("usage: kantodex <command>");
    eprintln!("  list [limit]            catalog listing with localized names");
    eprintln!("  show <name|id>          one entry in full");
    eprintln!("  compare <a> <b>         side-by-side comparison");
    eprintln!("  history                 recent comparisons");
}
