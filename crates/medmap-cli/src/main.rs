//! Interactive driver for the practitioner-map logic layer.
//!
//! Stands in for a presentation layer: each input line becomes an action,
//! and the resulting snapshot is printed. Debounced commands wait out their
//! window before printing so the effect is visible in the same step.

mod repl;

use std::io::BufRead;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use medmap_app::{Action, App, FixedGeolocator, Gazetteer, Geolocator, SpatialStore};
use medmap_core::GeoPoint;
use medmap_gazetteer::GazetteerClient;
use medmap_store::StoreClient;

use crate::repl::Command;

#[derive(Debug, Parser)]
#[command(name = "medmap-cli")]
#[command(about = "Hong Kong practitioner directory, driven from the terminal")]
struct Cli {
    /// Fixed latitude reported by the `locate` command.
    #[arg(long, requires = "lng")]
    lat: Option<f64>,
    /// Fixed longitude reported by the `locate` command.
    #[arg(long, requires = "lat")]
    lng: Option<f64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = medmap_core::load_app_config()?;

    let gazetteer: Arc<dyn Gazetteer> = Arc::new(GazetteerClient::with_base_url(
        config.request_timeout_secs,
        config.gazetteer_suggestion_cap,
        &config.gazetteer_base_url,
    )?);
    let store: Arc<dyn SpatialStore> = Arc::new(StoreClient::new(
        &config.store_base_url,
        &config.store_api_key,
        config.request_timeout_secs,
    )?);
    let position = match (cli.lat, cli.lng) {
        (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
        _ => None,
    };
    let geolocator: Arc<dyn Geolocator> = Arc::new(FixedGeolocator::new(position));

    let app = App::new(&config, gazetteer, store, geolocator);

    // Long enough for the wider of the two debounce windows plus the fetch
    // itself to land before the snapshot prints.
    let settle_wait = Duration::from_millis(
        config.search_debounce_ms.max(config.viewport_debounce_ms) + 500,
    );

    println!("{}", repl::HELP);
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = match repl::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            Command::Search(text) => {
                app.dispatch(Action::SetQueryText(text));
                tokio::time::sleep(settle_wait).await;
            }
            Command::Pick(n) => {
                let candidates = app.snapshot().candidates;
                match candidates.get(n - 1) {
                    Some(candidate) => {
                        app.dispatch(Action::SelectCandidate(candidate.clone()));
                    }
                    None => {
                        println!("no suggestion #{n} ({} available)", candidates.len());
                        continue;
                    }
                }
            }
            Command::Settle { bbox, zoom } => {
                app.dispatch(Action::ViewportSettled { bbox, zoom });
                tokio::time::sleep(settle_wait).await;
            }
            Command::Specialty(specialty) => {
                app.dispatch(Action::SetSpecialtyFilter(specialty));
            }
            Command::Status(statuses) => app.dispatch(Action::SetStatusFilter(statuses)),
            Command::District(district) => {
                app.dispatch(Action::SetDistrictFilter(district));
            }
            Command::Select(index) => {
                let key = match index {
                    None => None,
                    Some(n) => {
                        let visible = app.visible_practitioners();
                        match visible.get(n - 1) {
                            Some(p) => Some(p.key()),
                            None => {
                                println!(
                                    "no practitioner #{n} ({} visible)",
                                    visible.len()
                                );
                                continue;
                            }
                        }
                    }
                };
                app.dispatch(Action::SelectEntity(key));
            }
            Command::Locate => {
                app.dispatch(Action::RecenterToCurrentLocation);
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            Command::List => {
                repl::print_practitioners(&app.visible_practitioners());
                continue;
            }
            Command::Help => {
                println!("{}", repl::HELP);
                continue;
            }
            Command::Quit => break,
        }

        repl::print_snapshot(&app.snapshot());
    }

    Ok(())
}
