//! Loads the sample farm and prints the dashboard overview as JSON.

use std::env;

use chrono::Local;
use dotenvy::dotenv;
use serde_json::json;

use pushkind_farm::dto::list::ListQuery;
use pushkind_farm::models::config::DashboardConfig;
use pushkind_farm::repository::InMemoryRepository;
use pushkind_farm::services::{dashboard, livestock};

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match DashboardConfig::load("config", &app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading dashboard config: {}", err);
            std::process::exit(1);
        }
    };

    let repo = InMemoryRepository::with_sample_data();
    let today = Local::now().date_naive();

    log::info!("Starting {} dashboard for {}", config.farm_name, today);

    let overview = (|| {
        let stats = dashboard::dashboard_stats(&repo)?;
        let expenses = dashboard::expense_breakdown(&repo)?;
        let alerts = dashboard::alerts(&repo, &config, today)?;
        let production = dashboard::production_summary(&repo)?;
        let animals = livestock::list_animals(&repo, &config, ListQuery::default())?;
        Ok::<_, pushkind_farm::services::ServiceError>(json!({
            "farm": config.farm_name,
            "currency": config.currency_symbol,
            "stats": stats,
            "expenses": expenses,
            "alerts": alerts,
            "production": production,
            "animals": animals,
        }))
    })();

    let overview = match overview {
        Ok(overview) => overview,
        Err(err) => {
            log::error!("Failed to build dashboard overview: {err}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&overview) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            log::error!("Failed to render overview: {err}");
            std::process::exit(1);
        }
    }
}
