use std::str::FromStr;
use std::sync::{Arc, RwLock};

use anyhow::bail;
use finboard_core::{DashboardService, DashboardServiceTrait};
use finboard_storage_memory::{
    accounts::AccountRepository, bills::BillRepository, budget::BudgetRepository,
    debts::DebtRepository, goals::GoalRepository, transactions::TransactionRepository, MemoryDb,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
    pub base_currency: Arc<RwLock<String>>,
}

/// View printed by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Dashboard,
    Debts,
    Goals,
    Bills,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dashboard" => Ok(Command::Dashboard),
            "debts" => Ok(Command::Debts),
            "goals" => Ok(Command::Goals),
            "bills" => Ok(Command::Bills),
            other => bail!(
                "unknown command '{}', expected dashboard, debts, goals or bills",
                other
            ),
        }
    }
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout stays valid JSON
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db = Arc::new(MemoryDb::open(&config.data_file)?);
    tracing::info!("Data file in use: {}", config.data_file.display());

    let base_currency = Arc::new(RwLock::new(config.base_currency.clone()));

    let dashboard_service: Arc<dyn DashboardServiceTrait> = Arc::new(DashboardService::new(
        base_currency.clone(),
        Arc::new(AccountRepository::new(db.clone())),
        Arc::new(BudgetRepository::new(db.clone())),
        Arc::new(TransactionRepository::new(db.clone())),
        Arc::new(DebtRepository::new(db.clone())),
        Arc::new(GoalRepository::new(db.clone())),
        Arc::new(BillRepository::new(db)),
    ));

    Ok(Arc::new(AppState {
        dashboard_service,
        base_currency,
    }))
}

/// Runs `command` and renders the result as pretty JSON.
pub fn run(state: &AppState, config: &Config, command: Command) -> anyhow::Result<String> {
    let service = &state.dashboard_service;
    let user_id = config.user_id.as_str();
    let as_of = config.as_of;

    let output = match command {
        Command::Dashboard => {
            let summary = service.get_dashboard(user_id, as_of)?;
            for issue in &summary.issues {
                tracing::warn!(
                    "{:?} {} ({}): {}",
                    issue.entity,
                    issue.entity_id,
                    issue.name,
                    issue.message
                );
            }
            serde_json::to_string_pretty(&summary)?
        }
        Command::Debts => serde_json::to_string_pretty(&service.get_debt_overview(user_id, as_of)?)?,
        Command::Goals => serde_json::to_string_pretty(&service.get_goal_overview(user_id, as_of)?)?,
        Command::Bills => serde_json::to_string_pretty(&service.get_bill_overview(user_id, as_of)?)?,
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn fixture_config() -> Config {
        Config {
            data_file: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/sample_data.json"),
            user_id: "user-1".to_string(),
            as_of: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            base_currency: "USD".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!("dashboard".parse::<Command>().unwrap(), Command::Dashboard);
        assert_eq!("Bills".parse::<Command>().unwrap(), Command::Bills);
        assert!("export".parse::<Command>().is_err());
    }

    #[test]
    fn test_build_state_and_run_fixture() {
        let config = fixture_config();
        let state = build_state(&config).unwrap();
        assert_eq!(*state.base_currency.read().unwrap(), "USD");

        let output = run(&state, &config, Command::Dashboard).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["userId"], "user-1");
        assert_eq!(json["baseCurrency"], "USD");
        assert_eq!(json["period"]["start"], "2024-03-01");

        let debts = run(&state, &config, Command::Debts).unwrap();
        assert!(debts.contains("totalBalance"));
    }

    #[test]
    fn test_build_state_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixture_config();
        config.data_file = dir.path().join("nope.json");
        assert!(build_state(&config).is_err());
    }
}
