use std::sync::Arc;

use balancebook_core::balance::{BalanceService, InMemoryBalanceStore};
use balancebook_core::chart::ChartOfAccounts;
use balancebook_core::ledger::BalanceSummary;
use balancebook_shared::AppResult;

use crate::cli::{Cli, Commands};
use crate::input::read_document;
use crate::output::{ChartListing, Success};

pub fn dispatch(cli: &Cli, chart: &Arc<ChartOfAccounts>) -> AppResult<Success> {
    match &cli.command {
        Commands::Report { file, view, .. } => {
            let service = balance_service(chart);
            let created = service.create(read_document(file)?)?;
            let reports = service.reports(created.balance.id)?;
            Ok(Success::Reports {
                reports: Box::new(reports),
                view: *view,
            })
        }
        Commands::Check { file, .. } => {
            let service = balance_service(chart);
            let created = service.create(read_document(file)?)?;
            Ok(Success::Checked {
                balance: BalanceSummary::from(&created.balance),
                totals: created.totals,
            })
        }
        Commands::Chart { class, .. } => Ok(Success::Chart(ChartListing::build(chart, *class))),
    }
}

fn balance_service(chart: &Arc<ChartOfAccounts>) -> BalanceService<InMemoryBalanceStore> {
    BalanceService::new(Arc::new(InMemoryBalanceStore::new()), Arc::clone(chart))
}
