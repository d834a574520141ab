use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use cron::Schedule;
use log::{debug, error, info, warn};
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::api::models::{DnsRecord, RecordEdit};
use crate::api::DnsApiClient;
use crate::error::Result;
use crate::filter::managed_records;
use crate::ip::IpResolver;

/// What happened to one managed record during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The provider gave us no record id to address it by.
    Malformed { name: String },
    Unchanged { name: String },
    Updated {
        name: String,
        from: Option<String>,
        to: String,
    },
    Failed { name: String },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Malformed { name } => write!(f, "{name} format error"),
            Outcome::Unchanged { name } => write!(f, "{name} don't need to update ip now"),
            Outcome::Updated { name, to, .. } => write!(f, "Update {name} to {to}"),
            Outcome::Failed { name } => write!(f, "Update {name} DNS data fail"),
        }
    }
}

/// Per-record outcomes of one run, in the order the provider listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    fn join(&self, sep: &str) -> String {
        self.outcomes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("\n"))
    }
}

pub struct Ddclient<C, R> {
    client: Arc<C>,
    resolver: Arc<R>,
    subdomains: HashSet<String>,
}

impl<C: DnsApiClient + 'static, R: IpResolver + 'static> Ddclient<C, R> {
    pub fn new(client: C, resolver: R, subdomains: impl IntoIterator<Item = String>) -> Self {
        Self {
            client: Arc::new(client),
            resolver: Arc::new(resolver),
            subdomains: subdomains.into_iter().collect(),
        }
    }

    /// One full resolve, fetch, filter and update cycle.
    ///
    /// Fails only when the address lookup or the record fetch fails, in
    /// which case no update is attempted. Update problems are recorded in
    /// the report and never stop the remaining records from being processed.
    ///
    /// Both lookups run as their own tasks. When one fails the run returns
    /// immediately; the other request is left to finish and is ignored.
    pub async fn reconcile(&self) -> Result<Report> {
        let resolver = Arc::clone(&self.resolver);
        let ip = tokio::spawn(async move { resolver.resolve().await });
        let client = Arc::clone(&self.client);
        let records = tokio::spawn(async move { client.load_all_records().await });

        let (addr, raw) = tokio::try_join!(joined(ip), joined(records))?;
        debug!("prepare for dns update, ip {}", addr);

        let mut report = Report::default();
        for record in managed_records(&raw, &self.subdomains) {
            let outcome = self.reconcile_record(record, &addr).await;
            report.outcomes.push(outcome);
        }

        debug!("ddclient finish {}", report.join(";"));
        Ok(report)
    }

    async fn reconcile_record(&self, record: DnsRecord, addr: &str) -> Outcome {
        let DnsRecord {
            name,
            rec_id,
            content,
        } = record;

        let Some(id) = rec_id else {
            return Outcome::Malformed { name };
        };
        if content.as_deref() == Some(addr) {
            return Outcome::Unchanged { name };
        }

        let edit = RecordEdit {
            name,
            id,
            content: addr.to_string(),
        };
        match self.client.edit_record(&edit).await {
            Ok(response) if response.is_success() => Outcome::Updated {
                name: edit.name,
                from: content,
                to: edit.content,
            },
            Ok(response) => {
                error!("Update {} DNS data fail: {:?}", edit.name, response);
                Outcome::Failed { name: edit.name }
            }
            Err(e) => {
                error!("Update {} DNS data fail: {}", edit.name, e);
                Outcome::Failed { name: edit.name }
            }
        }
    }

    /// Reconcile and log the result. A failed run is logged, never returned.
    pub async fn run_once(&self) -> Option<Report> {
        match self.reconcile().await {
            Ok(report) => {
                for outcome in &report.outcomes {
                    if let Outcome::Updated { name, from, to } = outcome {
                        debug!("{} changed {:?} -> {}", name, from, to);
                    }
                }
                if report.is_empty() {
                    info!("No managed records to reconcile");
                } else {
                    info!("{}", report);
                }
                Some(report)
            }
            Err(e) => {
                error!("Reconciliation aborted: {}", e);
                None
            }
        }
    }

    /// Fire [`Self::run_once`] on every tick of `schedule`, forever.
    ///
    /// Runs never overlap: the next tick is picked after the current run
    /// finishes, so ticks missed while running are skipped.
    pub async fn run(&self, schedule: &Schedule) {
        loop {
            let Some(wait) = next_wait(schedule, Local::now()) else {
                warn!("Schedule has no upcoming runs, stopping");
                return;
            };
            info!("Next run in {}s", wait.as_secs());

            sleep(wait).await;
            self.run_once().await;
        }
    }
}

async fn joined<T>(handle: JoinHandle<Result<T>>) -> Result<T> {
    handle.await?
}

/// Time from `now` until the first tick strictly after it, if any.
pub(crate) fn next_wait(schedule: &Schedule, now: DateTime<Local>) -> Option<Duration> {
    let next = schedule.after(&now).next()?;
    Some((next - now).to_std().unwrap_or_default())
}
