// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use embassy_interview_api::{
    BroadcastNotifier, Clock, CompletionService, ConfirmationService, FixedClock,
    OperationResult, ReschedulingService, ResponseProcessingService, ResponseReport,
    ServiceContext, SystemClock, Transition, load_policy_registry, render_policy_table,
};
use embassy_interview_audit::{Actor, Cause, InterviewEvent};
use embassy_interview_domain::{
    ApplicationId, EmbassyId, EmbassyPolicy, EmbassyResponse, InterviewId, PolicyRegistry, Slot,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast::{Receiver, error::RecvError};
use tracing::{info, warn};

/// Embassy interview scheduling driver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON policy table. Uses the built-in table if omitted.
    #[arg(short, long)]
    policies: Option<PathBuf>,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the effective policy table.
    Policies,
    /// Walk one application through approval, rescheduling and completion
    /// against in-memory stores, printing each result as a JSON line.
    Simulate {
        /// Embassy code whose policy applies.
        #[arg(short, long, default_value = "USA")]
        embassy: String,

        /// Simulated current date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        today: Option<NaiveDate>,
    },
}

#[derive(Serialize)]
struct Step<'a, T: Serialize> {
    step: &'a str,
    result: &'a OperationResult<T>,
}

fn print_step<T: Serialize>(
    step: &str,
    result: &OperationResult<T>,
) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(&Step { step, result })?);
    Ok(())
}

async fn print_notifications(mut rx: Receiver<InterviewEvent>) {
    loop {
        match rx.recv().await {
            Ok(event) => match serde_json::to_string(&event) {
                Ok(line) => println!("{line}"),
                Err(err) => warn!(error = %err, "Could not render notification"),
            },
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "Notification printer fell behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

fn simulate(
    policies: PolicyRegistry,
    embassy_id: &EmbassyId,
    today: NaiveDate,
    notifier: &Arc<BroadcastNotifier>,
) -> Result<(), Box<dyn std::error::Error>> {
    let start: NaiveDateTime = today.and_time(NaiveTime::MIN) + Duration::hours(9);
    let clock: Arc<FixedClock> = Arc::new(FixedClock::new(start));
    let policy: EmbassyPolicy = policies.policy_for(embassy_id);
    let ctx: ServiceContext = ServiceContext::in_memory(policies, notifier.clone(), clock.clone());
    let actor: Actor = Actor::new(String::from("simulator"), String::from("advisor"));
    let cause = |step: &str| Cause::new(format!("sim-{step}"), format!("Simulated {step}"));

    info!(
        embassy = %embassy_id,
        max_reschedules = policy.max_reschedules(),
        min_cancellation_hours = policy.min_cancellation_hours(),
        min_lead_days = policy.min_lead_days(),
        "Starting simulation"
    );

    let first_day: i64 = i64::from(policy.min_lead_days()) + 3;
    let slot_on = |days: i64| -> Result<Slot, Box<dyn std::error::Error>> {
        Slot::new(
            today + Duration::days(days),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap_or(NaiveTime::MIN),
            45,
        )
        .map_err(Into::into)
    };

    let response: EmbassyResponse = EmbassyResponse::approved_fixed(
        ApplicationId::new("SIM-1"),
        embassy_id.clone(),
        slot_on(first_day)?,
        Some(String::from("Consular section")),
        clock.now(),
    );
    let approval: OperationResult<ResponseReport> = ResponseProcessingService::new(ctx.clone())
        .process(&response, actor.clone(), cause("approval"));
    print_step("approval", &approval)?;
    let interview_id: InterviewId = match approval.into_result()? {
        ResponseReport::Installed(transition) => transition.interview.id().clone(),
        ResponseReport::Rejected { reason, .. } => {
            warn!(reason, "Simulated approval was rejected");
            return Ok(());
        }
    };

    // One attempt past the limit shows the refusal.
    let rescheduling: ReschedulingService = ReschedulingService::new(ctx.clone());
    for attempt in 1..=i64::from(policy.max_reschedules()) + 1 {
        let result: OperationResult<Transition> = rescheduling.reschedule(
            &interview_id,
            slot_on(first_day + 2 * attempt)?,
            actor.clone(),
            cause("reschedule"),
        );
        print_step("reschedule", &result)?;
    }

    let confirmed: OperationResult<Transition> = ConfirmationService::new(ctx.clone()).confirm(
        &interview_id,
        actor.clone(),
        cause("confirm"),
    );
    print_step("confirm", &confirmed)?;

    if let Some(slot) = confirmed.data.as_ref().and_then(|t| t.interview.current_slot()) {
        clock.set(slot.end());
    }
    let completed: OperationResult<Transition> =
        CompletionService::new(ctx).mark_completed(&interview_id, actor, cause("completion"));
    print_step("completion", &completed)?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    // Logs go to stderr; stdout carries the JSON lines.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if args.verbose { "debug" } else { "info" })
            }),
        )
        .init();

    let policies: PolicyRegistry = match &args.policies {
        Some(path) => load_policy_registry(path)?,
        None => PolicyRegistry::builtin(),
    };

    match args.command {
        Commands::Policies => {
            println!("{}", render_policy_table(&policies)?);
        }
        Commands::Simulate { embassy, today } => {
            let today: NaiveDate = today.unwrap_or_else(|| SystemClock.now().date());
            let notifier: Arc<BroadcastNotifier> = Arc::new(BroadcastNotifier::new());
            let rx: Receiver<InterviewEvent> = notifier.subscribe();

            simulate(policies, &EmbassyId::new(&embassy), today, &notifier)?;

            // Dropping the last sender lets the printer drain and stop.
            drop(notifier);
            print_notifications(rx).await;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_simulate_arguments() {
        let args: Args = Args::try_parse_from([
            "embassy-interview-cli",
            "--verbose",
            "simulate",
            "--embassy",
            "can",
            "--today",
            "2026-10-16",
        ])
        .unwrap();

        assert!(args.verbose);
        match args.command {
            Commands::Simulate { embassy, today } => {
                assert_eq!(embassy, "can");
                assert_eq!(today, NaiveDate::from_ymd_opt(2026, 10, 16));
            }
            Commands::Policies => panic!("expected simulate"),
        }
    }

    #[test]
    fn test_simulation_publishes_every_transition() {
        let notifier: Arc<BroadcastNotifier> = Arc::new(BroadcastNotifier::new());
        let mut rx: Receiver<InterviewEvent> = notifier.subscribe();

        simulate(
            PolicyRegistry::builtin(),
            &EmbassyId::new("ESP"),
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            &notifier,
        )
        .unwrap();

        // ESP allows one reschedule: approval, reschedule, confirm, complete.
        let mut received: Vec<InterviewEvent> = Vec::new();
        while let Ok(event) = rx.try_recv() {
            received.push(event);
        }
        assert_eq!(received.len(), 4);
    }
}
