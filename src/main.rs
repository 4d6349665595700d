use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use driver_hub::config::AppConfig;
use driver_hub::display::StatusBadge;
use driver_hub::driver::DriverProfile;
use driver_hub::error::AppError;
use driver_hub::fixtures::{self, InMemoryLeaveRepository};
use driver_hub::leave::{LeaveDeskService, LeaveDraft, LeaveRequest};
use driver_hub::telemetry;
use driver_hub::trips::{summarize, TripRecord};

#[derive(Parser, Debug)]
#[command(
    name = "driver-hub",
    about = "Inspect the driver companion screens' data from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize the completed-trip history
    Summary,
    /// List the active trip or the trips scheduled for today
    Trips(TripsArgs),
    /// Inspect or submit leave requests
    Leave {
        #[command(subcommand)]
        command: LeaveCommand,
    },
    /// Show the driver profile
    Profile {
        /// Evaluation date for years of service (defaults to today)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },
}

#[derive(Args, Debug, Default)]
struct TripsArgs {
    /// Show the scheduled trips instead of the active one
    #[arg(long)]
    upcoming: bool,
}

#[derive(Subcommand, Debug)]
enum LeaveCommand {
    /// List previously submitted requests
    List,
    /// Validate and submit a new leave request
    Submit(SubmitArgs),
}

#[derive(Args, Debug)]
struct SubmitArgs {
    /// Start date text as entered on the form
    #[arg(long, default_value = "")]
    start: String,
    /// End date text as entered on the form
    #[arg(long, default_value = "")]
    end: String,
    /// Reason for the leave
    #[arg(long, default_value = "")]
    reason: String,
    /// Submission date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{value}', expected YYYY-MM-DD"))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load();
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "driver-hub starting");

    match cli.command {
        Command::Summary => print_summary(),
        Command::Trips(args) => {
            let trips = if args.upcoming {
                fixtures::upcoming_trips()
            } else {
                fixtures::current_trips()
            };
            print_trips(&trips);
        }
        Command::Leave { command } => match command {
            LeaveCommand::List => print_leave_requests(&fixtures::leave_requests()),
            LeaveCommand::Submit(args) => submit_leave(args)?,
        },
        Command::Profile { today } => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            print_profile(&fixtures::driver_profile(), today);
        }
    }

    Ok(())
}

fn print_summary() {
    let history = fixtures::trip_history();
    let summary = summarize(&history);

    println!("Trip History");
    println!("  Total Earnings   ${:.2}", summary.total_earnings);
    println!("  Completed Trips  {}", summary.trip_count);
    match summary.average_rating {
        Some(rating) => println!("  Average Rating   {rating:.1}"),
        None => println!("  Average Rating   no rated trips"),
    }

    for trip in &history {
        println!(
            "  {}  {} -> {}  ${:.2}  {:.1}*  {}",
            trip.date, trip.pickup_location, trip.dropoff_location, trip.fare, trip.rating,
            trip.duration
        );
    }
}

fn print_trips(trips: &[TripRecord]) {
    for trip in trips {
        let badge = trip.status.badge();
        println!("[{}] {} ({})", badge.label, trip.customer_name, trip.customer_phone);
        println!("  pickup   {} at {}", trip.pickup_location, trip.pickup_time);
        println!("  dropoff  {}", trip.dropoff_location);
        println!("  fare ${:.2} over {}", trip.fare, trip.distance);
    }
}

fn print_leave_requests(requests: &[LeaveRequest]) {
    for request in requests {
        let StatusBadge { label, color } = request.status.badge();
        println!(
            "[{label}/{color:?}] {} to {}  submitted {}",
            request.start_date, request.end_date, request.submitted_on
        );
        println!("  reason: {}", request.reason);
        if let Some(note) = &request.note {
            println!("  note: {note}");
        }
    }
}

fn submit_leave(args: SubmitArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryLeaveRepository::seeded());
    let desk = LeaveDeskService::new(repository);

    let draft = LeaveDraft {
        start_date: args.start,
        end_date: args.end,
        reason: args.reason,
    };
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let stored = desk.submit(&draft, today)?;
    println!(
        "submitted {} ({} to {}), status {}",
        stored.id.0,
        stored.start_date,
        stored.end_date,
        stored.status.label()
    );
    Ok(())
}

fn print_profile(profile: &DriverProfile, today: NaiveDate) {
    println!("{} ({} trips, {:.1}*)", profile.name, profile.stats.total_trips, profile.stats.rating);
    println!("  driver since {}", profile.join_date);
    println!("  years of service: {}", profile.service_years(today));
    println!("  total earnings: ${:.2}", profile.stats.total_earnings);
    println!(
        "  vehicle: {} {} {} ({}, {})",
        profile.vehicle.year,
        profile.vehicle.make,
        profile.vehicle.model,
        profile.vehicle.color,
        profile.vehicle.license_plate
    );
    println!(
        "  license {} expires {}",
        profile.license_number, profile.license_expiry
    );
    println!("  contact: {} / {}", profile.phone, profile.email);
    println!("  address: {}", profile.address);
}
