use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;
use transport_desk::bookings::{BookingMatch, BookingService, LookupOutcome};
use transport_desk::config::AppConfig;
use transport_desk::error::AppError;
use transport_desk::telemetry;

#[derive(Args, Debug)]
pub(crate) struct LookupArgs {
    /// Booking reference code (case and surrounding spaces are ignored)
    pub(crate) code: String,
    /// Override the configured bookings CSV
    #[arg(long)]
    pub(crate) bookings: Option<PathBuf>,
    /// Print the lookup result as JSON instead of tickets
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_lookup(args: LookupArgs) -> Result<(), AppError> {
    let LookupArgs {
        code,
        bookings,
        json,
    } = args;

    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    if let Some(path) = bookings {
        config.bookings.source = path;
    }

    let service = BookingService::new(&config.bookings);
    let outcome = service.lookup(&code)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &outcome).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        render_outcome(&mut out, &outcome)?;
    }

    Ok(())
}

fn render_outcome<W: Write>(out: &mut W, outcome: &LookupOutcome) -> io::Result<()> {
    if !outcome.found {
        writeln!(out, "Code not found. Please check your reference.")?;
        return Ok(());
    }

    writeln!(out, "Found {} passengers", outcome.passengers.len())?;
    for passenger in &outcome.passengers {
        writeln!(out)?;
        render_ticket(out, passenger)?;
    }

    if let Some(amendment) = &outcome.amendment {
        writeln!(out)?;
        writeln!(out, "Request amendment for group: {}", amendment.mailto)?;
    }

    Ok(())
}

fn render_ticket<W: Write>(out: &mut W, passenger: &BookingMatch) -> io::Result<()> {
    let record = &passenger.record;
    writeln!(out, "TICKET: {}", record.name)?;
    writeln!(
        out,
        "  {} Travel Direction: {} [{}]",
        passenger.badge.icon(),
        record.direction,
        passenger.badge
    )?;
    writeln!(out, "  Route: {}", record.route)?;
    writeln!(out, "  {}: {}", passenger.pickup_label, record.pickup)?;
    if passenger.show_pickup_time {
        writeln!(out, "  Pickup time: {}", record.pickup_time)?;
    }
    if passenger.show_return_notice {
        writeln!(
            out,
            "  Return: departure time will be announced at the venue"
        )?;
    }

    match (&record.map_link, record.coordinates()) {
        (Some(link), _) => writeln!(out, "  Map: {link}"),
        (None, Some((lat, lon))) => writeln!(out, "  Map: {lat}, {lon}"),
        (None, None) => writeln!(out, "  (No Map)"),
    }
}
