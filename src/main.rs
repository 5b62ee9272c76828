use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use time::{Date, OffsetDateTime};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tournament_scheduler_lib::{
    logic::{io, time::string_to_date},
    rank_teams, render_standings, tally_results, PointsRules, Standings,
};

#[derive(Parser)]
#[command(
    name = "tournament-scheduler",
    version,
    about = "Round-robin calendars and standings for amateur tournaments",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the match calendar of a tournament setup
    Schedule {
        /// Tournament setup file (JSON)
        #[arg(short, long)]
        setup: PathBuf,

        /// Reference date (YYYY-MM-DD) when the setup has no start date. Defaults to today
        #[arg(long, value_parser = parse_date)]
        today: Option<Date>,

        /// Write the matches here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rank teams into a standings table
    Standings {
        /// Teams with their counters (JSON)
        #[arg(short, long, required_unless_present = "setup", conflicts_with = "setup")]
        teams: Option<PathBuf>,

        /// Tournament setup file (JSON). Its teams are tallied from --matches with its points rules
        #[arg(short, long, requires = "matches")]
        setup: Option<PathBuf>,

        /// Matches for head-to-head (JSON)
        #[arg(short, long)]
        matches: Option<PathBuf>,

        /// Recompute points and goals from the finished matches first
        #[arg(long, default_value = "false")]
        tally: bool,

        /// Points for win, draw and loss. A setup file brings its own
        #[arg(long, default_value = "3,1,0", value_parser = parse_points)]
        points: PointsRules,

        /// Print JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

fn parse_date(s: &str) -> Result<Date, String> {
    string_to_date(s).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_points(s: &str) -> Result<PointsRules, String> {
    let values: Vec<u32> = s.split(',')
        .map(|v| v.trim().parse::<u32>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("expected W,D,L: {e}"))?;

    match values.as_slice() {
        [win, draw, loss] => Ok(PointsRules::build(*win, *draw, *loss)),
        _ => Err(format!("expected three values, got {}", values.len())),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(&cli.log_format, cli.verbose)?;

    match cli.command {
        Commands::Schedule { setup, today, output } => {
            schedule(setup, today, output)?;
        }
        Commands::Standings { teams, setup, matches, tally, points, json } => {
            let standings = match (setup, teams) {
                (Some(setup), _) => setup_standings(setup, matches)?,
                (None, Some(teams)) => team_standings(teams, matches, tally, points)?,
                (None, None) => bail!("either --teams or --setup is needed"),
            };

            if json {
                println!("{}", io::to_json(&standings)?);
            } else {
                println!("{}", render_standings(&standings));
            }
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("tournament_scheduler_lib=debug,tournament_scheduler=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("tournament_scheduler_lib=info,tournament_scheduler=info,warn")
    };

    // Logs go to stderr so stdout stays clean for the JSON output.
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        "text" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
        other => bail!("unknown log format: {other}"),
    }

    Ok(())
}

fn schedule(setup: PathBuf, today: Option<Date>, output: Option<PathBuf>) -> Result<()> {
    let tournament = io::load_setup(&setup)
        .with_context(|| format!("loading {}", setup.display()))?
        .validate()
        .context("invalid tournament setup")?;

    // The only place the clock is read.
    let today = today.unwrap_or_else(|| OffsetDateTime::now_utc().date());
    let calendar = tournament.generate_calendar(today)?;

    match output {
        Some(path) => {
            io::write_json_file(&path, &calendar.matches)?;
            tracing::info!(matches = calendar.matches.len(), path = %path.display(), "calendar written");
        }
        None => println!("{}", io::to_json(&calendar.matches)?),
    }

    Ok(())
}

fn setup_standings(setup: PathBuf, matches: Option<PathBuf>) -> Result<Standings> {
    let tournament = io::load_setup(&setup)
        .with_context(|| format!("loading {}", setup.display()))?
        .validate()
        .context("invalid tournament setup")?;

    let Some(path) = matches else {
        bail!("--setup needs --matches");
    };
    let history = io::load_matches(&path).with_context(|| format!("loading {}", path.display()))?;

    Ok(tournament.standings(&history))
}

fn team_standings(teams: PathBuf, matches: Option<PathBuf>, tally: bool, points: PointsRules) -> Result<Standings> {
    let mut teams = io::load_teams(&teams)
        .with_context(|| format!("loading {}", teams.display()))?;

    let matches = match matches {
        Some(path) => Some(io::load_matches(&path).with_context(|| format!("loading {}", path.display()))?),
        None => None,
    };

    if tally {
        let Some(history) = matches.as_deref() else {
            bail!("--tally needs --matches");
        };
        teams = tally_results(&teams, history, &points);
    }

    Ok(rank_teams(&teams, matches.as_deref()))
}
