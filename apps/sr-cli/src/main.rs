use clap::{Parser, Subcommand, ValueEnum};
use sr_app::{AppError, AppResult, HELP, Reply, RoadForm, RouteReport, Session, parse_command};
use sr_core::timing;
use sr_graph::NetworkView;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sr-cli")]
#[command(about = "ShortRoute CLI - build a road network and find shortest routes", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,
    /// Report route query timing on exit (same as setting SR_TIMING)
    #[arg(long, global = true)]
    timing: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session reading commands from stdin (default)
    Shell {
        /// Do not print the banner and prompt
        #[arg(long)]
        no_prompt: bool,
    },
    /// Build a network from the given roads and answer one route query
    Route {
        /// A road as "FROM,TO,DISTANCE" (repeatable)
        #[arg(long = "road", value_name = "FROM,TO,DISTANCE")]
        roads: Vec<String>,
        /// Source location
        from: String,
        /// Destination location
        to: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    // Initialize tracing on stderr so stdout stays clean for output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.timing {
        timing::enable_timing();
    }

    let result = match cli.command {
        None => cmd_shell(cli.format, true),
        Some(Commands::Shell { no_prompt }) => cmd_shell(cli.format, !no_prompt),
        Some(Commands::Route { roads, from, to }) => cmd_route(cli.format, &roads, &from, &to),
    };

    print_timing_summary();
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if render_error(cli.format, &err).is_err() {
                eprintln!("Error: {}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn cmd_shell(format: Format, prompt: bool) -> AppResult<()> {
    let mut session = Session::new();
    let mut stdout = io::stdout();
    let mut lines = io::stdin().lock().lines();

    if prompt && format == Format::Text {
        println!("Find the Shortest Route - add roads, then ask for a route. Type 'help' for commands.");
    }

    loop {
        if prompt {
            print!("> ");
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let outcome = match parse_command(&line) {
            Ok(Some(command)) => session.execute(command),
            Ok(None) => continue,
            Err(err) => Err(err),
        };

        match outcome {
            Ok(Reply::Quit) => break,
            Ok(reply) => render_reply(format, &reply)?,
            Err(err) => render_error(format, &err)?,
        }
    }

    if prompt && format == Format::Text {
        println!();
    }
    Ok(())
}

fn cmd_route(format: Format, roads: &[String], from: &str, to: &str) -> AppResult<()> {
    let mut session = Session::new();
    for road in roads {
        let form = RoadForm::from_fields(road)?;
        session.submit_road(&form)?;
    }

    match session.compute_route(from, to) {
        Ok(report) => render_reply(format, &Reply::Route(report)),
        Err(err) if err.is_informational() => render_error(format, &err),
        Err(err) => Err(err),
    }
}

fn reply_json(reply: &Reply) -> AppResult<String> {
    Ok(serde_json::to_string(reply).map_err(io::Error::from)?)
}

fn error_json(err: &AppError) -> serde_json::Value {
    serde_json::json!({
        "error": err.to_string(),
        "informational": err.is_informational(),
    })
}

fn render_reply(format: Format, reply: &Reply) -> AppResult<()> {
    if format == Format::Json {
        println!("{}", reply_json(reply)?);
        return Ok(());
    }

    match reply {
        Reply::RoadAdded(added) => println!("✓ {}", added),
        Reply::Network(listing) => {
            if listing.is_empty() {
                println!("No roads yet");
            } else {
                println!("Current Road Network:");
                for row in listing {
                    println!("  {}", row);
                }
            }
        }
        Reply::Locations(locations) => {
            if locations.is_empty() {
                println!("No locations yet");
            }
            for location in locations {
                println!("  {}", location);
            }
        }
        Reply::View(view) => print_view("Network", view),
        Reply::Route(report) => print_route(report),
        Reply::Help => println!("{}", HELP),
        Reply::Quit => {}
    }
    Ok(())
}

fn render_error(format: Format, err: &AppError) -> AppResult<()> {
    if format == Format::Json {
        println!("{}", error_json(err));
    } else {
        println!("✗ {}", err);
    }
    Ok(())
}

fn print_route(report: &RouteReport) {
    println!("✓ Shortest Distance: {}", report.route.distance);
    println!("  Shortest Path: {}", report.route);
    print_view("Shortest Path Highlighted", &report.view);
}

fn print_view(title: &str, view: &NetworkView) {
    println!(
        "\n{} ({} locations, {} edges):",
        title,
        view.locations.len(),
        view.edges.len()
    );
    for edge in &view.edges {
        let weights: Vec<String> = edge.weights.iter().map(|w| w.to_string()).collect();
        let marker = if edge.on_path { "*" } else { " " };
        println!(
            "  {} {} -- {}  [{}]",
            marker,
            edge.from,
            edge.to,
            weights.join(", ")
        );
    }
}

fn print_timing_summary() {
    if !timing::is_enabled() {
        return;
    }
    if let Some(line) = timing::ROUTE_QUERIES.summary("Route queries") {
        eprintln!("\n[TIMING] {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn encode(reply: &Reply) -> Value {
        serde_json::from_str(&reply_json(reply).unwrap()).unwrap()
    }

    #[test]
    fn replies_are_tagged_with_kind_and_data() {
        let mut session = Session::new();
        let added = session.submit_road(&RoadForm::new("A", "B", "2")).unwrap();
        assert_eq!(
            encode(&Reply::RoadAdded(added)),
            json!({
                "kind": "road_added",
                "data": { "source": "A", "destination": "B", "distance": 2.0 }
            })
        );
        assert_eq!(encode(&Reply::Quit), json!({ "kind": "quit" }));
        assert_eq!(
            encode(&Reply::Locations(session.locations())),
            json!({ "kind": "locations", "data": ["A", "B"] })
        );
    }

    #[test]
    fn route_reply_carries_path_and_highlight() {
        let mut session = Session::new();
        for road in ["A,B,1", "B,C,2", "A,C,10"] {
            session.submit_road(&RoadForm::from_fields(road).unwrap()).unwrap();
        }
        let report = session.compute_route("A", "C").unwrap();
        let value = encode(&Reply::Route(report));

        assert_eq!(value["kind"], "route");
        assert_eq!(value["data"]["route"]["distance"], 3.0);
        assert_eq!(value["data"]["route"]["path"], json!(["A", "B", "C"]));
        let on_path = value["data"]["view"]["edges"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|edge| edge["on_path"] == true)
            .count();
        assert_eq!(on_path, 2);
    }

    #[test]
    fn bad_road_reports_user_message() {
        let err = cmd_route(Format::Json, &["A,B,abc".to_owned()], "A", "B").unwrap_err();
        assert!(matches!(err, AppError::MalformedDistance { .. }));
        assert_eq!(
            error_json(&err),
            json!({ "error": "Distance must be a number!", "informational": false })
        );
    }
}
