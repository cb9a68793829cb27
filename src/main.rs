#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod http_handler;
mod logger;
mod neo;
mod view;

use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::neo_browse_get::NeoBrowseRequest;
use crate::http_handler::http_request::request_common::NoBodyHTTPRequestType;
use crate::neo::{Catalog, Selection};
use crate::view::ViewMode;
use clap::Parser;
use std::env;
use tokio::io::{AsyncBufReadExt, BufReader};

const DEFAULT_BASE_URL: &str = "https://api.nasa.gov";

/// Terminal browser for the NASA NeoWs near-Earth object catalog.
#[derive(Parser, Debug)]
#[command(name = "neoscope", version, about)]
struct Args {
    /// API key for api.nasa.gov.
    #[arg(long, env = "NEO_API_KEY", default_value = "DEMO_KEY")]
    api_key: String,
    /// Initial rendering of the catalog.
    #[arg(long, value_enum, default_value_t = ViewMode::Table)]
    view: ViewMode,
    /// Orbiting body to preselect as a filter; may be given multiple times.
    #[arg(long = "filter", value_name = "BODY")]
    filter: Vec<String>,
    /// Keep accepting view and filter commands after the first render.
    #[arg(long)]
    interactive: bool,
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let args = Args::parse();
    let base_url_var = env::var("NEO_BASE_URL");
    let base_url = base_url_var.as_ref().map_or(DEFAULT_BASE_URL, |v| v.as_str());
    let client = HTTPClient::new(base_url);

    info!("Fetching NEO catalog from {base_url}");
    let request = NeoBrowseRequest { api_key: args.api_key.clone() };
    let response = match request.send_request(&client).await {
        Ok(response) => response,
        Err(err) => {
            error!("Catalog fetch failed: {err}");
            println!("no data available");
            return;
        }
    };

    let (catalog, skipped) = Catalog::from_response(&response);
    if skipped > 0 {
        warn!("Skipped {skipped} malformed catalog entries");
    }
    info!(
        "Loaded {} records across {} orbiting bodies",
        catalog.len(),
        catalog.vocabulary().len()
    );

    let mut selection = Selection::new();
    for body in &args.filter {
        selection.toggle(body);
    }
    if !selection.is_empty() {
        log!("Filtering on {} of {} orbiting bodies", selection.len(), catalog.vocabulary().len());
    }

    let mut mode = args.view;
    print!("{}", view::render(mode, &catalog.visible(&selection)));

    if args.interactive {
        run_command_loop(&catalog, &mut selection, &mut mode).await;
    }
}

/// Serializes all selection and view-mode changes through stdin, one
/// command per line, re-rendering after each change.
async fn run_command_loop(catalog: &Catalog, selection: &mut Selection, mode: &mut ViewMode) {
    println!("Commands: table, chart, bodies, toggle <body>, help, quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => return,
            Err(err) => {
                error!("Failed to read command: {err}");
                return;
            }
        };
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        match command {
            "quit" | "exit" => return,
            "help" => println!("Commands: table, chart, bodies, toggle <body>, help, quit"),
            "table" => {
                *mode = ViewMode::Table;
                print!("{}", view::render(*mode, &catalog.visible(selection)));
            }
            "chart" => {
                *mode = ViewMode::Chart;
                print!("{}", view::render(*mode, &catalog.visible(selection)));
            }
            "bodies" => {
                for body in catalog.vocabulary() {
                    let mark = if selection.contains(body) { 'x' } else { ' ' };
                    println!("  [{mark}] {body}");
                }
            }
            _ => match command.split_once(' ') {
                Some(("toggle", argument)) => {
                    let body = argument.trim();
                    if selection.toggle(body) {
                        log!("{body} selected");
                    } else {
                        log!("{body} deselected");
                    }
                    print!("{}", view::render(*mode, &catalog.visible(selection)));
                }
                _ => warn!("Unknown command: {command}"),
            },
        }
    }
}
