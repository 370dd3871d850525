mod config;
mod import;
mod services;
mod store;

use crate::config::{Cli, Command, ServeArgs};
use crate::store::DocumentStore;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use clap::Parser;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::from_path;
use std::io;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        // Data files must 404 so the client falls back to its defaults.
        None if file_path.starts_with("data/") => HttpResponse::NotFound().body("Not Found"),
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

async fn serve(store: DocumentStore, args: ServeArgs) -> io::Result<()> {
    let url = format!("http://{}:{}", args.host, args.port);

    if !args.no_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!("Server running at {} (store: {})", url, store.path().display());

    let store = web::Data::new(store);
    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(store.clone())
            .service(services::documents::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let cli = Cli::parse();

    let store = DocumentStore::open(&cli.database).map_err(|e| {
        error!("Cannot open {}: {}", cli.database.display(), e);
        io::Error::other(e)
    })?;

    match cli.command {
        Some(Command::Import(args)) => {
            let written = import::run(&store, &args.dataset, &args.collection).map_err(|e| {
                error!("Import failed: {}", e);
                io::Error::other(e)
            })?;
            info!("Imported {} documents into '{}'", written, args.collection);
            Ok(())
        }
        Some(Command::Serve) | None => serve(store, cli.serve).await,
    }
}
