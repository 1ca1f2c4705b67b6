//! Resolve a client route and fetch the translations it needs.
//!
//! Usage:
//!   cargo run --bin fetch-translations -- /fr/about
//!   cargo run --bin fetch-translations -- /en http://localhost:3001
//!
//! Optional:
//! - TRANSLATION_SERVER_URL (defaults to http://localhost:3001, overridden by the second argument)

use anyhow::{bail, Context, Result};
use i18n_site::{
    client::HttpTranslationClient,
    config::ClientConfig,
    resolver::{LanguageResolver, LoadState},
    routing::{header_links, resolve_route, Route},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fetch_translations=info".parse()?)
                .add_directive("i18n_site=info".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "/".to_string());
    let server_url = args
        .next()
        .unwrap_or_else(|| ClientConfig::from_env().server_url);

    // Follow redirects the way the router would
    let mut current = path;
    let route = loop {
        match resolve_route(&current) {
            Route::Redirect { to } if to != current => {
                info!("{} → {}", current, to);
                current = to;
            }
            Route::Redirect { to } => bail!("Redirect loop at {}", to),
            route => break route,
        }
    };

    let lang = route
        .language()
        .context("Resolved route has no language")?
        .to_string();

    println!("Route: {}", serde_json::to_string(&route)?);

    let header = header_links(&lang, &current);
    for link in header.nav.iter().chain(header.locales.iter()) {
        println!("  [{}] {}", link.label, link.href);
    }

    let client = HttpTranslationClient::new(&server_url)?;
    let resolver = LanguageResolver::new(client);
    resolver.resolve_active_language(&lang);

    match resolver.settled().await {
        LoadState::Ready { bundle, .. } => {
            println!("{}", serde_json::to_string_pretty(&*bundle)?);
            Ok(())
        }
        LoadState::Failed { lang, error } => bail!("Could not load '{}': {}", lang, error),
        other => bail!("Unexpected state: {:?}", other),
    }
}
