use std::collections::HashMap;
use std::error::Error;
use std::io::Read;
use std::{env, fs};

use serde::Deserialize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use rule_catalog::{RuleCatalog, builtin, index};
use rule_resolver::{ContextSignals, ContextTier, resolve};

/// One resolution request as handed over by the agent runtime.
#[derive(Debug, Deserialize)]
struct ResolutionRequest {
    active_file: Option<String>,
    #[serde(default)]
    manifests: HashMap<String, String>,
    #[serde(default)]
    request_text: String,
    #[serde(default)]
    explicit_rules: Vec<String>,
    #[serde(default)]
    disable_auto_load: bool,
    context_tier: ContextTier,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env if present; the built-in catalog
    // needs no configuration at all.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let catalog = load_catalog()?;
    tracing::info!(rules = catalog.len(), "rule catalog ready");

    let raw = read_request()?;
    let req: ResolutionRequest = serde_json::from_str(&raw)?;

    let signals = ContextSignals::extract(
        req.active_file.as_deref(),
        req.manifests,
        &req.request_text,
        req.explicit_rules,
        req.disable_auto_load,
    );
    let result = resolve(&catalog, &signals, req.context_tier);

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

/// Catalog from `RULES_INDEX_PATH` when set, otherwise the built-in corpus.
fn load_catalog() -> Result<RuleCatalog, Box<dyn Error>> {
    match env::var("RULES_INDEX_PATH") {
        Ok(path) => Ok(index::load_from_path(&path)?),
        Err(_) => Ok(builtin::default_catalog()),
    }
}

/// Request JSON from `RULES_REQUEST_PATH` when set, otherwise stdin.
fn read_request() -> Result<String, Box<dyn Error>> {
    match env::var("RULES_REQUEST_PATH") {
        Ok(path) => Ok(fs::read_to_string(path)?),
        Err(_) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
