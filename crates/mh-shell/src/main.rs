mod cli;
mod layout;
mod page;
mod shell;

use std::path::PathBuf;
use std::sync::Arc;

use mh_common::{ConfigError, MhError};
use mh_config::store::{
    append_entry, list_key, load_entries, migrate_legacy, save_entries, select_list, write_flag,
    AUTO_KEY, SCROLL_MARKS_KEY,
};
use mh_config::toml_loader::{default_store_path, load_default, load_from_path};
use mh_config::{
    export_entries, import_entries, EntryStore, JsonFileStore, MhConfig, SearchEntry,
};
use mh_engine::highlight::sanitize::validate_color;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::page::PageDesc;
use crate::shell::{Shell, TabStatus};

const TAB_ID: u32 = 1;

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Settings are read before logging starts so their level can apply.
    let loaded = match &args.config {
        Some(path) => load_from_path(path),
        None => load_default(),
    };

    let log_directive = args
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| format!("mh={}", c.logging.level)))
        .unwrap_or_else(|| "mh=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "mh=info".parse().unwrap()),
            ),
        )
        .init();

    let config = match loaded {
        Ok(config) => {
            if let Err(e) = mh_config::validation::validate(&config) {
                tracing::warn!("Config validation: {e}");
            }
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {e}");
            MhConfig::default()
        }
    };

    if let Err(e) = run(args, config).await {
        eprintln!("mh: {e}");
        std::process::exit(1);
    }
}

fn store_path(args: &Args, config: &MhConfig) -> Result<PathBuf, ConfigError> {
    match args.store.clone().or_else(|| config.store.path.clone()) {
        Some(path) => Ok(path),
        None => default_store_path(),
    }
}

/// `--list N` or the selected list, migrating a legacy store first.
async fn target_list(store: &dyn EntryStore, list: Option<u32>) -> Result<String, MhError> {
    let current = migrate_legacy(store).await?;
    Ok(list.map(list_key).unwrap_or(current))
}

async fn run(args: Args, config: MhConfig) -> Result<(), MhError> {
    let path = store_path(&args, &config)?;
    tracing::debug!(path = %path.display(), "using entry store");
    let store: Arc<dyn EntryStore> = Arc::new(JsonFileStore::new(path));

    match args.command {
        Command::Scan { page, on_update } => {
            let desc = PageDesc::load(&page)?;
            let document = desc.document()?;
            let shell = Shell::from_config(Arc::clone(&store), &config);
            let (client_height, scroll_top) = desc
                .viewport
                .map_or((layout::DEFAULT_CLIENT_HEIGHT, 0.0), |v| {
                    (v.client_height, v.scroll_top)
                });
            let host =
                layout::overlay_host(&document, shell.options().walk, client_height, scroll_top);
            let mut tab = shell.open_tab(TAB_ID, desc.url.clone(), document, host);

            let report = if on_update {
                shell.on_tab_updated(&mut tab, TabStatus::Complete).await
            } else {
                shell.dispatch(&mut tab).await
            };
            let Some(report) = report else {
                println!("skipped");
                return Ok(());
            };
            for (i, count) in report.counts.iter().enumerate() {
                println!("frame {i}: {count}");
            }
            println!("total: {}", report.total);
            println!("badge: {}", shell.badge().text(TAB_ID));
            if let Some(frame) = tab.minimap_overlay().and_then(|o| o.frame.as_ref()) {
                println!("minimap ticks: {}", frame.tick_count());
            }
        }
        Command::Export { list } => {
            let key = target_list(store.as_ref(), list).await?;
            let entries = load_entries(store.as_ref(), &key).await?;
            println!("{}", export_entries(&entries)?);
        }
        Command::Import { file, list } => {
            let text = tokio::fs::read_to_string(&file).await?;
            let entries = import_entries(&text)?;
            let key = target_list(store.as_ref(), list).await?;
            save_entries(store.as_ref(), &key, &entries).await?;
            println!("imported {} entries into {key}", entries.len());
        }
        Command::Add {
            word,
            color,
            match_case,
            whole_word,
            list,
        } => {
            if word.trim().is_empty() {
                return Err(MhError::Other("cannot add a blank word".into()));
            }
            validate_color(&color).map_err(|e| MhError::Other(e.to_string()))?;
            let entry = SearchEntry::from_typed(&word, &color, match_case, whole_word);
            let kind = if entry.re { "regex" } else { "word" };
            let key = target_list(store.as_ref(), list).await?;
            let len = append_entry(store.as_ref(), &key, entry).await?;
            println!("added {kind} to {key} ({len} entries)");
        }
        Command::Select { list } => {
            if list == 0 {
                return Err(MhError::Other("list numbers start at 1".into()));
            }
            migrate_legacy(store.as_ref()).await?;
            let key = list_key(list);
            if store.get(&key).await?.is_none() {
                save_entries(store.as_ref(), &key, &[]).await?;
            }
            select_list(store.as_ref(), &key).await?;
            println!("selected {key}");
        }
        Command::Auto { state } => {
            write_flag(store.as_ref(), AUTO_KEY, state.is_on()).await?;
        }
        Command::Marks { state } => {
            write_flag(store.as_ref(), SCROLL_MARKS_KEY, state.is_on()).await?;
        }
    }
    Ok(())
}
