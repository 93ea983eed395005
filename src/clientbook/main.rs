use clap::Parser;
use clientbook::api::{ClientApi, ClientbookPaths, ConfigAction};
use clientbook::config::{ClientbookConfig, KEYS};
use clientbook::error::{ClientError, Result};
use clientbook::model::{ClientId, Purchase};
use clientbook::store::fs::FileStore;
use directories::ProjectDirs;
use tracing::level_filters::LevelFilter;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::{Cli, Commands, FieldArg, SortArg};
use cli::input;
use cli::print::{print_all, print_client, print_clients, print_messages, ViewOptions};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ClientApi<FileStore>,
    view: ViewOptions,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Add {
            name,
            city,
            phone,
            tags,
        }) => handle_add(&mut ctx, &name, &city, &phone, tags.as_deref()),
        Some(Commands::Update {
            id,
            name,
            city,
            phone,
            tags,
        }) => handle_update(
            &mut ctx,
            id,
            name.as_deref(),
            city.as_deref(),
            phone.as_deref(),
            tags.as_deref(),
        ),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Buy { id, amount, date }) => {
            handle_buy(&mut ctx, id, &amount, date.as_deref())
        }
        Some(Commands::Search { field, query }) => handle_search(&ctx, field, &query),
        Some(Commands::Sort { by }) => handle_sort(&ctx, by),
        Some(Commands::Demo) => cli::demo::run(&mut ctx.api, &ctx.view),
        Some(Commands::Menu) => {
            let stdin = std::io::stdin();
            cli::menu::run(&mut ctx.api, &ctx.view, stdin.lock())
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

/// Logs go to stderr so they never mix with listings. `RUST_LOG` wins over
/// the defaults.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.home {
        Some(home) => home.clone(),
        None => ProjectDirs::from("com", "clientbook", "clientbook")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| ClientError::Config("Could not determine a home directory".into()))?,
    };

    let config = ClientbookConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        ClientbookConfig::default()
    });
    let data_file = cli
        .data
        .clone()
        .unwrap_or_else(|| config.data_file_in(&config_dir));
    debug!(config_dir = %config_dir.display(), data_file = %data_file.display(), "paths resolved");

    let store = FileStore::new(&data_file);
    let paths = ClientbookPaths {
        config_dir,
        data_file,
    };
    let api = ClientApi::open(store, paths)?;

    Ok(AppContext {
        api,
        view: ViewOptions {
            currency: config.currency,
            recent_purchases: config.recent_purchases,
        },
    })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_all(&result.listed_clients, result.summary, &ctx.view);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: ClientId) -> Result<()> {
    let result = ctx.api.get_client(id)?;
    for client in &result.listed_clients {
        print_client(client, &ctx.view, true);
        if !client.tags.is_empty() {
            println!("   Tags: {}", client.tags.join(", "));
        }
        println!("   Purchases recorded: {}", client.purchases.len());
    }
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    name: &str,
    city: &str,
    phone: &str,
    tags: Option<&str>,
) -> Result<()> {
    let draft = input::new_client(name, city, phone, tags.unwrap_or_default())?;
    let result = ctx.api.add_client(draft)?;
    print_messages(&result.messages);
    print_messages(&ctx.api.save()?.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    id: ClientId,
    name: Option<&str>,
    city: Option<&str>,
    phone: Option<&str>,
    tags: Option<&str>,
) -> Result<()> {
    let patch = input::patch(name, city, phone, tags)?;
    let result = ctx.api.update_client(id, &patch)?;
    print_messages(&result.messages);
    if !patch.is_empty() {
        print_messages(&ctx.api.save()?.messages);
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: ClientId) -> Result<()> {
    let result = ctx.api.delete_client(id)?;
    print_messages(&result.messages);
    print_messages(&ctx.api.save()?.messages);
    Ok(())
}

fn handle_buy(ctx: &mut AppContext, id: ClientId, amount: &str, date: Option<&str>) -> Result<()> {
    let amount = input::parse_amount(amount)?;
    let date = input::parse_date(date)?;
    let result = ctx.api.record_purchase(id, Purchase::new(date, amount))?;
    print_messages(&result.messages);
    print_messages(&ctx.api.save()?.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, field: FieldArg, query: &str) -> Result<()> {
    let result = ctx.api.search(field.into(), query)?;
    print_clients(&result.listed_clients, &ctx.view, true);
    print_messages(&result.messages);
    Ok(())
}

fn handle_sort(ctx: &AppContext, by: SortArg) -> Result<()> {
    let result = ctx.api.sorted(by.into())?;
    print_clients(&result.listed_clients, &ctx.view, false);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
