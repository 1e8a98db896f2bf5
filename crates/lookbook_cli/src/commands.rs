//! Command dispatch for the `lookbook` binary.
//!
//! # Invariants
//! - Every command fails with a single user-facing message string.
//! - Listing commands go through `DirectoryView` so filtering matches the
//!   library semantics exactly.

use crate::{Cli, Commands, KindArg, ListArgs, SettingsCommand, SlugArgs};
use lookbook_core::logging::redact_secret;
use lookbook_core::service::company_service::COMPANY_NOT_FOUND;
use lookbook_core::{
    AirtableFeedback, CardView, CompanyDetailService, CompanyRepository, CredentialTriple,
    DescriptionService, DirectoryView, EntityKind, EntityRepository, ExaClient, FeedbackKind,
    FeedbackToggle, FounderRepository, HttpTransport, LookbookConfig, MentorRepository,
    ReqwestTransport, SettingsStore, ViewFailure,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

type CommandResult = Result<(), String>;

pub fn run(cli: Cli) -> CommandResult {
    let store = cli.settings.map(SettingsStore::new);
    let config = || load_config(store.as_ref());

    match cli.command {
        Commands::Mentors(args) => list(MentorRepository::mentors(&config()?, http()?), &args),
        Commands::Founders(args) => list(FounderRepository::founders(&config()?, http()?), &args),
        Commands::Companies(args) => {
            list(CompanyRepository::companies(&config()?, http()?), &args)
        }
        Commands::Mentor(args) => show_one(MentorRepository::mentors(&config()?, http()?), &args),
        Commands::Founder(args) => {
            show_one(FounderRepository::founders(&config()?, http()?), &args)
        }
        Commands::Company(args) => show_company(&config()?, http()?, &args),
        Commands::Facets { kind } => {
            let config = config()?;
            match EntityKind::from(kind) {
                EntityKind::Mentor => facets(MentorRepository::mentors(&config, http()?)),
                EntityKind::Founder => facets(FounderRepository::founders(&config, http()?)),
                EntityKind::Company => facets(CompanyRepository::companies(&config, http()?)),
            }
        }
        Commands::Vote {
            record_id,
            company,
            reaction,
            table,
        } => {
            let feedback = AirtableFeedback::for_kind(&config()?, table.into(), http()?)
                .map_err(|err| err.user_message())?;
            let kind = FeedbackKind::from(reaction);
            let value = feedback
                .toggle(&record_id, &company, kind)
                .map_err(|err| err.user_message())?;
            println!("{} = {value}", kind.field_name(&company));
            Ok(())
        }
        Commands::Describe { slug } => describe(&config()?, http()?, &slug),
        Commands::Settings { command } => settings(command, store.as_ref()),
    }
}

fn http() -> Result<Arc<dyn HttpTransport>, String> {
    let transport = ReqwestTransport::new().map_err(|err| err.to_string())?;
    Ok(Arc::new(transport))
}

fn settings(command: SettingsCommand, store: Option<&SettingsStore>) -> CommandResult {
    match command {
        SettingsCommand::Show => {
            let config = load_config(store)?;
            show_settings(&config, store);
            Ok(())
        }
        SettingsCommand::Save {
            kind,
            token,
            base_id,
            table,
        } => save_settings(store, kind, &token, &base_id, &table),
    }
}

fn load_config(store: Option<&SettingsStore>) -> Result<LookbookConfig, String> {
    let config = LookbookConfig::from_env();
    match store {
        Some(store) => {
            let saved = store.load().map_err(|err| err.to_string())?;
            Ok(config.with_settings(&saved))
        }
        None => Ok(config),
    }
}

fn load_view<R: EntityRepository>(repo: R) -> Result<DirectoryView<R>, String> {
    let mut view = DirectoryView::new(repo);
    view.load();
    if let Some(failure) = view.failure() {
        return Err(failure.message.clone());
    }
    Ok(view)
}

fn list<R>(repo: R, args: &ListArgs) -> CommandResult
where
    R: EntityRepository,
    R::Entity: CardView + Serialize,
{
    let mut view = load_view(repo)?;
    let filters = view.filters_mut();
    for tag in &args.tags {
        if !filters.selected_tags().contains(tag) {
            filters.toggle_tag(tag);
        }
    }
    filters.select_date(args.date.clone());

    if args.json {
        return print_json(&view.visible());
    }

    let cards = view.cards();
    if cards.is_empty() {
        println!("No {} found.", view.kind().plural());
        return Ok(());
    }
    for card in cards {
        println!("{}\n", card.render_text());
    }
    Ok(())
}

fn show_one<R>(repo: R, args: &SlugArgs) -> CommandResult
where
    R: EntityRepository,
    R::Entity: CardView + Serialize,
{
    let kind = repo.kind();
    let entity = repo
        .fetch_by_slug(&args.slug)
        .map_err(|err| ViewFailure::from_error(kind, &err).message)?
        .ok_or_else(|| format!("No {kind} with slug `{}`", args.slug))?;

    if args.json {
        return print_json(&entity);
    }
    println!("{}", entity.card().render_text());
    Ok(())
}

fn show_company(
    config: &LookbookConfig,
    transport: Arc<dyn HttpTransport>,
    args: &SlugArgs,
) -> CommandResult {
    let service = CompanyDetailService::new(
        CompanyRepository::companies(config, Arc::clone(&transport)),
        FounderRepository::founders(config, transport),
    );
    let detail = service
        .load(&args.slug)
        .map_err(|err| err.user_message())?
        .ok_or_else(|| COMPANY_NOT_FOUND.to_string())?;

    if args.json {
        return print_json(&json!({
            "company": detail.company,
            "founders": detail.founders,
        }));
    }
    println!("{}", detail.company.card().render_text());
    if detail.founders.is_empty() {
        return Ok(());
    }
    println!("\nFounders:");
    for founder in &detail.founders {
        println!("{}\n", founder.card().render_text());
    }
    Ok(())
}

fn facets<R: EntityRepository>(repo: R) -> CommandResult {
    let view = load_view(repo)?;
    let facets = view.facets();
    println!("tags: {}", facets.all_tags.join(", "));
    println!("dates: {}", facets.available_dates.join(", "));
    Ok(())
}

fn describe(
    config: &LookbookConfig,
    transport: Arc<dyn HttpTransport>,
    slug: &str,
) -> CommandResult {
    let mentor = MentorRepository::mentors(config, Arc::clone(&transport))
        .fetch_by_slug(slug)
        .map_err(|err| err.user_message())?
        .ok_or_else(|| format!("No mentor with slug `{slug}`"))?;
    let service = DescriptionService::new(ExaClient::new(config.exa.clone(), transport));
    let text = service
        .describe_mentor(&mentor)
        .map_err(|err| err.user_message())?;
    println!("{text}");
    Ok(())
}

fn show_settings(config: &LookbookConfig, store: Option<&SettingsStore>) {
    match store {
        Some(store) => println!("settings file: {}", store.path().display()),
        None => println!("settings file: <none>"),
    }
    println!("airtable api: {}", config.airtable_api_url);
    for kind in EntityKind::ALL {
        let triple = config.credentials(kind);
        println!(
            "{kind}: token={} base={} table={}{}",
            redact_secret(&triple.token),
            blank_as_unset(&triple.base_id),
            blank_as_unset(&triple.table),
            if triple.is_complete() { "" } else { " (incomplete)" },
        );
    }
    println!(
        "exa: key={} model={} api={}",
        redact_secret(&config.exa.api_key),
        config.exa.model,
        config.exa.api_url
    );
}

fn save_settings(
    store: Option<&SettingsStore>,
    kind: KindArg,
    token: &str,
    base_id: &str,
    table: &str,
) -> CommandResult {
    let store = store.ok_or_else(|| {
        "no settings file configured; pass --settings or set LOOKBOOK_SETTINGS".to_string()
    })?;
    let kind = EntityKind::from(kind);
    store
        .save(kind, CredentialTriple::new(token, base_id, table))
        .map_err(|err| err.to_string())?;
    println!("saved {kind} credentials to {}", store.path().display());
    Ok(())
}

fn blank_as_unset(value: &str) -> &str {
    if value.trim().is_empty() {
        "<unset>"
    } else {
        value
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CommandResult {
    let encoded = serde_json::to_string_pretty(value).map_err(|err| err.to_string())?;
    println!("{encoded}");
    Ok(())
}
