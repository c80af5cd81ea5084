//! Command implementations for the pharmadex CLI.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use crate::allergy::screen_message;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::PharmaConfig;
use crate::error::{PharmaError, Result};
use crate::label::projector::LabelProjector;
use crate::label::query::{LabelQuery, parse_label_response};
use crate::label::record::LabelRecord;
use crate::label::source::{FileLabelSource, LabelSearch};
use crate::pill::PillQuery;
use crate::session::Session;
use crate::storage::FileStorage;
use crate::tables::Tables;

/// Execute a CLI command.
pub fn execute_command(args: PharmaArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let tables = Tables::load(&config)?;

    match &args.command {
        Command::Terms(query_args) => show_terms(query_args, &tables, &args),
        Command::LabelQuery(query_args) => show_label_query(query_args, &tables, &config, &args),
        Command::Search(search_args) => search_labels(search_args, &tables, &config, &args),
        Command::Detail(detail_args) => show_detail(detail_args, &config, &args),
        Command::Interactions(interaction_args) => {
            let mut session = open_session(&tables, &config)?;
            check_interactions(interaction_args, &mut session, &args)
        }
        Command::Pill(pill_args) => {
            let session = open_session(&tables, &config)?;
            identify_pill(pill_args, &session, &args)
        }
        Command::Meds(meds_command) => {
            let mut session = open_session(&tables, &config)?;
            run_meds_command(meds_command, &mut session, &args)
        }
    }
}

/// Config file (if any) with command line overrides applied.
fn resolve_config(args: &PharmaArgs) -> Result<PharmaConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("loading config from {}", path.display());
            PharmaConfig::load(path)?
        }
        None => PharmaConfig::default(),
    };
    if let Some(dir) = &args.storage_dir {
        config = config.with_storage_dir(dir);
    }
    if let Command::Search(search_args) = &args.command
        && let Some(limit) = search_args.limit
    {
        config = config.with_search_limit(limit);
    }
    config.validate()?;
    Ok(config)
}

fn open_session<'t>(tables: &'t Tables, config: &PharmaConfig) -> Result<Session<'t>> {
    let storage = FileStorage::new(&config.storage_dir)?;
    Session::open(tables, config, Arc::new(storage))
}

fn show_terms(query_args: &QueryArgs, tables: &Tables, cli_args: &PharmaArgs) -> Result<()> {
    if query_args.query.trim().is_empty() {
        return Err(PharmaError::empty_input("search query"));
    }
    let terms = tables.synonyms.resolve_search_terms(&query_args.query);
    output_result(
        &TermsResult {
            query: query_args.query.clone(),
            terms,
        },
        cli_args,
    )
}

fn show_label_query(
    query_args: &QueryArgs,
    tables: &Tables,
    config: &PharmaConfig,
    cli_args: &PharmaArgs,
) -> Result<()> {
    let query = LabelQuery::resolve(&query_args.query, &tables.synonyms, config.search_limit)?;
    output_result(
        &LabelQueryResult {
            terms: query.terms().to_vec(),
            search: query.search_expression(),
            limit: query.limit(),
        },
        cli_args,
    )
}

fn search_labels(
    search_args: &SearchArgs,
    tables: &Tables,
    config: &PharmaConfig,
    cli_args: &PharmaArgs,
) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let search = LabelSearch::new(
        FileLabelSource::new(&search_args.response),
        &tables.synonyms,
        config.search_limit,
    );

    let records = runtime
        .block_on(search.search(&search_args.query))?
        .unwrap_or_default();
    info!("{} label record(s) found", records.len());

    let projector = LabelProjector::new(config.summary_max_chars, config.detail_max_chars);
    output_result(
        &SearchResults {
            results: records.iter().map(|r| projector.project_summary(r)).collect(),
        },
        cli_args,
    )
}

fn show_detail(
    detail_args: &DetailArgs,
    config: &PharmaConfig,
    cli_args: &PharmaArgs,
) -> Result<()> {
    let records = read_response(&detail_args.response)?;
    let record = records.get(detail_args.index).ok_or_else(|| {
        PharmaError::invalid_argument(format!(
            "record index {} out of range ({} record(s))",
            detail_args.index,
            records.len()
        ))
    })?;

    let projector = LabelProjector::new(config.summary_max_chars, config.detail_max_chars);
    output_result(&projector.project_detail(record), cli_args)
}

fn read_response(path: &Path) -> Result<Vec<LabelRecord>> {
    let body = fs::read_to_string(path)?;
    parse_label_response(&body)
}

fn check_interactions(
    interaction_args: &InteractionArgs,
    session: &mut Session<'_>,
    cli_args: &PharmaArgs,
) -> Result<()> {
    for drug in &interaction_args.drugs {
        session.selection_mut().add(drug)?;
    }
    let findings = session.check_interactions()?;
    output_result(
        &InteractionReport {
            drugs: session.selection().list().to_vec(),
            findings,
        },
        cli_args,
    )
}

fn identify_pill(
    pill_args: &PillArgs,
    session: &Session<'_>,
    cli_args: &PharmaArgs,
) -> Result<()> {
    let query = PillQuery {
        shape: pill_args.shape,
        color: pill_args.color,
        imprint: pill_args.imprint.clone(),
    };
    let matches = session.identify_pill(&query)?;
    output_result(
        &PillReport {
            matches: matches.into_iter().cloned().collect(),
        },
        cli_args,
    )
}

fn run_meds_command(
    command: &MedsCommand,
    session: &mut Session<'_>,
    cli_args: &PharmaArgs,
) -> Result<()> {
    let message = match command {
        MedsCommand::Add { name } => {
            let added = session.medications_mut().add(name)?;
            Some(if added {
                format!("추가됨: {}", name.trim())
            } else {
                format!("이미 목록에 있습니다: {}", name.trim())
            })
        }
        MedsCommand::Remove { name } => {
            let removed = session.medications_mut().remove(name)?;
            Some(if removed {
                format!("삭제됨: {}", name.trim())
            } else {
                format!("목록에 없습니다: {}", name.trim())
            })
        }
        MedsCommand::List => None,
        MedsCommand::Clear => {
            session.medications_mut().clear()?;
            Some("목록을 비웠습니다.".to_string())
        }
        MedsCommand::CheckAllergy { allergy } => {
            let result = session.check_allergy(allergy)?;
            let message = screen_message(&result, allergy, &session.tables().allergy_groups);
            return output_result(
                &AllergyReport {
                    allergy: allergy.trim().to_string(),
                    result,
                    message,
                },
                cli_args,
            );
        }
        MedsCommand::CheckInteractions => {
            let findings = session.check_my_interactions()?;
            return output_result(
                &InteractionReport {
                    drugs: session.selection().list().to_vec(),
                    findings,
                },
                cli_args,
            );
        }
    };

    output_result(
        &MedicationReport {
            message,
            medications: session.medications().list().to_vec(),
        },
        cli_args,
    )
}
