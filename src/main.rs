use anyhow::Context;
use argus::agents::{AgentRegistry, AgentRole, ExecutionProxy};
use argus::cli::output::Output;
use argus::cli::{AgentCommands, Cli, Commands, SearchArgs};
use argus::engine::{RunOptions, SearchEngine, SearchRun, failure_message};
use argus::llm::{ModelChoice, ModelConfig};
use argus::report::{classify, task_prompt};
use argus::session::SearchSession;
use argus::types::SearchQuery;
use argus::utils::config::ArgusConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let loaded = ArgusConfig::load_or_default(&cli.config);
    if let Commands::Config { validate } = cli.command {
        return show_config(&output, &cli, loaded, validate);
    }
    let config = loaded.with_context(|| format!("failed to load {}", cli.config.display()))?;

    init_tracing(&config.output.log_level, cli.verbose, cli.log_json)?;

    match cli.command {
        Commands::Search(args) => search(&output, config, args).await,
        Commands::Agents(command) => agents(&output, &config, command),
        Commands::Models => {
            models(&output, &config);
            Ok(())
        }
        Commands::Classify { topic } => {
            output.kv(&topic, &classify(&topic).to_string());
            Ok(())
        }
        Commands::Config { .. } => Ok(()),
    }
}

fn init_tracing(level: &str, verbose: bool, json: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

async fn search(output: &Output, mut config: ArgusConfig, args: SearchArgs) -> anyhow::Result<()> {
    if let Some(dir) = args.out_dir.clone() {
        config.output.dir = dir;
    }

    let choice = args
        .model
        .as_deref()
        .map(str::parse::<ModelChoice>)
        .transpose()
        .map_err(anyhow::Error::msg)?;
    let api_key = args.api_key.clone().or_else(|| config.api_key().ok());
    let mut model = ModelConfig::from_config(&config.llm, api_key);
    if let Some(choice) = choice {
        model = model.with_model(choice);
    }
    if args.live_review && !model.has_credential() {
        output.warning(&format!(
            "Live review needs an API key: set {} or pass --api-key",
            config.llm.api_key_env
        ));
    }

    ExecutionProxy::new(&config.execution)
        .ensure_work_dir()
        .context("failed to prepare the code execution directory")?;

    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let max_results = args.max_results.unwrap_or(config.search.max_results);
    let query = SearchQuery::new(args.topic.clone(), date, max_results);
    let options = RunOptions {
        seed: args.seed.or(config.report.seed),
        live_review: args.live_review,
        export: !args.no_export,
    };

    output.banner();
    output.step(1, 2, &format!("Searching \"{}\" ({} results max)", query.topic, max_results));
    output.kv("Model", &model.model);

    let mut session = SearchSession::new();
    let outcome = async {
        let engine = SearchEngine::new(&config, model)?;
        output.step(2, 2, "Generating report and chart");
        engine.run(&query, &options, &mut session).await
    }
    .await;

    match outcome {
        Ok(run) => print_run(output, &run),
        Err(error) => output.error(&failure_message(&error)),
    }

    Ok(())
}

fn print_run(output: &Output, run: &SearchRun) {
    output.success(&format!(
        "Collected {} results; {} report",
        run.result_count,
        run.domain.to_string().to_lowercase()
    ));
    output.document(&run.report);
    output.chart(&run.chart);

    if let Some(review) = &run.review {
        output.info(&format!(
            "Live review ran {} round(s){}",
            review.reviews.len(),
            if review.terminated {
                ", ended by sentinel"
            } else {
                ""
            }
        ));
    }

    for (kind, path) in [
        ("report", &run.files.report),
        ("results", &run.files.results),
        ("chart", &run.files.chart),
    ] {
        if let Some(path) = path {
            output.created(kind, &path.display().to_string());
        }
    }

    output.complete("Search complete");
}

fn agents(output: &Output, config: &ArgusConfig, command: AgentCommands) -> anyhow::Result<()> {
    let registry = AgentRegistry::build_pipeline(ModelConfig::from_config(&config.llm, None));

    match command {
        AgentCommands::List => {
            output.header("Agent Pipeline");
            output.table_header(&["Name", "Role", "Terminates when"]);
            for agent in registry.agents() {
                output.table_row(&[
                    agent.name(),
                    agent.role().slug(),
                    &agent.role().termination().to_string(),
                ]);
            }

            let review = registry.nested_review();
            output.subheader(&format!(
                "Nested review ({} after {} drafts)",
                review.owner().name(),
                review.trigger().name()
            ));
            for (i, step) in review.steps().iter().enumerate() {
                output.list_item(&format!(
                    "{}. {} ({} turn)",
                    i + 1,
                    step.reviewer.name(),
                    step.max_turns
                ));
            }
        }
        AgentCommands::Show { name } => {
            let agent = match name.parse::<AgentRole>() {
                Ok(role) => registry.get(role),
                Err(_) => registry.get_by_name(&name),
            }
            .with_context(|| format!("no agent named '{}'", name))?;
            let role = agent.role();

            output.header(agent.name());
            output.kv("Role", role.slug());
            output.kv("Description", role.description());
            output.kv("Model", &agent.model().model);
            output.kv("Terminates when", &role.termination().to_string());
            output.kv("Reviewer", if role.is_reviewer() { "yes" } else { "no" });

            let prompt = match (role, agent.system_prompt()) {
                (_, Some(prompt)) => Some(prompt.to_string()),
                (AgentRole::TaskAssistant, None) => {
                    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
                    Some(task_prompt("<topic>", &today))
                }
                _ => None,
            };
            match prompt {
                Some(prompt) => {
                    output.subheader("System prompt");
                    output.document(&prompt);
                }
                None => output.info("Runs code blocks from recent messages; no system prompt"),
            }
        }
    }

    Ok(())
}

fn models(output: &Output, config: &ArgusConfig) {
    output.header("Models");
    output.table_header(&["Label", "Model id"]);
    for choice in ModelChoice::ALL {
        output.table_row(&[choice.label(), choice.model_id()]);
    }
    output.hint(&format!(
        "Default from configuration: {} (select with --model)",
        config.llm.model
    ));
}

fn show_config(
    output: &Output,
    cli: &Cli,
    loaded: Result<ArgusConfig, argus::utils::config::ConfigError>,
    validate: bool,
) -> anyhow::Result<()> {
    let config = match loaded {
        Ok(config) => config,
        Err(error) => {
            output.error(&format!("{}: {}", cli.config.display(), error));
            anyhow::bail!("invalid configuration");
        }
    };

    if validate {
        output.success(&format!("{} is valid", cli.config.display()));
        return Ok(());
    }

    output.header("Configuration");
    output.kv("File", &cli.config.display().to_string());
    output.subheader("Search");
    output.kv("Max results", &config.search.max_results.to_string());
    output.kv("Timeout (s)", &config.search.timeout_secs.to_string());
    output.kv("Web", &config.search.web_base_url);
    output.kv("Encyclopedia", &config.search.encyclopedia_api_url);
    output.kv("News", &config.search.news_base_url);
    output.subheader("LLM");
    output.kv("Model", &config.llm.model);
    output.kv("Base URL", &config.llm.base_url);
    output.kv(
        "API key",
        if config.api_key().is_ok() {
            "set"
        } else {
            "not set"
        },
    );
    output.subheader("Output");
    output.kv("Directory", &config.output.dir.display().to_string());
    output.kv("Code execution", &config.execution.work_dir.display().to_string());
    Ok(())
}
