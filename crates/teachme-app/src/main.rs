mod backend;
mod cli;
mod repl;

use std::process::ExitCode;

use teachme_config::TeachMeConfig;
use teachme_tutor::TutorSession;
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
/// Variables already set in the environment win.
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        std::path::PathBuf::from(".env"),
        // Workspace root, two levels up from crates/teachme-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn init_logging(directive: &str) {
    let directive: tracing_subscriber::filter::Directive = directive
        .parse()
        .unwrap_or_else(|_| "teachme=info".parse().expect("static directive is valid"));
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: cli::Args, config: TeachMeConfig) -> teachme_common::Result<()> {
    let mut model = config.model.clone();
    if let Some(provider) = args.provider {
        model.provider = provider;
    }

    let client = backend::build_client(&model)
        .map_err(|e| teachme_common::TeachMeError::Completion(e.to_string()))?;
    tracing::info!(
        provider = %client.provider(),
        model = %client.model(),
        "completion backend ready"
    );

    let profile = cli::resolve_profile(&config.student, &args);
    let window = args.window.unwrap_or(config.session.window_pairs);
    let mut session = TutorSession::new(profile, client).with_window_pairs(window);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    repl::run(&mut session, stdin, &mut stdout).await
}

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv();

    let args = cli::parse();

    // Config is read before logging starts so its level can apply.
    let loaded = teachme_config::load_config(args.config.as_deref());

    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => "teachme=info".to_string(),
    };
    init_logging(&directive);

    tracing::info!("teachme v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("Config load failed: {e}");
            eprintln!("teachme: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            TeachMeConfig::default()
        }
    };

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("teachme: {e}");
            ExitCode::FAILURE
        }
    }
}
