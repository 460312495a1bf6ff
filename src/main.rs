use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ativa_config::{FormConfig, RuleVariant};
use ativa_form::{Form, Notice, NoticeId, Presenter, PresenterError, mask_phone};
use ativa_transport::HttpTransport;
use ativa_validator::{Field, FieldValue, RuleSet, ValueKind};
use ativa_workflow::SubmissionWorkflow;

/// Ativa - account activation form core
#[derive(Parser)]
#[command(name = "ativa")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the form configuration (default: ~/.ativa/form.json if present)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Validate a single field value
  Validate {
    /// Field name, e.g. `email` or `confirm-registration`
    field: Field,

    /// Field value; `true`/`false` for the checkbox
    value: String,

    /// Rule table (overrides the configuration)
    #[arg(long, value_enum)]
    rules: Option<Rules>,
  },

  /// Submit a form read as JSON from stdin
  Submit,

  /// Format a raw phone number with the WhatsApp mask
  Mask { raw: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum Rules {
  Lenient,
  Strict,
}

impl From<Rules> for RuleVariant {
  fn from(rules: Rules) -> Self {
    match rules {
      Rules::Lenient => RuleVariant::Lenient,
      Rules::Strict => RuleVariant::Strict,
    }
  }
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();

  match cli.command {
    Some(Commands::Validate {
      field,
      value,
      rules,
    }) => {
      let config = load_config(cli.config.as_deref())?;
      validate(field, &value, rules.map_or(config.rules, RuleVariant::from))?;
    }
    Some(Commands::Submit) => {
      let config = load_config(cli.config.as_deref())?;
      let rt = tokio::runtime::Runtime::new()?;
      rt.block_on(submit(config))?;
    }
    Some(Commands::Mask { raw }) => {
      println!("{}", mask_phone(&raw));
    }
    None => {
      println!("ativa - use --help to see available commands");
    }
  }

  Ok(())
}

/// Explicit path, else `~/.ativa/form.json` when it exists, else defaults.
fn load_config(explicit: Option<&Path>) -> Result<FormConfig> {
  let path = match explicit {
    Some(path) => path.to_path_buf(),
    None => match dirs::home_dir().map(|home| home.join(".ativa").join("form.json")) {
      Some(path) if path.is_file() => path,
      _ => {
        debug!("no config file, using defaults");
        return Ok(FormConfig::default());
      }
    },
  };

  let config = FormConfig::load(&path)
    .with_context(|| format!("failed to load config: {}", path.display()))?;
  info!(path = %path.display(), form_id = %config.form_id, "loaded config");
  Ok(config)
}

fn validate(field: Field, raw: &str, variant: RuleVariant) -> Result<()> {
  let value = match field.kind() {
    ValueKind::Flag => FieldValue::Flag(
      raw
        .parse()
        .with_context(|| format!("'{field}' expects true or false, got '{raw}'"))?,
    ),
    ValueKind::Text => FieldValue::from(raw),
  };

  let rules = RuleSet::for_variant(variant);
  let result = rules.validate(field, &value);
  println!("{}", serde_json::to_string_pretty(&result)?);
  Ok(())
}

async fn submit(config: FormConfig) -> Result<()> {
  let values = read_form_from_stdin()?;
  let form = Form::from_json(&values).context("invalid form values")?;

  let transport = HttpTransport::new(&config.endpoint).context("failed to create transport")?;
  let presenter = Arc::new(TerminalPresenter::default());
  let workflow = SubmissionWorkflow::new(config, Arc::new(transport), presenter);

  let outcome = workflow.submit(&form).await;
  info!(outcome = ?outcome, state = ?workflow.state(), "submission finished");
  println!("{}", serde_json::to_string_pretty(&outcome)?);
  Ok(())
}

fn read_form_from_stdin() -> Result<serde_json::Value> {
  use std::io::IsTerminal;

  if io::stdin().is_terminal() {
    return Ok(serde_json::json!({}));
  }

  let mut input = String::new();
  io::stdin()
    .read_to_string(&mut input)
    .context("failed to read form from stdin")?;

  if input.trim().is_empty() {
    Ok(serde_json::json!({}))
  } else {
    serde_json::from_str(&input).context("failed to parse form JSON from stdin")
  }
}

/// Renders presenter calls as lines on stderr, keeping stdout for the
/// outcome.
#[derive(Default)]
struct TerminalPresenter {
  next_notice: AtomicU64,
}

impl Presenter for TerminalPresenter {
  fn mark_error(&self, field: Field, message: &str) -> Result<(), PresenterError> {
    eprintln!("  x {field}: {message}");
    Ok(())
  }

  fn mark_valid(&self, field: Field) -> Result<(), PresenterError> {
    eprintln!("  ok {field}");
    Ok(())
  }

  fn focus(&self, field: Field) {
    eprintln!("focus: {field}");
  }

  fn set_busy(&self, busy: bool) {
    if busy {
      eprintln!("Enviando...");
    }
  }

  fn show_progress(&self, message: &str) {
    eprintln!("{message}");
  }

  fn reveal_success(&self) {
    eprintln!("Ativação enviada com sucesso!");
  }

  fn navigate_to_success_page(&self, path: &str) {
    eprintln!("-> {path}");
  }

  fn show_notice(&self, notice: &Notice) -> NoticeId {
    eprintln!("{}: {}", notice.title, notice.message);
    NoticeId(self.next_notice.fetch_add(1, Ordering::Relaxed))
  }

  fn dismiss_notice(&self, _id: NoticeId) {}
}
