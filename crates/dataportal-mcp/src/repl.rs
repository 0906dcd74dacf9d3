//! Interactive REPL for the Dataportal MCP server.
//!
//! Launch with `dataportal-mcp repl`. Type `/help` for commands, Tab for
//! completion. `/call` runs a tool against the live upstreams.

use rustyline::completion::{Completer, Pair};
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Config as EditorConfig, Editor, Event, EventContext,
    EventHandler, Helper, KeyEvent, RepeatCount,
};
use serde_json::Value;
use tokio::runtime::Handle;

use crate::config::Config;
use crate::context::{ClientLog, ToolContext};
use crate::resources::ResourceRegistry;
use crate::tools::ToolRegistry;
use crate::types::{LogLevel, ToolContent};

/// Available REPL commands.
const COMMANDS: &[(&str, &str)] = &[
    ("/info", "Show server capabilities and tools"),
    ("/tools", "List mounted MCP tools"),
    ("/call", "Call a tool: /call <tool> [json arguments]"),
    ("/datasets", "List dataset resources"),
    ("/config", "Show resolved upstream configuration"),
    ("/level", "Show log messages at or above a level (off to hide)"),
    ("/clear", "Clear the screen"),
    ("/help", "Show available commands"),
    ("/exit", "Quit the REPL"),
];

const LEVELS: &[&str] = &["debug", "info", "warning", "error", "off"];

/// Tab completion for commands, tool names and log levels.
struct DataportalHelper {
    tool_names: Vec<String>,
}

impl Completer for DataportalHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        if !input.contains(' ') {
            let matches: Vec<Pair> = COMMANDS
                .iter()
                .filter(|(cmd, _)| cmd.starts_with(input))
                .map(|(cmd, desc)| Pair {
                    display: format!("{cmd:<16} {desc}"),
                    replacement: format!("{cmd} "),
                })
                .collect();
            return Ok((0, matches));
        }

        let (cmd, args) = input.split_once(' ').unwrap_or((input, ""));
        if args.contains(' ') {
            return Ok((pos, Vec::new()));
        }

        let candidates: Vec<&str> = match cmd {
            "/call" => self.tool_names.iter().map(String::as_str).collect(),
            "/level" => LEVELS.to_vec(),
            _ => Vec::new(),
        };

        let prefix_start = input.len() - args.len();
        let matches: Vec<Pair> = candidates
            .into_iter()
            .filter(|c| c.starts_with(args))
            .map(|c| Pair {
                display: c.to_string(),
                replacement: format!("{c} "),
            })
            .collect();
        Ok((prefix_start, matches))
    }
}

impl Hinter for DataportalHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|(cmd, _)| cmd.starts_with(line) && *cmd != line)
            .map(|(cmd, _)| cmd[line.len()..].to_string())
    }
}

impl Highlighter for DataportalHelper {}
impl Validator for DataportalHelper {}
impl Helper for DataportalHelper {}

struct TabCompleteOrAcceptHint;

impl ConditionalEventHandler for TabCompleteOrAcceptHint {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        if ctx.has_hint() {
            Some(Cmd::CompleteHint)
        } else {
            Some(Cmd::Complete)
        }
    }
}

struct ReplState {
    config: Config,
    context: ToolContext,
    runtime: Handle,
    level: Option<LogLevel>,
}

/// Run the interactive REPL. Must be called from a blocking thread inside a
/// Tokio runtime.
pub fn run(config: Config) -> anyhow::Result<()> {
    eprintln!();
    eprintln!(
        "  \x1b[32m\u{25c9}\x1b[0m \x1b[1mdataportal-mcp v{}\x1b[0m \x1b[90m\u{2014} Swedish open data for AI agents\x1b[0m",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!();
    eprintln!(
        "    Press \x1b[36m/\x1b[0m to browse commands, \x1b[90mTab\x1b[0m to complete, \x1b[90m/exit\x1b[0m to quit."
    );
    eprintln!();

    let editor_config = EditorConfig::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .completion_prompt_limit(20)
        .build();

    let tool_names = ToolRegistry::list_tools(config.service)
        .into_iter()
        .map(|t| t.name)
        .collect();

    let mut rl: Editor<DataportalHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(editor_config)?;
    rl.set_helper(Some(DataportalHelper { tool_names }));
    rl.bind_sequence(
        KeyEvent::from('\t'),
        EventHandler::Conditional(Box::new(TabCompleteOrAcceptHint)),
    );

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    let hist_path = std::path::PathBuf::from(&home).join(".dataportal_mcp_history");
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    let mut state = ReplState {
        context: ToolContext::new(&config),
        config,
        runtime: Handle::current(),
        level: Some(LogLevel::Warning),
    };
    let prompt = " \x1b[36mdataportal>\x1b[0m ";

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let input = line.strip_prefix('/').unwrap_or(line);
                if input.is_empty() {
                    cmd_help();
                    continue;
                }

                let (cmd, args) = input.split_once(' ').unwrap_or((input, ""));
                let args = args.trim();

                match cmd {
                    "exit" | "quit" => {
                        eprintln!("  \x1b[90m\u{2728}\x1b[0m Hej då!");
                        break;
                    }
                    "help" | "h" | "?" => cmd_help(),
                    "clear" | "cls" => eprint!("\x1b[2J\x1b[H"),
                    "info" => cmd_info(&state),
                    "tools" => cmd_tools(&state),
                    "call" => cmd_call(args, &state),
                    "datasets" => cmd_datasets(&state),
                    "config" => cmd_config(&state),
                    "level" => cmd_level(args, &mut state),
                    _ => {
                        eprintln!("  Unknown command '/{cmd}'. Type /help for commands.");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  \x1b[90m(Ctrl+C)\x1b[0m Type \x1b[1m/exit\x1b[0m to quit.");
            }
            Err(ReadlineError::Eof) => {
                eprintln!("  \x1b[90m\u{2728}\x1b[0m Hej då!");
                break;
            }
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    let _ = rl.save_history(&hist_path);

    Ok(())
}

fn cmd_help() {
    eprintln!();
    eprintln!("  Commands:");
    eprintln!();
    for (cmd, desc) in COMMANDS {
        eprintln!("    {cmd:<18} {desc}");
    }
    eprintln!();
    eprintln!("  Example: /call riksdagen_list_documents {{\"doktyp\": \"mot\", \"rm\": \"2023/24\"}}");
    eprintln!();
}

fn cmd_info(state: &ReplState) {
    let capabilities = crate::types::InitializeResult::default_result();
    let tools = ToolRegistry::list_tools(state.config.service);
    eprintln!();
    eprintln!(
        "  Server:   {} v{}",
        capabilities.server_info.name, capabilities.server_info.version
    );
    eprintln!("  Protocol: {}", capabilities.protocol_version);
    eprintln!("  Service:  {}", state.config.service.as_str());
    eprintln!("  Tools:    {}", tools.len());
    eprintln!();
}

fn cmd_tools(state: &ReplState) {
    let tools = ToolRegistry::list_tools(state.config.service);
    eprintln!();
    eprintln!("  {} MCP tools available:", tools.len());
    eprintln!();
    for tool in &tools {
        eprintln!("    {}", tool.name);
        if let Some(description) = &tool.description {
            eprintln!("      \x1b[90m{description}\x1b[0m");
        }
    }
    eprintln!();
}

fn cmd_call(args: &str, state: &ReplState) {
    let (name, raw) = args.split_once(' ').unwrap_or((args, ""));
    if name.is_empty() {
        eprintln!("  Usage: /call <tool> [json arguments]");
        return;
    }

    let arguments: Value = if raw.trim().is_empty() {
        Value::Object(serde_json::Map::new())
    } else {
        match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("  Invalid JSON arguments: {e}");
                return;
            }
        }
    };

    let log = ClientLog::new(state.level);
    let outcome = state.runtime.block_on(ToolRegistry::call(
        name,
        Some(arguments),
        &state.context,
        &log,
    ));

    for notification in log.drain() {
        if let Some(params) = notification.params {
            eprintln!(
                "  \x1b[90m[{}]\x1b[0m {}",
                params["level"].as_str().unwrap_or("log"),
                params["data"].as_str().unwrap_or_default()
            );
        }
    }

    match outcome {
        Ok(result) => {
            let marker = if result.is_error() { " (isError)" } else { "" };
            for text in result.content.iter().map(ToolContent::as_text) {
                if text.is_empty() {
                    eprintln!("  \x1b[90m(no results){marker}\x1b[0m");
                } else {
                    println!("{text}");
                }
            }
        }
        Err(e) => eprintln!("  \x1b[31mError {}:\x1b[0m {e}", e.code()),
    }
}

fn cmd_datasets(state: &ReplState) {
    eprintln!();
    for resource in ResourceRegistry::list_resources(state.config.service) {
        eprintln!(
            "    {:<36} {}",
            resource.uri,
            resource.title.as_deref().unwrap_or("")
        );
    }
    eprintln!();
}

fn cmd_config(state: &ReplState) {
    let endpoints = &state.config.endpoints;
    eprintln!();
    eprintln!("  Riksdagen:       {}", endpoints.riksdagen);
    eprintln!("  Typkod:          {}", endpoints.typkod);
    eprintln!("  Fastighetsskatt: {}", endpoints.fastighetsskatt);
    eprintln!("  Timeout:         {}s", state.config.timeout.as_secs());
    eprintln!();
}

fn cmd_level(args: &str, state: &mut ReplState) {
    if args.is_empty() {
        let current = state
            .level
            .map(|l| format!("{l:?}").to_lowercase())
            .unwrap_or_else(|| "off".to_string());
        eprintln!("  Log level: {current}");
        return;
    }
    if args == "off" {
        state.level = None;
        eprintln!("  Log messages hidden");
        return;
    }
    match serde_json::from_value::<LogLevel>(Value::String(args.to_string())) {
        Ok(level) => {
            state.level = Some(level);
            eprintln!("  Log level: {args}");
        }
        Err(_) => eprintln!("  Unknown level '{args}'. Use one of: {}", LEVELS.join(", ")),
    }
}
