//! advisor-cli: headless runner for the insurance adequacy advisor.
//!
//! Usage:
//!   advisor-cli --evaluate 30 600000 2 500000 2000000
//!   advisor-cli --ipc-mode --data-dir ./data

use advisor_core::{
    command::AdvisorCommand,
    config::AdvisorConfig,
    event::AdvisorEvent,
    session::{AdvisorSession, Stage},
    speech::{NullSpeaker, StdoutSpeaker},
};
use anyhow::Result;
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Command { command: AdvisorCommand },
    Quit,
}

#[derive(serde::Serialize)]
struct UiState {
    session_id: String,
    stage: Stage,
    event_count: usize,
    events: Vec<AdvisorEvent>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");

    if let Some(pos) = args.iter().position(|a| a == "--evaluate") {
        let fields = &args[pos + 1..];
        if fields.len() < 5 {
            anyhow::bail!(
                "--evaluate needs five values: age income dependents assets cover"
            );
        }
        return run_one_shot(data_dir, fields);
    }

    let config = AdvisorConfig::load(data_dir)?;
    let mut session = AdvisorSession::open(config, Box::new(NullSpeaker))?;
    run_ipc_loop(&mut session)
}

/// One-shot mode: drive a full session through the calculate stage and
/// print the verdict. Narration goes to the console.
fn run_one_shot(data_dir: &str, fields: &[String]) -> Result<()> {
    let config = AdvisorConfig::load(data_dir)?;
    let mut session = AdvisorSession::open(config, Box::new(StdoutSpeaker))?;

    session.handle(AdvisorCommand::BeginCalculation)?;
    let events = session.handle(AdvisorCommand::SubmitProfile {
        age: fields[0].clone(),
        annual_income: fields[1].clone(),
        dependents: fields[2].clone(),
        assets: fields[3].clone(),
        current_cover: fields[4].clone(),
    })?;

    for event in &events {
        if let AdvisorEvent::VerdictIssued {
            sufficiency_ratio,
            tier,
            message,
            recommendation,
        } = event
        {
            println!("=== ADEQUACY VERDICT ===");
            println!("  ratio:          {sufficiency_ratio:.4}");
            println!("  tier:           {tier:?}");
            println!("  message:        {message}");
            println!("  recommendation: {recommendation}");
        }
    }

    Ok(())
}

/// IPC mode: line-delimited JSON commands on stdin, session state JSON
/// on stdout. Used by UI front ends.
fn run_ipc_loop(session: &mut AdvisorSession) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {
                let state = build_ui_state(session, Vec::new());
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
            }
            IpcCommand::Command { command } => match session.handle(command) {
                Ok(events) => {
                    let state = build_ui_state(session, events);
                    writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
                }
                Err(e) => {
                    log::warn!("command failed: {e}");
                    let err_json = serde_json::json!({ "error": e.to_string() });
                    writeln!(stdout, "{}", err_json)?;
                }
            },
        }
        stdout.flush()?;
    }
    Ok(())
}

fn build_ui_state(session: &AdvisorSession, events: Vec<AdvisorEvent>) -> UiState {
    UiState {
        session_id: session.session_id().to_string(),
        stage: session.stage(),
        event_count: session.event_log().len(),
        events,
    }
}
