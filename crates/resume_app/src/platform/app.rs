use std::time::Duration;

use analyzer_logging::{analyzer_error, analyzer_info};
use anyhow::Context;
use resume_core::{render, update, AppState, Msg, UiState};
use resume_engine::load_selected_file;

use super::cli::Args;
use super::config::{load_file_config, resolve};
use super::effects::EffectRunner;
use super::logging;
use super::ui::terminal::TerminalDisplay;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Final state of a run, used for the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome(pub UiState);

impl RunOutcome {
    pub fn succeeded(self) -> bool {
        self.0 == UiState::ResultsShown
    }
}

pub fn run_app(args: Args) -> anyhow::Result<RunOutcome> {
    let cwd = std::env::current_dir().context("resolving working directory")?;
    let (file_config, source) =
        load_file_config(args.config.as_deref(), &cwd).context("loading configuration")?;
    let config = resolve(&args, file_config, source);

    logging::initialize(config.log);
    match &config.source {
        Some(path) => analyzer_info!("Loaded config from {:?}", path),
        None => analyzer_info!("No config file; using defaults"),
    }

    let selected = match &args.file {
        Some(path) => Some(
            load_selected_file(path).with_context(|| format!("opening {}", path.display()))?,
        ),
        None => None,
    };

    let mut controller = FormController::new(EffectRunner::new(config.submit));
    controller.dispatch(Msg::FileChosen(selected));
    controller.dispatch(Msg::EmailChanged(args.email.clone()));
    controller.dispatch(Msg::SubmitClicked);
    controller.wait_while_loading();
    controller.runner.stop();

    print!("{}", controller.display.snapshot());
    Ok(RunOutcome(controller.state.ui_state()))
}

/// Owns the single state instance and the display it drives.
struct FormController {
    state: AppState,
    runner: EffectRunner,
    display: TerminalDisplay,
}

impl FormController {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
            display: TerminalDisplay::new(),
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            for line in self.display.apply(render(&state.view())) {
                eprintln!("{line}");
            }
        }
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn wait_while_loading(&mut self) {
        while self.state.ui_state() == UiState::Loading {
            match self.runner.next_msg(POLL_INTERVAL) {
                Some(msg) => self.dispatch(msg),
                None if self.state.in_flight().is_none() => {
                    analyzer_error!("Loading without an in-flight submission");
                    break;
                }
                None => {}
            }
        }
    }
}
