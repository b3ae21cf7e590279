use std::io::{self, BufRead, Stdout};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use clap::Parser;
use directory_core::{Controller, Msg};
use directory_engine::FetchSettings;
use directory_logging::{directory_debug, directory_info};

use super::cli::Cli;
use super::config;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui::input::{parse_command, Command, HELP};
use super::ui::render::TerminalRenderer;

const INPUT_POLL: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(LogDestination::from_flag(cli.log_file.as_deref()), cli.verbose);

    let settings = config::resolve(&cli)?;
    directory_info!("Directory source: {}", settings.url);

    let runner = EffectRunner::new(FetchSettings {
        request_timeout: settings.options.timeout(),
        ..FetchSettings::default()
    });
    let controller = Controller::new(settings.options, TerminalRenderer::new(io::stdout()));

    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut app = App {
        controller,
        runner,
        url: settings.url,
    };
    app.controller.renderer_mut().line(HELP);
    app.request_load();
    app.run(line_rx);
    Ok(())
}

struct App {
    controller: Controller<TerminalRenderer<Stdout>>,
    runner: EffectRunner,
    url: String,
}

impl App {
    fn run(&mut self, lines: Receiver<String>) {
        let mut input_open = true;
        loop {
            self.drain_engine();

            // With stdin gone, stay only until the pending load is rendered.
            if !input_open {
                if !self.controller.state().is_loading() {
                    break;
                }
                thread::sleep(INPUT_POLL);
                continue;
            }

            match lines.recv_timeout(INPUT_POLL) {
                Ok(line) => {
                    if !self.handle_line(&line) {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    directory_debug!("stdin closed");
                    input_open = false;
                }
            }
        }
    }

    /// Returns false when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> bool {
        match parse_command(line) {
            Command::Dispatch(msg) => self.dispatch(msg),
            Command::Reload => self.request_load(),
            Command::Help => self.controller.renderer_mut().line(HELP),
            Command::Quit => return false,
            Command::Unknown(text) => self
                .controller
                .renderer_mut()
                .line(&format!("Unknown command: {text} (type `help`)")),
        }
        true
    }

    fn request_load(&mut self) {
        self.dispatch(Msg::LoadRequested {
            url: self.url.clone(),
        });
    }

    fn drain_engine(&mut self) {
        while let Some(msg) = self.runner.poll() {
            self.dispatch(msg);
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let mut pending = vec![msg];
        while let Some(msg) = pending.pop() {
            let effects = self.controller.dispatch(msg);
            pending.extend(self.runner.run(effects));
        }
    }
}
