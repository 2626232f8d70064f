use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use clap::Parser;
use recipe_core::{update, AppState, Msg};
use recipe_gateway::ReqwestGateway;
use recipe_logging::{recipe_info, recipe_warn};

use super::config::AppArgs;
use super::effects::EffectRunner;
use super::logging;
use super::ui::{input, render};

/// Everything the main loop reacts to, in arrival order.
pub enum Inbound {
    /// A line typed by the user.
    Input(String),
    /// A message produced off-thread, e.g. a gateway completion.
    Msg(Msg),
    /// Stdin reached end of file.
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let args = AppArgs::parse();
    logging::initialize(args.log, args.verbose);

    let settings = args.gateway_settings();
    recipe_info!("recipe_app starting against {}", settings.base_url);
    let gateway = ReqwestGateway::new(settings).context("failed to build http client")?;

    let (inbound_tx, inbound_rx) = mpsc::channel::<Inbound>();
    let runner = EffectRunner::new(Arc::new(gateway), inbound_tx.clone())
        .context("failed to start gateway worker")?;
    spawn_input_reader(inbound_tx).context("failed to start input reader")?;

    let mut app = App::new(runner);
    app.print(&[input::HELP.to_string()]);
    app.dispatch(Msg::Started);

    for inbound in inbound_rx {
        match inbound {
            Inbound::Input(line) => {
                if !app.handle_line(&line) {
                    break;
                }
            }
            Inbound::Msg(msg) => app.dispatch(msg),
            Inbound::InputClosed => break,
        }
    }

    recipe_info!("recipe_app exiting");
    Ok(())
}

fn spawn_input_reader(inbound_tx: mpsc::Sender<Inbound>) -> io::Result<()> {
    thread::Builder::new()
        .name("recipe-input".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        recipe_warn!("failed to read input: {}", err);
                        break;
                    }
                };
                if inbound_tx.send(Inbound::Input(line)).is_err() {
                    return;
                }
            }
            let _ = inbound_tx.send(Inbound::InputClosed);
        })?;
    Ok(())
}

struct App {
    state: AppState,
    runner: EffectRunner,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    /// Returns `false` when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> bool {
        let command = match input::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return true,
            Err(err) => {
                self.print(&[err.to_string()]);
                return true;
            }
        };

        match command {
            input::Command::Quit => return false,
            input::Command::Help => {
                self.print(&[input::HELP.to_string()]);
                return true;
            }
            _ => {}
        }

        match input::resolve(command, &self.state.view()) {
            Ok(Some(msg)) => self.dispatch(msg),
            Ok(None) => {}
            Err(err) => self.print(&[err.to_string()]),
        }
        true
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);

        if self.state.consume_dirty() {
            self.render();
        }
    }

    fn render(&self) {
        self.print(&render::render(&self.state.view()));
    }

    fn print(&self, lines: &[String]) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in lines {
            let _ = writeln!(out, "{line}");
        }
        let _ = writeln!(out);
        let _ = out.flush();
    }
}
