use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use catalog_core::FetchKey;
use catalog_engine::{EngineHandle, MovieDetail};
use catalog_logging::{catalog_debug, catalog_error, catalog_info, next_dispatch_seq};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::persistence;
use super::session::{PageResult, Session};
use super::ui::commands::{Command, HELP};
use super::ui::render::{render, scroll_to_top};

/// Everything the main loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Input(String),
    InputClosed,
    Page {
        key: FetchKey,
        result: PageResult,
    },
    Detail {
        movie_id: u64,
        result: Result<Box<MovieDetail>, String>,
    },
}

pub fn run_app(config: AppConfig, start_route: Option<String>) -> anyhow::Result<()> {
    if config.api_key.is_none() {
        catalog_info!("No API key configured; requests will likely be rejected");
    }
    let engine = EngineHandle::new(config.fetch_settings(), config.cache_settings())
        .context("starting catalog engine")?;

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(engine, event_tx.clone());
    spawn_input_reader(event_tx);

    let route = start_route
        .or_else(|| persistence::load_last_route(&config.state_dir))
        .unwrap_or_else(|| "/".to_string());
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let (mut session, requests) = Session::open(today, &route);
    runner.run(requests);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    draw(&mut out, &mut session)?;

    while let Ok(event) = event_rx.recv() {
        let seq = next_dispatch_seq();
        match event {
            AppEvent::Input(line) => {
                let command = Command::parse(&line);
                catalog_debug!("dispatch #{} {:?}", seq, command);
                let outcome = session.handle_command(command);
                if outcome.quit {
                    break;
                }
                if outcome.scroll_to_top {
                    scroll_to_top(&mut out)?;
                }
                if outcome.show_help {
                    for line in HELP {
                        writeln!(out, "{line}")?;
                    }
                }
                if let Some(notice) = outcome.notice {
                    writeln!(out, "{notice}")?;
                }
                runner.run(outcome.requests);
            }
            AppEvent::InputClosed => break,
            AppEvent::Page { key, result } => {
                catalog_debug!("dispatch #{} page {}", seq, key);
                session.apply_page(key, result);
            }
            AppEvent::Detail { movie_id, result } => {
                catalog_debug!("dispatch #{} detail {}", seq, movie_id);
                session.apply_detail(movie_id, result);
            }
        }
        draw(&mut out, &mut session)?;
    }

    if let Err(err) = persistence::save_last_route(&config.state_dir, &session.route_path()) {
        catalog_error!("Failed to save session: {}", err);
    }
    Ok(())
}

fn draw(out: &mut impl Write, session: &mut Session) -> io::Result<()> {
    if !session.consume_dirty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "[{}]", session.route_path())?;
    for line in render(&session.view()) {
        writeln!(out, "{line}")?;
    }
    write!(out, "> ")?;
    out.flush()
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if event_tx.send(AppEvent::Input(line)).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}
