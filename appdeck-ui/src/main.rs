//! `appdeck-shell`: a terminal harness for driving the interaction layer
//! against the real system adapters.
//!
//! Reads simple commands from stdin (`list`, `open <n>`, `copy <n>`,
//! `key <g|c|esc|up|down|enter>`, `quit`) and prints toasts as they appear.

use appdeck_core::config::ConfigLoader;
use appdeck_core::error::CoreError;
use appdeck_core::logging::init_logging;
use appdeck_domain::registry::{ApplicationRegistry, InMemoryApplicationRegistry};
use appdeck_domain::toasts::{DefaultToastService, ToastEvent};
use appdeck_ui::{InteractionLayer, KeyCode, KeyEvent, SystemClipboard, SystemContextOpener};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;

fn print_cards(layer: &InteractionLayer) {
    let focus = layer.page().focus();
    if layer.page().is_empty_state() {
        println!("(no applications registered)");
        return;
    }
    for card in layer.page().cards() {
        let marker = match focus {
            Some(target) if target.card_index() == card.index => ">",
            _ => " ",
        };
        let state = if card.primary_enabled() { "open" } else { "----" };
        println!(
            "{} [{}] {:<24} {} ({})",
            marker,
            card.index,
            card.application.label.value(),
            card.application.full_address(),
            state
        );
    }
}

fn parse_index(argument: Option<&str>) -> Option<usize> {
    argument.and_then(|raw| raw.parse().ok())
}

fn parse_key(argument: Option<&str>) -> Option<KeyEvent> {
    match argument? {
        "g" => Some(KeyEvent::primary('g')),
        "c" => Some(KeyEvent::primary('c')),
        "esc" => Some(KeyEvent::plain(KeyCode::Escape)),
        "up" => Some(KeyEvent::plain(KeyCode::ArrowUp)),
        "down" => Some(KeyEvent::plain(KeyCode::ArrowDown)),
        "enter" => Some(KeyEvent::plain(KeyCode::Enter)),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<(), CoreError> {
    let config = ConfigLoader::load()?;
    init_logging(&config.logging)?;

    let registry = InMemoryApplicationRegistry::from_config(&config.registry).await;
    info!(applications = registry.count().await, "Registry seeded");

    let toasts = Arc::new(DefaultToastService::with_event_publisher(|event| {
        if let ToastEvent::Shown(toast) = event {
            println!("  * [{:?}] {}", toast.severity, toast.message);
        }
    }));

    let mut layer = InteractionLayer::new(
        Arc::new(SystemContextOpener::new()),
        Arc::new(SystemClipboard::new()),
        toasts,
    );
    layer.initialize(&registry).await;

    println!("appdeck-shell - commands: list, open <n>, copy <n>, focus <n>, key <g|c|esc|up|down|enter>, quit");
    print_cards(&layer);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("list") => print_cards(&layer),
            Some("open") => match parse_index(parts.next()) {
                Some(index) => layer.activate_primary(index).await,
                None => println!("usage: open <card index>"),
            },
            Some("copy") => match parse_index(parts.next()) {
                Some(index) => layer.activate_copy(index).await,
                None => println!("usage: copy <card index>"),
            },
            Some("focus") => match parse_index(parts.next()) {
                Some(index) => {
                    if layer.focus_card(index) {
                        print_cards(&layer);
                    } else {
                        println!("no card with index {}", index);
                    }
                }
                None => println!("usage: focus <card index>"),
            },
            Some("key") if !config.ui.keyboard_shortcuts => {
                println!("keyboard shortcuts are disabled in the configuration");
            }
            Some("key") => match parse_key(parts.next()) {
                Some(event) => {
                    let disposition = layer.handle_key(&event).await;
                    println!("  ({:?})", disposition);
                }
                None => println!("usage: key <g|c|esc|up|down|enter>"),
            },
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {}", other),
            None => {}
        }
    }

    Ok(())
}
