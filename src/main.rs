//! `data-chat` - terminal front-end for the data-analysis chat.

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;

use data_chat::adapters::http::{AnalyticsClient, AnalyticsClientConfig};
use data_chat::adapters::signals::ChannelObserver;
use data_chat::adapters::terminal::{prompt, render_message, render_panel, Command, HELP};
use data_chat::application::handlers::{ConversationController, ResultsPanel};
use data_chat::application::BusyIndicator;
use data_chat::config::{AppConfig, LogFormat, LoggingConfig};
use data_chat::domain::foundation::MessageId;
use data_chat::ports::{DatasetFile, SessionSignal};

fn init_tracing(config: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr);
    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

/// Prints log messages appended since `last_shown`, skipping the user's own lines.
fn print_new_messages(controller: &ConversationController, last_shown: &mut Option<MessageId>) {
    let log = controller.messages();
    let start = last_shown
        .as_ref()
        .and_then(|id| log.iter().position(|m| m.id() == id))
        .map_or(0, |i| i + 1);
    for message in log.iter().skip(start).filter(|m| !m.is_user()) {
        println!("[{}] {}", message.created_at().clock(), render_message(message));
    }
    *last_shown = log.last().map(|m| *m.id());
}

async fn drain_signals(receiver: &mut UnboundedReceiver<SessionSignal>, panel: &mut ResultsPanel) {
    while let Ok(signal) = receiver.try_recv() {
        panel.apply(signal).await;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    tracing::info!(backend = %config.backend.base_url, "Starting data-chat");

    let client = Arc::new(AnalyticsClient::new(
        AnalyticsClientConfig::new(config.backend.base_url.clone())
            .with_timeout(config.backend.timeout()),
    )?);
    let busy = BusyIndicator::new();
    let (observer, mut signals) = ChannelObserver::new();

    let mut controller =
        ConversationController::new(client.clone(), client.clone(), Arc::new(observer))
            .with_thinking_delay(config.chat.thinking_delay())
            .with_busy_indicator(busy.clone());
    let mut panel = ResultsPanel::new(client).with_busy_indicator(busy.clone());

    let mut busy_updates = busy.subscribe();
    tokio::spawn(async move {
        while busy_updates.changed().await.is_ok() {
            if *busy_updates.borrow() {
                eprintln!("  ...");
            }
        }
    });

    println!("{}", HELP);
    let mut last_shown = None;
    print_new_messages(&controller, &mut last_shown);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("{}", prompt(controller.mood()));
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Command::parse(&line) {
            Ok(Command::Say(text)) => controller.submit(&text).await?,
            Ok(Command::Choose(label)) => controller.choose_upload_method(&label).await?,
            Ok(Command::Upload(path)) => match DatasetFile::from_path(&path).await {
                Ok(file) => controller.upload_file(file).await?,
                Err(err) => println!("Cannot read {}: {}", path, err),
            },
            Ok(Command::Plot(kind)) => {
                if let Err(err) = panel.select_plot(kind).await {
                    println!("{}", err);
                }
            }
            Ok(Command::X(column)) => {
                if let Err(err) = panel.select_x(&column).await {
                    println!("{}", err);
                }
            }
            Ok(Command::Y(column)) => {
                if let Err(err) = panel.select_y(&column).await {
                    println!("{}", err);
                }
            }
            Ok(Command::Panel) => println!("{}", render_panel(panel.state())),
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Quit) => break,
            Err(err) => println!("{}", err),
        }

        print_new_messages(&controller, &mut last_shown);
        drain_signals(&mut signals, &mut panel).await;
    }

    tracing::info!("Bye");
    Ok(())
}
