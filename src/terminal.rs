//! Line-based terminal front end for the chat.

use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use log::{debug, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::engine::ConversationEngine;
use crate::error::Result;
use crate::handoff::LogSink;
use crate::session::ChatSession;
use crate::types::{Message, Sender};

const EXIT_COMMANDS: [&str; 2] = ["salir", "exit"];

/// Run an interactive chat on stdin/stdout until EOF, `salir` or Ctrl-C.
pub async fn run() -> Result<()> {
    info!("Initializing ConectaT chat");
    let config = Config::from_env()?;

    let engine = ConversationEngine::new(config.bot)?.with_sink(Arc::new(LogSink));
    let mut session = ChatSession::new(engine);

    for message in session.messages() {
        print_message(message);
    }
    print_quick_replies(session.quick_replies());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received, shutting down...");
                break;
            }
        };
        let Some(line) = line else {
            debug!("Input closed");
            break;
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if EXIT_COMMANDS.iter().any(|cmd| input.eq_ignore_ascii_case(cmd)) {
            break;
        }

        simulate_typing(config.typing_delay).await;

        let reply = match quick_reply_index(input, session.quick_replies().len()) {
            Some(index) => session.select_quick_reply(index),
            None => session.send(input),
        };
        if let Some(reply) = reply {
            print_message(reply);
        }
        print_quick_replies(session.quick_replies());
    }

    info!("Chat closed in state {}", session.state());
    Ok(())
}

/// A bare number picks the matching (1-based) quick reply.
fn quick_reply_index(input: &str, available: usize) -> Option<usize> {
    let choice = input.parse::<usize>().ok()?;
    (1..=available).contains(&choice).then(|| choice - 1)
}

async fn simulate_typing(base: Duration) {
    if base.is_zero() {
        return;
    }
    println!("ConectaT Bot está escribiendo...");
    tokio::time::sleep(typing_pause(base)).await;
}

/// Base delay plus up to a quarter of it as random jitter.
fn typing_pause(base: Duration) -> Duration {
    let base_ms = u64::try_from(base.as_millis()).unwrap_or(u64::MAX);
    let jitter_ms = rand::random_range(0..=base_ms / 4);
    Duration::from_millis(base_ms.saturating_add(jitter_ms))
}

fn print_message(message: &Message) {
    let time = message.timestamp.with_timezone(&Local).format("%H:%M");
    let author = match message.sender {
        Sender::Bot => "ConectaT Bot",
        Sender::User => "Tú",
    };
    println!("\n[{time}] {author}:\n{}", message.text.to_ansi());
    for button in &message.buttons {
        println!("  [{}] {}", button.label, button.url);
    }
    println!();
}

fn print_quick_replies(replies: &[&str]) {
    let options: Vec<String> = replies
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{}) {label}", i + 1))
        .collect();
    println!("{}", options.join("  "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_select_quick_replies() {
        assert_eq!(quick_reply_index("1", 6), Some(0));
        assert_eq!(quick_reply_index("6", 6), Some(5));
        assert_eq!(quick_reply_index("7", 6), None);
        assert_eq!(quick_reply_index("0", 6), None);
        assert_eq!(quick_reply_index("hola", 6), None);
    }

    #[test]
    fn typing_pause_stays_within_jitter_bounds() {
        let base = Duration::from_millis(1500);
        for _ in 0..50 {
            let pause = typing_pause(base);
            assert!(pause >= base);
            assert!(pause <= Duration::from_millis(1875));
        }
    }

    #[tokio::test]
    async fn zero_delay_does_not_wait() {
        let started = std::time::Instant::now();
        simulate_typing(Duration::ZERO).await;
        assert!(started.elapsed() < Duration::from_millis(100));
    }
}
