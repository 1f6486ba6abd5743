//! Portfolio Contact - terminal front end
//!
//! Renders the contact form on stdin/stdout: prompts for each field, shows a
//! loading indicator while the message is in flight and prints notifications.
//! Logs go to stderr.

use anyhow::Result;
use portfolio_contact::{
    AsyncEmailJsClient, AsyncEmailSender, Config, ConsoleNotifier, DeliveryMetrics, EmailJsClient,
    Field, FormController, Notifier, SubmissionOutcome, Submitter,
};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Typed at a prompt to empty the field.
const CLEAR_INPUT: &str = "-";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_logging("error");
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    init_logging(&config.log_level);
    info!("Configuration loaded, EmailJS API URL: {}", config.api_url);

    let client = EmailJsClient::new(&config);
    let metrics = client.metrics().clone();
    let sender = Arc::new(AsyncEmailJsClient::new(client)) as Arc<dyn AsyncEmailSender>;
    let notifier = Arc::new(ConsoleNotifier::new(std::io::stdout())) as Arc<dyn Notifier>;

    let mut controller = FormController::new(Submitter::new(config, sender), notifier);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Contact Me");
    println!(
        "Press Enter to keep the value shown in brackets, type {} to clear it. Ctrl-D quits.",
        CLEAR_INPUT
    );

    loop {
        for field in Field::ALL {
            let current = controller.form().get(field).to_string();
            prompt(field, &current)?;

            match lines.next_line().await? {
                Some(line) if line == CLEAR_INPUT => controller.update(field, ""),
                Some(line) if !line.is_empty() => controller.update(field, line),
                Some(_) => {}
                None => return finish(&metrics),
            }
        }

        match controller.submit().await {
            SubmissionOutcome::Delivered | SubmissionOutcome::Failed(_) => {
                if !ask_again(&mut lines).await? {
                    return finish(&metrics);
                }
            }
            SubmissionOutcome::Invalid(_) => {}
        }
    }
}

/// Initialize logging (stderr only, stdout carries the form)
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn prompt(field: Field, current: &str) -> Result<()> {
    let mut stdout = std::io::stdout();
    if current.is_empty() {
        write!(stdout, "{}: ", field.placeholder())?;
    } else {
        write!(stdout, "{} [{}]: ", field.placeholder(), current)?;
    }
    stdout.flush()?;
    Ok(())
}

async fn ask_again(lines: &mut Lines<BufReader<Stdin>>) -> Result<bool> {
    print!("Send another message? [y/N] ");
    std::io::stdout().flush()?;

    let answer = lines.next_line().await?.unwrap_or_default();
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn finish(metrics: &DeliveryMetrics) -> Result<()> {
    info!("Messages {}", metrics.snapshot());
    Ok(())
}
