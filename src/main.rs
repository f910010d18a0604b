use clap::Parser;
use colored::*;
use std::io::{self, BufRead, Write};
use std::process;

use voamigo::api::ApiClient;
use voamigo::catalog::MessageCatalog;
use voamigo::cli::Args;
use voamigo::config::Config;
use voamigo::session::ChatSession;
use voamigo::ui::output;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let catalog = MessageCatalog::new(config.locale);

    let client = match ApiClient::new(&config.api_base) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    if config.verbose {
        eprintln!(
            "{}",
            format!("[voamigo] API base: {}", client.base_url()).dimmed()
        );
    }

    let mut session = ChatSession::new(client, catalog);

    // Positional words form a one-shot first message.
    if !args.message.is_empty() {
        let first = args.message.join(" ");
        send_and_render(&mut session, &catalog, &first, config.verbose).await;
    }

    let stdin = io::stdin();
    loop {
        print!("{} ", ">".cyan());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/clear" => {
                session.clear();
                println!("{}", catalog.session_cleared().green());
            }
            "/offers" => {
                output::print_offers(session.offers(), &catalog);
            }
            _ => {
                send_and_render(&mut session, &catalog, input, config.verbose).await;
            }
        }
    }

    Ok(())
}

async fn send_and_render(
    session: &mut ChatSession,
    catalog: &MessageCatalog,
    content: &str,
    verbose: bool,
) {
    if verbose {
        eprintln!(
            "{}",
            format!(
                "[voamigo] Sending turn (conversation: {})",
                session.conversation_id().unwrap_or("new")
            )
            .dimmed()
        );
    }

    session.send_user_message(content).await;

    if let Some(error) = session.error() {
        output::print_error(error);
    }

    if let Some(reply) = session.last_reply() {
        output::print_reply(&reply.content);
    }

    if session.needs_clarification() {
        output::print_clarification(session.missing_fields(), catalog);
    }

    if !session.offers().is_empty() {
        output::print_offers(session.offers(), catalog);
    }
    output::print_suggestions(session.suggested_actions(), catalog);

    if verbose {
        eprintln!(
            "{}",
            format!(
                "[voamigo] Transcript: {} messages, {} offers",
                session.messages().len(),
                session.offers().len()
            )
            .dimmed()
        );
    }
}
