use colored::*;
use terminal_size::{terminal_size, Width};

use crate::catalog::MessageCatalog;
use crate::models::{Offer, OfferPrice};

/// Columns available for one line of output, with a sane floor when the
/// terminal size is unknown (e.g., piped output).
fn line_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => (w as usize).max(40),
        None => 80,
    }
}

fn format_price(price: &OfferPrice) -> String {
    match price {
        OfferPrice::Cash(cash) => format!("{} {:.2}", cash.currency, cash.amount),
        OfferPrice::Miles(miles) => {
            format!("{} {} pts + {:.2} taxes", miles.program, miles.points, miles.taxes)
        }
    }
}

fn format_duration(minutes: u32) -> String {
    format!("{}h{:02}", minutes / 60, minutes % 60)
}

pub fn print_reply(content: &str) {
    println!("{}", content);
}

pub fn print_error(error: &str) {
    eprintln!("{} {}", "Error:".red(), error);
}

pub fn print_offers(offers: &[Offer], catalog: &MessageCatalog) {
    if offers.is_empty() {
        println!("{}", catalog.no_offers().dimmed());
        return;
    }

    let width = line_width();
    println!();
    println!("{}", catalog.offers_heading().bold());

    for (i, offer) in offers.iter().enumerate() {
        let stops = match offer.stops {
            0 => "direct".to_string(),
            1 => "1 stop".to_string(),
            n => format!("{} stops", n),
        };
        let baggage = if offer.baggage_included { "bag ✓" } else { "bag ✗" };

        let mut line = format!(
            "{:>2}. [{}] {}  {}  {}  {}",
            i + 1,
            offer.source,
            format_price(&offer.price),
            format_duration(offer.duration_minutes),
            stops,
            baggage,
        );
        if let Some(score) = offer.score {
            line.push_str(&format!("  score {:.2}", score));
        }
        println!("{}", line);

        if let Some(explanation) = &offer.explanation {
            let mut note = explanation.clone();
            let budget = width.saturating_sub(8);
            if note.chars().count() > budget {
                note = note.chars().take(budget.saturating_sub(1)).collect();
                note.push('…');
            }
            println!("    {}", note.dimmed());
        }
    }
    println!();
}

pub fn print_suggestions(actions: &[String], catalog: &MessageCatalog) {
    if actions.is_empty() {
        return;
    }
    println!("{}", catalog.suggestions_heading().bold());
    for action in actions {
        println!("  {} {}", "·".dimmed(), action);
    }
}

pub fn print_clarification(missing_fields: &[String], catalog: &MessageCatalog) {
    if missing_fields.is_empty() {
        println!("{}", catalog.clarification_heading().yellow());
    } else {
        println!(
            "{}: {}",
            catalog.clarification_heading().yellow(),
            missing_fields.join(", ")
        );
    }
}
