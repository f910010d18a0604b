use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "voamigo")]
#[command(about = "Chat with the voamigo flight-search agent", long_about = None)]
pub struct Args {
    #[arg(
        long = "api-base",
        help = "Backend base URL (e.g., http://localhost:8000)"
    )]
    pub api_base: Option<String>,

    #[arg(long = "locale", help = "Locale for client messages (pt-BR, en)")]
    pub locale: Option<String>,

    #[arg(short = 'v', long = "verbose", help = "Print request diagnostics")]
    pub verbose: bool,

    #[arg(help = "Optional first message to send before entering the chat loop")]
    pub message: Vec<String>,
}
