use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use tube_query::interpret::{Answer, Interpreter};
use tube_query::underground::{UndergroundClient, UndergroundConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Point at a different backend with UNDERGROUND_API_URL
    let config = match std::env::var("UNDERGROUND_API_URL") {
        Ok(url) => UndergroundConfig::new().with_base_url(url),
        Err(_) => UndergroundConfig::new(),
    };

    println!("Underground query console (service at {})", config.base_url);
    println!("Ask \"How do I get from X to Y?\" or \"What lines does X serve?\"");
    println!();

    let client = UndergroundClient::new(config).expect("Failed to create Underground client");
    let interpreter = Interpreter::new(client);

    let stdin = io::stdin();
    print_prompt();

    for line in stdin.lock().lines() {
        let query = line.expect("Failed to read from stdin");

        if query.is_empty() {
            print_prompt();
            continue;
        }

        match interpreter.answer(&query).await {
            Ok(Answer { text, ok: true }) => println!("{text}"),
            Ok(Answer { ok: false, .. }) => {
                println!("Sorry, I only understand the two questions above.")
            }
            Err(e) => eprintln!("Lookup failed: {e}"),
        }

        print_prompt();
    }
}

fn print_prompt() {
    print!("> ");
    io::stdout().flush().expect("Failed to flush stdout");
}
