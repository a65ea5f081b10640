//! Fetches a random cat fact from the meowfacts API and prints it.

mod meowfacts;

use tokio::runtime::Runtime;

fn main() {
    let runtime: Runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");

    match runtime.block_on(meowfacts::fetch_fact()) {
        Ok(fact) => println!("{}", fact),
        Err(error) => println!("Error getting cat fact: {}", error),
    }
}
