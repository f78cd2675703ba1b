use glossa_io::DictionaryClient;
use glossa_types::{LookupResponse, ResponseCode};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub fn format_lookup(response: &LookupResponse) -> String {
    if response.code == ResponseCode::Success {
        format!(
            "Definition: {}\nEncoding: {}",
            response.definition, response.language_code
        )
    } else {
        "Failed to find word in dictionary".to_string()
    }
}

pub async fn lookup(client: &mut DictionaryClient, word: &str, language: &str) {
    match client.look_up_word(word, language).await {
        Ok(response) => println!("{}", format_lookup(&response)),
        Err(e) => tracing::warn!("RPC failed: {e:#}"),
    }
}

pub async fn define(client: &mut DictionaryClient, word: &str, language: &str, definition: &str) {
    match client.define_word(word, language, definition).await {
        Ok(response) if response.code.is_success() => println!("Added '{word}' to dictionary"),
        Ok(_) => println!("Failed to add '{word}' to dictionary"),
        Err(e) => tracing::warn!("RPC failed: {e:#}"),
    }
}

/// Look up each line of `input` until an empty line or end of input.
/// Returns the number of words looked up.
pub async fn run<R>(client: &mut DictionaryClient, input: R, language: &str) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut count = 0;

    loop {
        print!("Enter a word to look up: ");
        std::io::Write::flush(&mut std::io::stdout())?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.is_empty() {
            break;
        }

        lookup(client, &line, language).await;
        count += 1;
    }

    Ok(count)
}
