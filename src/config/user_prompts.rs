//! User prompts for first-run configuration setup

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for the scheduling API domain and returns the trimmed
/// input. Used when no config file exists and no environment override is
/// set.
pub async fn prompt_for_api_domain() -> Result<String, AppError> {
    println!("Please enter your scheduling API domain: ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
