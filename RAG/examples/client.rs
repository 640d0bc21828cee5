use reqwest::Client;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let base_url =
        std::env::var("PROXY_URL").unwrap_or_else(|_| "http://127.0.0.1:9999".to_string());
    let question = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Rắn hổ mang chúa có nguy hiểm không?".to_string());

    println!("🔍 Testing RAG search proxy at {}", base_url);

    println!("\n📋 Health Check:");
    let health_response = client
        .get(format!("{}/api/health", base_url))
        .send()
        .await?;

    println!("Status: {}", health_response.status());
    let health_json: serde_json::Value = health_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&health_json)?);

    println!("\n🔍 Search:");
    let search_response = client
        .post(format!("{}/api/search", base_url))
        .json(&json!({ "question": question }))
        .send()
        .await?;

    println!("Status: {}", search_response.status());
    let search_json: serde_json::Value = search_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&search_json)?);

    Ok(())
}
