//! Test factory for creating Serenity Embed objects.

use serenity::all::Embed;

/// Builds the raw JSON Discord sends for a rich embed.
///
/// # Arguments
/// - `title` - Embed title
/// - `fields` - `(name, value)` pairs, all rendered non-inline
/// - `footer` - Optional footer text
///
/// # Returns
/// - `serde_json::Value` - Embed JSON suitable for embedding in a message payload
pub fn embed_json(title: &str, fields: &[(&str, &str)], footer: Option<&str>) -> serde_json::Value {
    let fields: Vec<serde_json::Value> = fields
        .iter()
        .map(|(name, value)| {
            serde_json::json!({
                "name": name,
                "value": value,
                "inline": false,
            })
        })
        .collect();

    serde_json::json!({
        "type": "rich",
        "title": title,
        "fields": fields,
        "footer": footer.map(|text| serde_json::json!({ "text": text })),
    })
}

/// Creates a test Serenity Embed.
///
/// # Panics
/// - If the JSON cannot be deserialized into an Embed (indicates invalid test data)
pub fn create_test_embed(title: &str, fields: &[(&str, &str)], footer: Option<&str>) -> Embed {
    serde_json::from_value(embed_json(title, fields, footer))
        .expect("Failed to create test embed - invalid JSON structure")
}
