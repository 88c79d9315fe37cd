//! # Response Sanitizer
//!
//! Models often wrap their answer in a markdown code block even when told not
//! to. This is literal, order-sensitive substring removal and does not check
//! that what remains is a query.

/// Strips `sql`/`druid` code fences and stray `druid` words from a model answer.
///
/// Note that every occurrence of `druid` is removed, including ones inside
/// identifiers.
pub fn sanitize_generated_query(raw: &str) -> String {
    let query = raw.trim();
    let query = query.replace("```sql\n", "").replace("```", "");
    let query = query.trim();
    let query = query.replace("```druid\n", "").replace("```", "");
    let query = query.trim();
    let query = query.replace("druid\n", "").replace("druid", "");
    query.trim().to_string()
}
