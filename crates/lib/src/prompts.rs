//! # Query Generation Prompt
//!
//! The default prompt template and the function that fills it in. The server
//! may replace the template through configuration.

/// The default prompt used to ask the model for a Druid SQL query.
///
/// Placeholders: `{table_name}`, `{columns}`, `{question}`
pub const DRUID_QUERY_PROMPT: &str = "This is the table name {table_name} and these are its columns {columns}. \
Always provide only the Apache Druid SQL query to answer the question delimited by triple quotes below, \
for the table and the columns provided, without any additional text.\n\n\
Question: \"\"\" {question} \"\"\"";

const QUESTION_DELIMITER: &str = "\"\"\"";

/// Fills a prompt template with the table name, its columns and the question.
///
/// The table name is rendered as a JSON string literal and the columns as a JSON
/// array, so quotes and newlines inside identifiers stay escaped. The question is
/// trimmed and any triple quote inside it is collapsed. `DRUID_QUERY_PROMPT` also
/// keeps a space between the delimiters and the question, so a question that
/// starts or ends with `"` does not run into them.
pub fn build_query_prompt(
    template: &str,
    table_name: &str,
    columns: &[String],
    question: &str,
) -> String {
    let table_literal = serde_json::Value::from(table_name).to_string();
    let columns_literal = serde_json::Value::from(columns.to_vec()).to_string();
    let mut question = question.trim().to_string();
    while question.contains(QUESTION_DELIMITER) {
        question = question.replace(QUESTION_DELIMITER, "\"");
    }

    template
        .replace("{table_name}", &table_literal)
        .replace("{columns}", &columns_literal)
        .replace("{question}", &question)
}
