use ngscope_graph::AnalysisResult;

/// Pretty-printed JSON of the whole result, newline terminated.
pub fn render_json(analysis: &AnalysisResult) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(analysis)?;
    json.push('\n');
    Ok(json)
}
