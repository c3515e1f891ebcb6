use whisperui_interface::TranscribeQuery;

/// Encodes the seven request parameters in their documented order. Booleans
/// and the speaker count are rendered raw; only `criteria` can contain
/// characters that need URL encoding.
pub(crate) fn encode(query: &TranscribeQuery) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(7);

    parts.push(format!("model_size={}", query.model_size));
    parts.push(format!(
        "transcription_method={}",
        query.transcription_method
    ));
    parts.push(format!("diarisation={}", query.diarisation));
    parts.push(format!("diarisation_method={}", query.diarisation_method));
    parts.push(format!("num_speakers={}", query.num_speakers));
    parts.push(format!("audit={}", query.audit));
    parts.push(format!("criteria={}", urlencoding::encode(&query.criteria)));

    parts.join("&")
}
