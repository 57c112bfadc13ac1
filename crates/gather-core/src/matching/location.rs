//! Free-text location similarity
//!
//! Compares the city segment (text before the first comma) of two location
//! strings. Identical cities score 1; otherwise the score is the share of
//! words in `a` that contain, or are contained in, some word of `b`, divided
//! by the longer word count. Repeated words in `a` each count, so swapping the
//! arguments can change the result when one side repeats a word.

/// Similarity of two free-text locations in `[0, 1]`
pub fn location_similarity(a: Option<&str>, b: Option<&str>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };

    let a_city = city_segment(a);
    let b_city = city_segment(b);
    if a_city.is_empty() || b_city.is_empty() {
        return 0.0;
    }
    if a_city == b_city {
        return 1.0;
    }

    let a_words: Vec<&str> = a_city.split_whitespace().collect();
    let b_words: Vec<&str> = b_city.split_whitespace().collect();

    let matched = a_words
        .iter()
        .filter(|aw| b_words.iter().any(|bw| aw.contains(bw) || bw.contains(*aw)))
        .count();
    let longest = a_words.len().max(b_words.len());

    #[allow(clippy::cast_precision_loss)]
    let similarity = matched as f64 / longest as f64;
    similarity.clamp(0.0, 1.0)
}

/// Lowercased text before the first comma
fn city_segment(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    lowered
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
