use crate::estimate::estimate_tokens;

pub struct Truncated {
    pub text: String,
    pub truncated: bool,
    pub original_tokens: u64,
    pub analyzed_tokens: u64,
}

/// Fits `text` within `budget` tokens by retaining the first 75% and the
/// last 25% of the budget (in characters), joined by an omission marker
/// naming how many tokens were dropped. Leaves `text` untouched when it
/// already fits.
pub fn truncate_head_and_tail(text: &str, budget: u64) -> Truncated {
    let original_tokens = estimate_tokens(text);
    if original_tokens <= budget {
        return Truncated {
            text: text.to_string(),
            truncated: false,
            original_tokens,
            analyzed_tokens: original_tokens,
        };
    }

    let head_tokens = (budget as f64 * 0.75).floor() as u64;
    let tail_tokens = (budget as f64 * 0.25).floor() as u64;
    let head_chars = (head_tokens * 4) as usize;
    let tail_chars = (tail_tokens * 4) as usize;

    let chars: Vec<char> = text.chars().collect();
    let head: String = chars.iter().take(head_chars).collect();
    let tail: String = chars.iter().rev().take(tail_chars).rev().collect();

    let omitted_tokens = original_tokens.saturating_sub(head_tokens + tail_tokens);
    let marker = format!("\n[... {omitted_tokens} tokens omitted ...]\n");

    let assembled = format!("{head}{marker}{tail}");
    let analyzed_tokens = estimate_tokens(&assembled);

    Truncated {
        text: assembled,
        truncated: true,
        original_tokens,
        analyzed_tokens,
    }
}
