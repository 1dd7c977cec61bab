use std::collections::BTreeMap;

use serde_json::Value;

/// Strips SSE framing from a `data: ` line body and parses each event as
/// JSON, skipping blank lines, the `[DONE]` sentinel, and anything that
/// doesn't parse. Never fails — malformed or foreign lines are dropped.
pub fn parse_events(body: &str) -> Vec<Value> {
    let mut events = Vec::new();
    for line in body.lines() {
        let Some(rest) = line.strip_prefix("data: ") else { continue };
        let rest = rest.trim();
        if rest.is_empty() || rest == "[DONE]" {
            continue;
        }
        if let Ok(value) = serde_json::from_str::<Value>(rest) {
            events.push(value);
        }
    }
    events
}

/// Reconstructs content blocks from an Anthropic-style event stream by
/// tracking the index each `content_block_start` event introduces and
/// accumulating `content_block_delta` text onto that index's buffer.
/// Blocks are returned in ascending index order.
pub fn reconstruct_blocks_by_index(
    events: &[Value],
    block_type_field: &str,
    text_field: &str,
) -> BTreeMap<u64, (String, String)> {
    let mut blocks: BTreeMap<u64, (String, String)> = BTreeMap::new();

    for event in events {
        let event_type = event.get("type").and_then(Value::as_str).unwrap_or("");
        let index = event.get("index").and_then(Value::as_u64);

        match event_type {
            "content_block_start" => {
                if let (Some(index), Some(block)) = (index, event.get("content_block")) {
                    let kind = block
                        .get(block_type_field)
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string();
                    blocks.entry(index).or_insert((kind, String::new()));
                }
            }
            "content_block_delta" => {
                if let (Some(index), Some(delta)) = (index, event.get("delta")) {
                    if let Some(text) = delta.get(text_field).and_then(Value::as_str) {
                        blocks.entry(index).or_insert_with(|| (String::new(), String::new())).1.push_str(text);
                    }
                }
            }
            _ => {}
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_events_skips_done_and_blank_lines() {
        let body = "data: {\"type\":\"a\"}\n\ndata: [DONE]\nother: ignored\n";
        let events = parse_events(body);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn parse_events_skips_invalid_json() {
        let body = "data: not json\ndata: {\"type\":\"a\"}\n";
        let events = parse_events(body);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn reconstruct_blocks_accumulates_deltas_by_index() {
        let body = concat!(
            "data: {\"type\":\"content_block_start\",\"index\":0,\"content_block\":{\"type\":\"thinking\"}}\n",
            "data: {\"type\":\"content_block_delta\",\"index\":0,\"delta\":{\"thinking\":\"step one. \"}}\n",
            "data: {\"type\":\"content_block_delta\",\"index\":0,\"delta\":{\"thinking\":\"step two.\"}}\n",
        );
        let events = parse_events(body);
        let blocks = reconstruct_blocks_by_index(&events, "type", "thinking");
        assert_eq!(blocks.get(&0).unwrap().0, "thinking");
        assert_eq!(blocks.get(&0).unwrap().1, "step one. step two.");
    }

    #[test]
    fn reconstruct_blocks_orders_by_ascending_index() {
        let body = concat!(
            "data: {\"type\":\"content_block_start\",\"index\":1,\"content_block\":{\"type\":\"text\"}}\n",
            "data: {\"type\":\"content_block_start\",\"index\":0,\"content_block\":{\"type\":\"thinking\"}}\n",
        );
        let events = parse_events(body);
        let blocks = reconstruct_blocks_by_index(&events, "type", "thinking");
        let indices: Vec<u64> = blocks.keys().copied().collect();
        assert_eq!(indices, vec![0, 1]);
    }
}
