/// Split a section body into its item lines.
///
/// One item per non-empty line, with a leading bullet marker removed.
pub fn extract_items(body: &str) -> Vec<String> {
    body.lines().filter_map(clean_item).collect()
}

/// Like [`extract_items`], but also breaks lines apart at inline `•`
/// bullets and at hyphens used as bullets (`Stop Zyrtec. - Start Flonase`).
///
/// Used for narratives without any section markers, where the model often
/// packs several recommendations onto one line.
pub fn extract_bullets(body: &str) -> Vec<String> {
    body.lines()
        .flat_map(|line| line.split('\u{2022}'))
        .flat_map(split_hyphen_bullets)
        .filter_map(clean_item)
        .collect()
}

/// Split before every hyphen that starts a bullet: one followed by a space
/// that opens the text or comes right after sentence punctuation (`.`, `;`,
/// `:`). Hyphens inside words ("follow-up") and ranges ("5 - 10 mg") are
/// left alone.
fn split_hyphen_bullets(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut pieces = Vec::new();
    let mut start = 0;

    for (idx, byte) in bytes.iter().enumerate() {
        if *byte != b'-' || bytes.get(idx + 1) != Some(&b' ') {
            continue;
        }

        let before = text[..idx].trim_end();
        let after = text[idx + 1..].trim_start();
        let opens = before.is_empty() || before.ends_with(['.', ';', ':']);
        let range = before.ends_with(|c: char| c.is_ascii_digit())
            && after.starts_with(|c: char| c.is_ascii_digit());

        if opens && !range && idx > start {
            pieces.push(&text[start..idx]);
            start = idx;
        }
    }
    pieces.push(&text[start..]);
    pieces
}

fn clean_item(line: &str) -> Option<String> {
    let mut item = line.trim();

    if let Some(rest) = item
        .strip_prefix("- ")
        .or_else(|| item.strip_prefix('\u{2022}'))
        .or_else(|| item.strip_prefix("* "))
    {
        item = rest.trim_start();
    }

    // Stray markup left behind by bold headings ("**In regards to X:**").
    if item.chars().all(|c| matches!(c, '*' | '_' | '#' | '-' | '\u{2022}')) {
        return None;
    }

    Some(item.to_string())
}
