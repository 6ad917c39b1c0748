// Markdown decoration stripping for report bodies

/// Tokens removed from generated feedback, applied left to right.
///
/// The fenced opener comes before the bare fence and heading markers run from
/// the longest down so "### " is not half-eaten by "# ".
const DECORATIONS: [&str; 7] = ["```markdown", "```", "---", "### ", "## ", "# ", "**"];

/// Strip markdown decoration (code fences, horizontal rules, level 1-3
/// heading markers, bold markers) and leave everything else untouched.
///
/// Passes repeat until nothing changes, so a token that only appears after
/// another is removed (`*` + `**` + `*`) is removed too. The result never
/// contains any of the tokens, which makes the function idempotent.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.to_string();
    loop {
        let before = text.len();
        for token in DECORATIONS {
            if text.contains(token) {
                text = text.replace(token, "");
            }
        }
        if text.len() == before {
            return text;
        }
    }
}
