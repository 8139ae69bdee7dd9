//! Sanitizers for untrusted strings rendered into dashboard pages.

/// Color code suffixes in `§0`–`§f` order, with the CSS class each maps to.
const COLOR_CODES: [(char, &str); 16] = [
    ('0', "black"),
    ('1', "dark-blue"),
    ('2', "dark-green"),
    ('3', "dark-aqua"),
    ('4', "dark-red"),
    ('5', "dark-purple"),
    ('6', "gold"),
    ('7', "gray"),
    ('8', "dark-gray"),
    ('9', "blue"),
    ('a', "green"),
    ('b', "aqua"),
    ('c', "red"),
    ('d', "light-purple"),
    ('e', "yellow"),
    ('f', "white"),
];

/// Formatting codes with no HTML counterpart here; dropped from the output.
const FORMAT_CODES: [char; 6] = ['k', 'l', 'm', 'n', 'o', 'r'];

/// Strips substrings that would let user input break out of its HTML context:
/// comment delimiters and script tags.
pub fn strip_active_markup(input: &str) -> String {
    input
        .replace("<!--", "")
        .replace("-->", "")
        .replace("</script>", "")
        .replace("<script>", "")
}

/// Converts `§x` color codes into `<span class="...">` runs. Each color code
/// opens a span; every span still open at the end of the string is closed
/// there. Formatting codes are removed, unknown codes pass through.
pub fn color_codes_to_spans(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut open_spans = 0usize;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '§' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some(code) if FORMAT_CODES.contains(&code.to_ascii_lowercase()) => {
                chars.next();
            }
            Some(code) => {
                let lower = code.to_ascii_lowercase();
                if let Some((_, class)) = COLOR_CODES.iter().find(|(c, _)| *c == lower) {
                    chars.next();
                    out.push_str("<span class=\"");
                    out.push_str(class);
                    out.push_str("\">");
                    open_spans += 1;
                } else {
                    out.push('§');
                }
            }
            None => out.push('§'),
        }
    }

    for _ in 0..open_spans {
        out.push_str("</span>");
    }
    out
}
