//! Provider summaries and instructions arrive as HTML from an untrusted
//! source. They are only ever shown as plain text.

/// Strip tags, decode the common entities and collapse whitespace.
/// `<br>`, `</p>` and `</li>` become line breaks.
pub fn html_to_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let Some(end) = rest[start..].find('>') else {
            // Unterminated tag: drop the remainder.
            rest = "";
            break;
        };
        let tag = rest[start + 1..start + end].trim().to_ascii_lowercase();
        let name = tag
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or("");
        let closing = tag.starts_with('/');
        if name == "br" || (closing && matches!(name, "p" | "li" | "div" | "ol" | "ul")) {
            out.push('\n');
        }
        rest = &rest[start + end + 1..];
    }
    out.push_str(rest);

    let decoded = decode_entities(&out);
    decoded
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_entities(s: &str) -> String {
    // `&amp;` last so that "&amp;lt;" decodes to "&lt;" and not "<".
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup() {
        assert_eq!(
            html_to_text("You can never have too <b>main course</b> recipes."),
            "You can never have too main course recipes."
        );
        assert_eq!(
            html_to_text(r#"<a href="https://x.example/">link</a> text"#),
            "link text"
        );
    }

    #[test]
    fn script_tags_do_not_survive() {
        let text = html_to_text("<script>alert(1)</script>ok");
        assert!(!text.contains('<'));
        assert_eq!(text, "alert(1)ok");
    }

    #[test]
    fn block_ends_become_newlines() {
        assert_eq!(
            html_to_text("<ol><li>Boil water.</li><li>Add pasta.</li></ol>"),
            "Boil water.\nAdd pasta."
        );
        assert_eq!(html_to_text("one<br/>two<br>three"), "one\ntwo\nthree");
    }

    #[test]
    fn decodes_entities_once() {
        assert_eq!(html_to_text("Salt &amp; pepper"), "Salt & pepper");
        assert_eq!(html_to_text("&amp;lt;b&amp;gt;"), "&lt;b&gt;");
    }

    #[test]
    fn unterminated_tag_is_dropped() {
        assert_eq!(html_to_text("safe <img src=x onerror="), "safe");
    }
}
