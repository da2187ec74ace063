// src/core/text.rs
// Text extraction helpers shared by the board parsers.

use scraper::ElementRef;

/// All text beneath an element, whitespace-collapsed and trimmed.
pub fn collect_text(el: ElementRef) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Scan an element's descendant text nodes for the first one containing
/// `label`; strip the label and trim. "Track 3" with label "Track" → "3".
/// Returns "" when no text node carries the label.
pub fn labeled_value(el: ElementRef, label: &str) -> String {
    el.text()
        .find(|t| t.contains(label))
        .map(|t| normalize_ws(&t.replace(label, "")))
        .unwrap_or_default()
}

/// Collapse whitespace runs to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first_li(doc: &Html) -> ElementRef<'_> {
        let sel = Selector::parse("li").unwrap();
        doc.select(&sel).next().unwrap()
    }

    #[test]
    fn labeled_value_strips_label_and_trims() {
        let doc = Html::parse_fragment("<li><span>Train  3847 </span></li>");
        assert_eq!(labeled_value(first_li(&doc), "Train"), "3847");
    }

    #[test]
    fn labeled_value_without_label_is_empty() {
        let doc = Html::parse_fragment("<li><span>no numbers here</span></li>");
        assert_eq!(labeled_value(first_li(&doc), "Track"), "");
    }

    #[test]
    fn collect_text_spans_nested_elements() {
        let doc = Html::parse_fragment("<li><strong>New York</strong> <em>Penn</em></li>");
        assert_eq!(collect_text(first_li(&doc)), "New York Penn");
    }

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  a \n b\t\tc "), "a b c");
    }
}
