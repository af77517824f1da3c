//! Content line folding (RFC 5545 §3.1).

/// Maximum physical line length in octets, not counting the terminator.
const MAX_LINE_OCTETS: usize = 75;

/// Line terminator for content lines.
pub(crate) const CRLF: &str = "\r\n";

/// Folds an accumulated raw document into wire form.
///
/// The raw text is split on CRLF into logical lines; each is folded
/// independently and rejoined. Every logical line of the output carries a
/// trailing CRLF. An empty buffer renders as the empty string.
#[must_use]
pub fn fold(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let body = raw.strip_suffix(CRLF).unwrap_or(raw);
    let mut result = String::with_capacity(raw.len() + raw.len() / MAX_LINE_OCTETS * 3);
    for line in body.split(CRLF) {
        result.push_str(&fold_line(line));
    }
    result
}

/// Folds one logical line to comply with the 75-octet limit.
///
/// A line longer than 75 octets is split into physical lines of at most
/// 75 octets each, continuation lines prefixed with a single space (the
/// space counts against the limit). The boundary is strictly greater
/// than 75: a line of exactly 75 octets is left alone. Counting is in
/// octets, but a cut never lands inside a UTF-8 sequence.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return format!("{line}{CRLF}");
    }

    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut rest = line;
    let mut first = true;
    loop {
        let budget = if first {
            MAX_LINE_OCTETS
        } else {
            // The continuation space takes one octet of the budget.
            result.push(' ');
            MAX_LINE_OCTETS - 1
        };

        if rest.len() <= budget {
            result.push_str(rest);
            result.push_str(CRLF);
            return result;
        }

        let mut end = budget;
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        let (head, tail) = rest.split_at(end);
        result.push_str(head);
        result.push_str(CRLF);
        rest = tail;
        first = false;
    }
}
