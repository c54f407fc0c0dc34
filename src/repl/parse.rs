#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ParseError {
    pub(crate) index: usize,
}

/// Splits a command line on whitespace, honouring single and double quotes.
/// A quoted empty string yields an empty token.
pub(crate) fn tokenize(input: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut open_index = 0usize;
    for (index, ch) in input.char_indices() {
        if ch.is_control() && !ch.is_whitespace() {
            return Err(ParseError { index });
        }

        if let Some(active) = quote {
            if ch == active {
                quote = None;
            } else {
                current.push(ch);
            }
            continue;
        }

        if ch == '"' || ch == '\'' {
            quote = Some(ch);
            open_index = index;
            in_token = true;
            continue;
        }

        if ch.is_whitespace() {
            if in_token {
                tokens.push(std::mem::take(&mut current));
                in_token = false;
            }
            continue;
        }

        current.push(ch);
        in_token = true;
    }

    if quote.is_some() {
        return Err(ParseError { index: open_index });
    }

    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Parses a 1-based position typed by the user into a 0-based index.
pub(crate) fn parse_position(token: Option<&str>) -> Option<usize> {
    token?.parse::<usize>().ok()?.checked_sub(1)
}

pub(crate) fn parse_number<T: std::str::FromStr>(token: Option<&str>) -> Option<T> {
    token?.parse().ok()
}

pub(crate) fn format_parse_error(input: &str, index: usize) -> String {
    let mut caret_pos = 0usize;
    for (byte_idx, _) in input.char_indices() {
        if byte_idx >= index {
            break;
        }
        caret_pos += 1;
    }
    let mut marker = String::new();
    marker.push_str(&" ".repeat(caret_pos));
    marker.push('^');
    format!(
        "Unbalanced quote or invalid character at position {}:\n{}\n{}",
        caret_pos + 1,
        input,
        marker
    )
}
