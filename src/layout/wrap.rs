//! Greedy word wrapping.

/// Wrap a single logical line into sub-lines of at most `width` characters.
///
/// Words are whitespace-delimited and never split; a word longer than
/// `width` occupies a sub-line of its own and may exceed the width. Runs
/// of whitespace collapse to a single space. An empty or blank input
/// yields exactly one empty sub-line.
///
/// Width is measured in characters, not bytes.
pub fn wrap_line(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Wrap every line, flattening the result in reading order.
pub fn wrap_lines<S: AsRef<str>>(lines: &[S], width: usize) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| wrap_line(line.as_ref(), width))
        .collect()
}
