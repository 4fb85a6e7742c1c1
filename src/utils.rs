/// Calculates the byte offset of a 1-based line and column in the source text.
/// Columns count bytes within the line, matching how serde_json reports error
/// positions. This function is designed to be called only when an error
/// occurs, as it iterates through the source text to locate the position.
pub fn offset_for(source: &str, line: usize, column: usize) -> usize {
    let mut current_line = 1;
    let mut current_column = 1;
    for (i, c) in source.char_indices() {
        if current_line == line && current_column >= column {
            return i;
        }
        if c == '\n' {
            current_line += 1;
            current_column = 1;
        } else {
            current_column += c.len_utf8();
        }
    }
    source.len()
}
