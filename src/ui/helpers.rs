/// Columns between tab stops when the body is drawn.
const TAB_WIDTH: usize = 4;

/// Replace tabs with spaces up to the next tab stop. Terminal cells have no
/// notion of tab stops, so the rendered body is expanded right before drawing.
pub(crate) fn expand_tabs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let pad = TAB_WIDTH - column % TAB_WIDTH;
                out.push_str(&" ".repeat(pad));
                column += pad;
            }
            '\n' => {
                out.push(ch);
                column = 0;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }
    out
}
