//! Plain-text rendering of the picker. Everything here returns strings so the
//! layout can be tested without a terminal; `App::draw` hands the result to
//! Ratatui.

use crate::models::{Entry, FieldName, FieldValue};
use crate::symbols::{Glyph, SymbolTable};

use super::app::App;

const LIST_HEADER: &str = "Pick a character:";

/// Full screen body: the character list, then the open character if any.
pub fn render_body(app: &App) -> String {
    let mut out = format!("{}\n", LIST_HEADER);
    for (index, entry) in app.roster.iter().enumerate() {
        let marker = if index == app.cursor { ">" } else { " " };
        out.push_str(&format!("{} {}\n", marker, entry.display_name()));
    }
    out.push('\n');
    if app.chosen {
        out.push_str(&render_entry(&app.current, &app.symbols));
    }
    out
}

/// Detail block for one character.
pub fn render_entry(entry: &Entry, symbols: &SymbolTable) -> String {
    let mut out = line(&format!(
        "{}{}",
        entry.sex_symbol(symbols),
        entry.display_name()
    ));
    out.push_str(&line(&format!(
        "\t<{}>",
        entry.pronunciation.join(symbols.resolve(Glyph::Dot))
    )));
    out.push_str(&field_block(entry, FieldName::Category));
    out.push_str(&field_block(entry, FieldName::Traits));
    out
}

/// Heading plus one bullet per value. Lists flagged as sorted are ordered
/// ascending; a scalar renders as a single bullet.
pub fn field_block(entry: &Entry, field: FieldName) -> String {
    let mut out = line(&format!("{}:", field.label()));
    match entry.field(field) {
        FieldValue::Scalar(value) => out.push_str(&bullet(value)),
        FieldValue::List(values) => {
            let mut values: Vec<&String> = values.iter().collect();
            if field.is_sorted() {
                values.sort();
            }
            for value in values {
                out.push_str(&bullet(value));
            }
        }
    }
    out
}

fn bullet(value: &str) -> String {
    line(&format!("\t- {}", value))
}

/// Indent with a tab and terminate with a newline.
fn line(content: &str) -> String {
    format!("\t{}\n", content)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{builtin_app, entry};
    use crate::ui::keymap::Action;

    #[test]
    fn test_closed_body_lists_characters() {
        let app = builtin_app();
        assert_eq!(render_body(&app), "Pick a character:\n> Hound\n  Morrigan\n\n");
    }

    #[test]
    fn test_open_morrigan_after_one_step_down() {
        let mut app = builtin_app();
        app.apply(Action::Down);
        assert_eq!(app.cursor, 1);
        app.apply(Action::Confirm);

        let expected = concat!(
            "Pick a character:\n",
            "  Hound\n",
            "> Morrigan\n",
            "\n",
            "\t\u{2640}Morrigan\n",
            "\t\t<M\u{03C9}\u{0301}r\u{0259}gy\u{0300}n>\n",
            "\tCategory:\n",
            "\t\t- Reaper\n",
            "\tExtra:\n",
            "\t\t- Killing Touch\n",
            "\t\t- Wields a scythe\n",
        );
        assert_eq!(render_body(&app), expected);
    }

    #[test]
    fn test_pronunciation_tokens_joined_with_dot() {
        let symbols = SymbolTable::build();
        let e = entry(&["Ann", "Lee"], &["an", "li"], &[], "male", &[]);
        let rendered = render_entry(&e, &symbols);
        assert!(rendered.starts_with("\t\u{2642}Ann Lee\n\t\t<an\u{00B7}li>\n"));
    }

    #[test]
    fn test_lists_sort_regardless_of_authored_order() {
        let first = entry(&["X"], &[], &["b", "a"], "", &["Killing Touch", "Wields a scythe"]);
        let second = entry(&["X"], &[], &["a", "b"], "", &["Wields a scythe", "Killing Touch"]);
        for e in [first, second] {
            assert_eq!(
                field_block(&e, FieldName::Traits),
                "\tExtra:\n\t\t- Killing Touch\n\t\t- Wields a scythe\n"
            );
            assert_eq!(
                field_block(&e, FieldName::Category),
                "\tCategory:\n\t\t- a\n\t\t- b\n"
            );
        }
    }

    #[test]
    fn test_unsorted_and_scalar_fields() {
        let e = entry(&["Zed", "Amy"], &[], &[], "Female", &[]);
        assert_eq!(
            field_block(&e, FieldName::Name),
            "\tName:\n\t\t- Zed\n\t\t- Amy\n"
        );
        assert_eq!(field_block(&e, FieldName::Sex), "\tSex:\n\t\t- Female\n");
    }

    #[test]
    fn test_closing_hides_detail_block() {
        let mut app = builtin_app();
        app.apply(Action::Confirm);
        assert!(render_body(&app).contains("Changeling"));
        app.apply(Action::Confirm);
        assert_eq!(render_body(&app), "Pick a character:\n> Hound\n  Morrigan\n\n");
    }
}
