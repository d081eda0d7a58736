// src/table.rs
// Fixed-column text table for the leaderboard. Pure: styling comes in through `Paint`.

use unicode_width::UnicodeWidthStr;

use crate::delta::{Row, Trend};

/// What a piece of text should look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Up,
    Down,
    New,
    Highlight,
}

/// Styling capability handed to the renderer.
pub trait Paint {
    fn paint(&self, tone: Tone, text: &str) -> String;
}

/// Any `Fn(Tone, &str) -> String` works as a painter.
impl<F> Paint for F
where
    F: Fn(Tone, &str) -> String,
{
    fn paint(&self, tone: Tone, text: &str) -> String {
        self(tone, text)
    }
}

/// No styling.
pub struct Plain;

impl Paint for Plain {
    fn paint(&self, _tone: Tone, text: &str) -> String {
        s!(text)
    }
}

/// Terminal colors: green up/new, red down, blue highlight.
pub struct Ansi;

impl Paint for Ansi {
    fn paint(&self, tone: Tone, text: &str) -> String {
        let code = match tone {
            Tone::Up | Tone::New => "\x1b[32m",
            Tone::Down => "\x1b[31m",
            Tone::Highlight => "\x1b[34m",
        };
        join!(code, text, "\x1b[0m")
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

struct Column {
    header: &'static str,
    align: Align,
}

const COLUMNS: [Column; 5] = [
    Column { header: "POS", align: Align::Right },
    Column { header: "", align: Align::Left },
    Column { header: "NAME", align: Align::Left },
    Column { header: "WINS", align: Align::Right },
    Column { header: "+", align: Align::Right },
];

const GLYPH_COL: usize = 1;

fn cells(row: &Row) -> [String; 5] {
    [
        row.position.to_string(),
        s!(row.trend.glyph()),
        row.name.clone(),
        row.score.map(|s| s.to_string()).unwrap_or_default(),
        row.gain.map(|g| g.to_string()).unwrap_or_default(),
    ]
}

fn trend_tone(trend: Trend) -> Option<Tone> {
    match trend {
        Trend::Flat => None,
        Trend::New => Some(Tone::New),
        Trend::Up => Some(Tone::Up),
        Trend::Down => Some(Tone::Down),
    }
}

fn is_highlighted(name: &str, highlight: Option<&str>) -> bool {
    highlight.is_some_and(|h| h.to_lowercase() == name.to_lowercase())
}

/// Terminal columns, so full-width names still line up.
fn width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// `styled` is what gets printed; `raw` decides how much padding it needs.
fn pad(out: &mut String, styled: &str, raw: &str, col_width: usize, align: Align) {
    let fill = " ".repeat(col_width.saturating_sub(width(raw)));
    match align {
        Align::Left => {
            out.push_str(styled);
            out.push_str(&fill);
        }
        Align::Right => {
            out.push_str(&fill);
            out.push_str(styled);
        }
    }
}

/// Render the first `count` rows, in the order given, under a header line.
///
/// Rows whose name equals `highlight` (ignoring case) have every field wrapped in
/// `Tone::Highlight`. No trailing newline.
pub fn render(rows: &[Row], count: usize, highlight: Option<&str>, paint: &dyn Paint) -> String {
    let shown: Vec<(&Row, [String; 5])> = rows.iter().take(count).map(|r| (r, cells(r))).collect();

    let mut widths = COLUMNS.map(|c| width(c.header));
    for (_, raw) in &shown {
        for (w, cell) in widths.iter_mut().zip(raw) {
            *w = (*w).max(width(cell));
        }
    }

    let mut lines = Vec::with_capacity(shown.len() + 1);

    let mut header = s!();
    for (i, col) in COLUMNS.iter().enumerate() {
        if i > 0 {
            header.push(' ');
        }
        pad(&mut header, col.header, col.header, widths[i], col.align);
    }
    lines.push(header);

    for (row, raw) in &shown {
        let marked = is_highlighted(&row.name, highlight);
        let mut line = s!();
        for (i, col) in COLUMNS.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            // Highlight replaces the trend color; nesting would let the inner one win.
            let tone = if marked {
                Some(Tone::Highlight)
            } else if i == GLYPH_COL {
                trend_tone(row.trend)
            } else {
                None
            };
            let styled = match tone {
                Some(tone) => paint.paint(tone, &raw[i]),
                None => raw[i].clone(),
            };
            pad(&mut line, &styled, &raw[i], widths[i], col.align);
        }
        lines.push(line);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(position: u32, trend: Trend, name: &str, score: Option<u32>, gain: Option<u32>) -> Row {
        Row { position, trend, name: s!(name), score, gain }
    }

    fn sample() -> Vec<Row> {
        vec![
            row(1, Trend::Flat, "Alice", Some(120), None),
            row(2, Trend::Up, "Bob", Some(50), Some(5)),
            row(10, Trend::New, "Cara", None, None),
        ]
    }

    #[test]
    fn aligned_columns() {
        let out = render(&sample(), 10, None, &Plain);
        let expected = [
            "POS   NAME  WINS +",
            "  1   Alice  120  ",
            "  2 ↑ Bob     50 5",
            " 10 + Cara        ",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn count_limits_rows_without_reordering() {
        let out = render(&sample(), 2, None, &Plain);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Alice"));
        assert!(lines[2].contains("Bob"));
    }

    #[test]
    fn empty_input_renders_header_only() {
        assert_eq!(render(&[], 10, None, &Plain), "POS  NAME WINS +");
    }

    #[test]
    fn highlight_marks_every_field_case_insensitively() {
        let mark = |tone: Tone, text: &str| match tone {
            Tone::Highlight => format!("<{text}>"),
            _ => s!(text),
        };
        let out = render(&sample(), 10, Some("bob"), &mark);
        let bob = out.lines().nth(2).unwrap();
        for field in ["<2>", "<↑>", "<Bob>", "<50>", "<5>"] {
            assert!(bob.contains(field), "{field} missing in {bob:?}");
        }
        assert!(!out.lines().nth(1).unwrap().contains('<'));
    }

    #[test]
    fn styling_does_not_shift_columns() {
        let plain = render(&sample(), 10, Some("alice"), &Plain);
        let colored = render(&sample(), 10, Some("alice"), &Ansi);
        let strip = |s: &str| {
            let mut out = s!();
            let mut in_esc = false;
            for ch in s.chars() {
                match ch {
                    '\x1b' => in_esc = true,
                    'm' if in_esc => in_esc = false,
                    _ if !in_esc => out.push(ch),
                    _ => {}
                }
            }
            out
        };
        assert_eq!(strip(&colored), plain);
    }

    #[test]
    fn wide_names_keep_columns_aligned() {
        let rows = vec![
            row(1, Trend::Flat, "マリオ", Some(120), None),
            row(2, Trend::Up, "Alice", Some(45), Some(3)),
        ];
        let out = render(&rows, 10, None, &Plain);
        let widths: Vec<usize> = out.lines().map(width).collect();
        assert_eq!(widths, vec![widths[0]; 3], "{out}");
        assert_eq!(out.lines().nth(1).unwrap(), "  1   マリオ  120  ");
    }

    #[test]
    fn highlighted_glyph_is_blue_not_trend_colored() {
        let out = render(&sample(), 10, Some("BOB"), &Ansi);
        let bob = out.lines().nth(2).unwrap();
        assert!(bob.contains("\x1b[34m↑\x1b[0m"), "{bob:?}");
        assert!(!bob.contains("\x1b[32m"), "{bob:?}");
        assert!(bob.contains("\x1b[34mBob\x1b[0m"));
    }

    #[test]
    fn trend_glyphs_are_colored() {
        let out = render(&sample(), 10, None, &Ansi);
        assert!(out.contains("\x1b[32m↑\x1b[0m"));
        assert!(out.contains("\x1b[32m+\x1b[0m"));
    }
}
