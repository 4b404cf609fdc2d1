//! End-to-end behavior of the line converter

use irclog::markup::{convert_line, LineConverter};

// ============================================================================
// Rendered Output Snapshots
// ============================================================================

#[test]
fn snapshot_background_with_nested_foreground() {
    insta::assert_snapshot!(
        convert_line("\x0304,02red on blue \x0305green on blue"),
        @r#"<span class="fc4 bc2">red on blue <span class="fc5">green on blue</span></span>"#
    );
}

#[test]
fn snapshot_reset_ends_all_regions() {
    insta::assert_snapshot!(
        convert_line("\x0303Hello \x0304World\x0f!"),
        @r#"<span class="fc3">Hello </span><span class="fc4">World</span>!"#
    );
}

#[test]
fn snapshot_line_start_foreground_one() {
    insta::assert_snapshot!(
        convert_line("\x0301Hello \x0304World\x0f!"),
        @r#"Hello <span class="fc4">World</span>!"#
    );
}

#[test]
fn snapshot_styles_inside_colors() {
    insta::assert_snapshot!(
        convert_line("\x0312,01\x02\x1fheadline\x1f\x02 body\x03 tail"),
        @r#"<span class="fc12 bc1">[b][u]headline[/u][/b] body</span> tail"#
    );
}

// ============================================================================
// Properties Over Generated Lines
// ============================================================================

const COLOR_FRAGMENTS: &[&str] = &[
    "\x03", "\x0304", "\x0305,02", "\x034,2", "\x0399", "\x0399,99", "\x0304,99", "\x0f", "\x0312,",
    "a", " ", "bc", ",", "7", "\x0301", "\x03,3",
];

const STYLE_FRAGMENTS: &[&str] = &["\x02", "\x1d", "\x1f"];

/// Small deterministic generator so failures are reproducible.
struct Lcg(u64);

impl Lcg {
    fn below(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

fn generate_line(rng: &mut Lcg, with_styles: bool) -> String {
    let len = rng.below(12);
    let mut line = String::new();
    for _ in 0..len {
        if with_styles && rng.below(4) == 0 {
            line.push_str(STYLE_FRAGMENTS[rng.below(STYLE_FRAGMENTS.len())]);
        } else {
            line.push_str(COLOR_FRAGMENTS[rng.below(COLOR_FRAGMENTS.len())]);
        }
    }
    line
}

/// Depth of every markup kind, checked never to go negative and to end at 0.
fn assert_balanced(input: &str, output: &str) {
    let pairs = [
        ("<span class=", "</span>"),
        ("[b]", "[/b]"),
        ("[i]", "[/i]"),
        ("[u]", "[/u]"),
    ];

    for (open, close) in pairs {
        let mut depth: i64 = 0;
        let mut rest = output;
        loop {
            let next_open = rest.find(open);
            let next_close = rest.find(close);
            match (next_open, next_close) {
                (Some(o), Some(c)) if o < c => {
                    depth += 1;
                    rest = &rest[o + open.len()..];
                }
                (_, Some(c)) => {
                    depth -= 1;
                    assert!(depth >= 0, "{close} before {open} for {input:?}: {output}");
                    rest = &rest[c + close.len()..];
                }
                (Some(o), None) => {
                    depth += 1;
                    rest = &rest[o + open.len()..];
                }
                (None, None) => break,
            }
        }
        assert_eq!(depth, 0, "unclosed {open} for {input:?}: {output}");
    }
}

fn strip_control(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '\x02' | '\x0f' | '\x1d' | '\x1f'))
        .collect()
}

#[test]
fn lines_without_control_bytes_are_unchanged() {
    for line in ["", "plain", "  spaced  ", "<b>not markup</b>", "юникод ✓", "[12:00:00] <n> hi"] {
        assert_eq!(convert_line(line), line);
    }
}

#[test]
fn every_region_is_closed_once() {
    let mut rng = Lcg(0x5eed);
    let mut converter = LineConverter::new();
    for _ in 0..2000 {
        let line = generate_line(&mut rng, true);
        let output = converter.convert_line(&line);
        assert_balanced(&line, &output);
    }
}

#[test]
fn color_only_lines_are_balanced() {
    let mut rng = Lcg(42);
    for _ in 0..2000 {
        let line = generate_line(&mut rng, false);
        assert_balanced(&line, &convert_line(&line));
    }
}

#[test]
fn resets_alone_only_remove_control_bytes() {
    for line in ["a\x0fb", "\x0f\x0fx", "a \x0f b \x0f c"] {
        assert_eq!(convert_line(line), strip_control(line));
    }
}

#[test]
fn converter_is_reusable_across_lines() {
    let mut converter = LineConverter::new();
    let first = converter.convert_line("\x0304,02\x02open everything");
    let second = converter.convert_line("plain");
    assert!(first.ends_with("[/b]</span>"));
    assert_eq!(second, "plain");
}
