//! Property-based invariant tests for parsing, pairing and click resolution.
//!
//! 1. Every token's range re-parses to exactly its value.
//! 2. N comma-separated numbers give N tokens in order.
//! 3. AlternatingYX is AlternatingXY with each point's axes exchanged.
//! 4. Odd series of length 2k+1 give k points; the last token is unreachable.
//! 5. Every produced point resolves to exactly its provenance ranges.
//! 6. Mode cycling wraps after four steps and respects the series count.

use numplot_core::{build_series_set, resolve, to_coordinates, tokenize};
use numplot_model::{ParseMode, ParseOptions, Provenance, Series, SeriesSet, SourceRange, Token};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn number_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (-100_000i64..100_000).prop_map(|n| n.to_string()),
        (-1000.0f64..1000.0).prop_map(|v| format!("{v:.3}")),
        (1u32..999, -5i32..5).prop_map(|(m, e)| format!("{m}e{e}")),
    ]
}

fn noise_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("[".to_string()),
        Just("(\"".to_string()),
        Just("abc".to_string()),
        Just("«".to_string()),
        Just("]".to_string()),
    ]
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(", "), Just(","), Just(";"), Just(" "), Just("\t"), Just("; ")]
}

fn free_line() -> impl Strategy<Value = String> {
    proptest::collection::vec((noise_text(), number_text(), noise_text(), separator()), 0..8)
        .prop_map(|parts| {
            parts
                .into_iter()
                .map(|(lead, number, tail, sep)| format!("{lead}{number}{tail}{sep}"))
                .collect()
        })
}

fn series_set(lengths: &[usize]) -> SeriesSet {
    let series = lengths
        .iter()
        .enumerate()
        .filter(|(_, len)| **len > 0)
        .map(|(line, len)| {
            let tokens = (0..*len)
                .map(|i| Token::new((line * 100 + i) as f64, SourceRange::on_line(line, i * 5, 3)))
                .collect();
            Series::new(tokens).expect("non-empty")
        })
        .collect();
    SeriesSet {
        series,
        ..SeriesSet::default()
    }
}

fn lengths() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(1usize..12, 0..6)
}

fn mode_strategy() -> impl Strategy<Value = ParseMode> {
    prop_oneof![
        Just(ParseMode::AlternatingXY),
        Just(ParseMode::AlternatingYX),
        Just(ParseMode::FirstLineX),
        Just(ParseMode::FirstLineY),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Ranges re-parse to their values
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn token_ranges_round_trip(lines in proptest::collection::vec(free_line(), 1..5)) {
        let text = lines.join("\n");
        let set = build_series_set(
            &[text.as_str()],
            &[SourceRange::new(0, 0, lines.len(), 0)],
            "p.txt",
            &ParseOptions::default(),
        ).unwrap();
        for series in &set.series {
            for token in series.tokens() {
                let span = token.range.slice(&text).expect("range inside text");
                prop_assert!(!span.is_empty());
                prop_assert_eq!(span.parse::<f64>().unwrap(), token.value);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Comma separated numbers
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn comma_separated_numbers_all_survive(numbers in proptest::collection::vec(number_text(), 0..20)) {
        let line = numbers.join(",");
        let tokens = tokenize(&line, 0, 0);
        prop_assert_eq!(tokens.len(), numbers.len());
        for (token, number) in tokens.iter().zip(&numbers) {
            prop_assert_eq!(token.value, number.parse::<f64>().unwrap());
        }
        let starts: Vec<usize> = tokens.iter().map(|t| t.range.start_column).collect();
        prop_assert!(starts.windows(2).all(|w| w[0] < w[1]));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. YX mirrors XY
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn alternating_yx_mirrors_xy(lengths in lengths()) {
        let set = series_set(&lengths);
        let xy = to_coordinates(&set, ParseMode::AlternatingXY).unwrap();
        let yx = to_coordinates(&set, ParseMode::AlternatingYX).unwrap();
        prop_assert_eq!(xy.len(), yx.len());
        for (a, b) in xy.iter().zip(&yx) {
            prop_assert_eq!(a.len(), b.len());
            for (p, q) in a.iter().zip(b) {
                prop_assert_eq!(p.swapped(), *q);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Odd series lose their trailing token
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn odd_series_yield_half_their_tokens(k in 0usize..20, mode in mode_strategy()) {
        let mode = mode.clamp(1);
        let set = series_set(&[2 * k + 1]);
        let points = to_coordinates(&set, mode).unwrap();
        prop_assert_eq!(points[0].len(), k);
        let last = set.series[0].tokens()[2 * k].range;
        for point in 0..=k {
            if let Ok(ranges) = resolve(mode, 0, point, &set) {
                prop_assert!(!ranges.contains(&last));
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Resolution matches provenance
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolver_agrees_with_mapper(lengths in lengths(), mode in mode_strategy()) {
        let set = series_set(&lengths);
        match to_coordinates(&set, mode) {
            Ok(output) => {
                for (series_index, points) in output.iter().enumerate() {
                    for (point_index, point) in points.iter().enumerate() {
                        let mut resolved = resolve(mode, series_index, point_index, &set).unwrap();
                        let Provenance::Pair { x, y } = point.provenance else {
                            panic!("XY points carry two tokens");
                        };
                        let mut expected = vec![x.range, y.range];
                        resolved.sort_by_key(|r| (r.start_line, r.start_column));
                        expected.sort_by_key(|r| (r.start_line, r.start_column));
                        prop_assert_eq!(resolved, expected);
                    }
                    prop_assert!(resolve(mode, series_index, points.len(), &set).is_err());
                }
            }
            Err(_) => prop_assert!(mode.is_first_line() && set.len() < 2),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Mode cycling
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cycling_respects_series_count(series_count in 0usize..5, steps in 0usize..16) {
        let mut mode = ParseMode::AlternatingXY;
        for _ in 0..steps {
            mode = mode.next(series_count);
            prop_assert!(mode.is_available(series_count));
        }
        if series_count >= 2 {
            prop_assert_eq!(mode, ParseMode::from_index(steps));
        }
    }
}
