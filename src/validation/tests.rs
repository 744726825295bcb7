use super::*;

fn levels(values: &[CellValue]) -> Vec<bool> {
    validate_hierarchy(values)
}

fn num(value: f64) -> CellValue {
    CellValue::Number(value)
}

#[test]
fn hierarchy_output_matches_input_length() {
    assert!(levels(&[]).is_empty());
    let input = vec![num(0.0), num(3.0), CellValue::Empty, CellValue::text("x"), num(1.0)];
    assert_eq!(levels(&input).len(), input.len());
}

#[test]
fn hierarchy_first_row_must_be_root() {
    assert_eq!(levels(&[num(0.0)]), vec![false]);
    assert_eq!(levels(&[num(1.0)]), vec![true]);
    assert_eq!(levels(&[CellValue::Empty]), vec![false]);
}

#[test]
fn hierarchy_allows_single_step_deepening() {
    assert_eq!(
        levels(&[num(0.0), num(1.0), num(2.0)]),
        vec![false, false, false]
    );
}

#[test]
fn hierarchy_flags_skipped_levels() {
    assert_eq!(levels(&[num(0.0), num(2.0)]), vec![false, true]);
    assert_eq!(
        levels(&[num(0.0), num(1.0), num(4.0)]),
        vec![false, false, true]
    );
}

#[test]
fn hierarchy_allows_any_shallowing() {
    assert_eq!(
        levels(&[num(0.0), num(1.0), num(0.0), num(1.0)]),
        vec![false, false, false, false]
    );
    assert_eq!(
        levels(&[num(0.0), num(1.0), num(2.0), num(3.0), num(0.0)]),
        vec![false, false, false, false, false]
    );
}

#[test]
fn hierarchy_coerces_malformed_levels_to_root() {
    assert_eq!(
        levels(&[num(0.0), CellValue::text("bad"), num(1.0)]),
        vec![false, false, false]
    );
    assert_eq!(
        levels(&[CellValue::text(" 0 "), CellValue::text("1"), CellValue::text("3")]),
        vec![false, false, true]
    );
}

#[test]
fn hierarchy_compares_against_previous_row_even_when_flagged() {
    assert_eq!(
        levels(&[num(0.0), num(2.0), num(3.0)]),
        vec![false, true, false]
    );
    assert_eq!(levels(&[num(2.0), num(3.0)]), vec![true, false]);
}

#[test]
fn cell_level_coercion_truncates_numbers() {
    assert_eq!(num(2.9).as_level(), 2);
    assert_eq!(num(-1.5).as_level(), -1);
    assert_eq!(num(f64::NAN).as_level(), 0);
    assert_eq!(CellValue::text("2.5").as_level(), 0);
    assert_eq!(CellValue::text("-2").as_level(), -2);
}

#[test]
fn full_width_levels_read_as_integers() {
    assert_eq!(CellValue::text("２").as_level(), 2);
    assert_eq!(CellValue::text("\u{3000}１０\u{3000}").as_level(), 10);
    assert_eq!(CellValue::text("－１").as_level(), -1);
    assert_eq!(CellValue::text("２.５").as_level(), 0);
    assert_eq!(
        levels(&[num(0.0), CellValue::text("２")]),
        vec![false, true]
    );
    assert_eq!(
        levels(&[num(0.0), CellValue::text("１"), CellValue::text("２")]),
        vec![false, false, false]
    );
}

#[test]
fn titles_found_after_normalization_are_not_missing() {
    let normalizer = Normalizer::default();
    let corpus = NormalizedCorpus::new("Preface\nChapter One\nThe beginning", &normalizer);
    assert!(!is_missing(&CellValue::text("Chapter One"), &corpus, &normalizer));
    assert!(!is_missing(&CellValue::text("Ｃｈａｐｔｅｒ　Ｏｎｅ"), &corpus, &normalizer));
}

#[test]
fn absent_titles_are_missing() {
    let normalizer = Normalizer::default();
    let corpus = NormalizedCorpus::new("Chapter One Chapter Two", &normalizer);
    assert!(is_missing(&CellValue::text("Chapter Zero"), &corpus, &normalizer));
}

#[test]
fn blank_and_non_text_titles_are_never_missing() {
    let normalizer = Normalizer::default();
    let corpus = NormalizedCorpus::new("anything", &normalizer);
    assert!(!is_missing(&CellValue::text(""), &corpus, &normalizer));
    assert!(!is_missing(&CellValue::Empty, &corpus, &normalizer));
    assert!(!is_missing(&num(42.0), &corpus, &normalizer));

    let empty = NormalizedCorpus::new("", &normalizer);
    assert!(!is_missing(&CellValue::Empty, &empty, &normalizer));
}

#[test]
fn matching_is_case_sensitive() {
    let normalizer = Normalizer::default();
    let corpus = NormalizedCorpus::new("Chapter One", &normalizer);
    assert!(is_missing(&CellValue::text("chapter one"), &corpus, &normalizer));
}

#[test]
fn default_table_folds_width_and_punctuation() {
    let normalizer = Normalizer::default();
    assert_eq!(normalizer.normalize("第１章　はじめに"), "第1章はじめに");
    assert_eq!(normalizer.normalize("Ａ－Ｚ（１）"), "A-Z(1)");
    assert_eq!(normalizer.normalize("a\u{2014}b \u{2212} c"), "a-b-c");
    assert_eq!(normalizer.normalize("\u{201C}quote\u{201D}"), "\"quote\"");
    assert_eq!(normalizer.normalize("ｶﾀｶﾅ｡"), "カタカナ。");
    assert_eq!(normalizer.normalize("line\r\nbreak\ttab"), "linebreaktab");
}

#[test]
fn default_table_is_idempotent() {
    let normalizer = Normalizer::default();
    assert!(normalizer.unstable_keys().is_empty());

    let samples = [
        "",
        "Chapter 1: Intro",
        "第１章　「はじめに」～序～",
        "ﾊﾝｶｸ ｶﾀｶﾅ\u{3000}ＦＵＬＬ",
        "\u{2018}x\u{2019} \u{2013} y",
    ];
    for sample in samples {
        let once = normalizer.normalize(sample);
        assert_eq!(normalizer.normalize(&once), once, "sample {sample:?}");
    }
}

#[test]
fn custom_replacements_extend_the_table() {
    let normalizer = Normalizer::empty()
        .with_replacement('①', "1")
        .with_replacement('-', "");
    assert_eq!(normalizer.normalize("①-②"), "1②");
    assert_eq!(normalizer.entry_count(), 2);
}

#[test]
fn unstable_keys_reports_chained_replacements() {
    let normalizer = Normalizer::empty()
        .with_replacement('a', "b")
        .with_replacement('b', "c");
    assert_eq!(normalizer.unstable_keys(), vec!['a']);
}

#[test]
fn check_reports_every_row_for_malformed_entries() {
    let normalizer = Normalizer::default();
    let entries = vec![
        TocEntry::default(),
        TocEntry::new(num(3.0), CellValue::text("three")),
        TocEntry::new(CellValue::Empty, num(f64::INFINITY)),
    ];

    let report = check(&entries, "", &normalizer);
    assert_eq!(report.rows.len(), entries.len());
    assert!(!report.has_errors());
}

#[test]
fn check_empty_entries_yields_empty_report() {
    let report = check(&[], "book", &Normalizer::default());
    assert!(report.rows.is_empty());
    assert!(!report.has_errors());
}

#[test]
fn check_end_to_end_flags_hierarchy_and_titles_independently() {
    let normalizer = Normalizer::default();
    let entries = vec![
        TocEntry::new(CellValue::text("Intro"), num(0.0)),
        TocEntry::new(CellValue::text("Deep Dive"), num(2.0)),
    ];

    let report = check(&entries, "Intro\nSome text about things.", &normalizer);
    assert_eq!(
        report.rows,
        vec![
            RowReport {
                hierarchy_error: false,
                title_error: false,
            },
            RowReport {
                hierarchy_error: true,
                title_error: true,
            },
        ]
    );
    assert!(report.has_errors());
    assert!(report.has_hierarchy_errors());
    assert!(report.has_title_errors());
    assert_eq!(report.hierarchy_error_count(), 1);
    assert_eq!(report.title_error_count(), 1);
}

#[test]
fn check_is_repeatable() {
    let normalizer = Normalizer::default();
    let entries = vec![
        TocEntry::new(CellValue::text("Ａ"), num(0.0)),
        TocEntry::new(CellValue::text("B"), num(1.0)),
    ];
    let first = check(&entries, "A C", &normalizer);
    let second = check(&entries, "A C", &normalizer);
    assert_eq!(first, second);
    assert_eq!(
        first.rows[1],
        RowReport {
            hierarchy_error: false,
            title_error: true,
        }
    );
}
