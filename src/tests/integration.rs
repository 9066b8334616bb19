#[cfg(test)]
mod integration_tests {
    use super::fixtures::{pairs, script_pairs};
    use crate::{
        CorpusError, LanguageTable, TableError, UpdateConfig, UpdateError, Updater, WordBatch,
        corpus::{self, first_field, language_of, read_words},
    };
    use serde_json::{Value, json};
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;

    const LANGUAGES: &str = r#"{
        "aze": {
            "iso639_name": "Azerbaijani",
            "wiktionary_code": "az",
            "casefold": true,
            "script": {
                "latn": "Latin",
                "cyrl": "Cyrillic",
                "ara": "Arabic",
                "arab": "Arabic"
            }
        },
        "uig": {
            "iso639_name": "Uyghur",
            "wiktionary_code": "ug",
            "casefold": false
        }
    }"#;

    fn table() -> LanguageTable {
        LanguageTable::from_reader(LANGUAGES.as_bytes()).unwrap()
    }

    // ── corpus ──────────────────────────────────────────────────────────

    #[test]
    fn language_is_the_file_name_prefix() {
        assert_eq!(language_of(Path::new("tsv/aze_latn_phonemic.tsv")).unwrap(), "aze");
        assert_eq!(language_of(Path::new("uig_arab_narrow.tsv")).unwrap(), "uig");
        assert!(matches!(
            language_of(Path::new("tsv/README.tsv")),
            Err(CorpusError::MalformedFileName(_))
        ));
        assert!(language_of(Path::new("_latn.tsv")).is_err());
    }

    #[test]
    fn word_is_the_first_tab_field() {
        assert_eq!(first_field("kitab\tk i t a b"), "kitab");
        assert_eq!(first_field("kitab"), "kitab");
        assert_eq!(first_field("\tnothing"), "");
    }

    #[test]
    fn read_words_drops_empty_lines() {
        let tsv = "ژۇرنال\tʒurnal\r\n\n\tstray\nكىتاب\tkitab\n";
        let words = read_words(Cursor::new(tsv)).unwrap();
        assert_eq!(words, ["ژۇرنال", "كىتاب"]);
    }

    // ── table ───────────────────────────────────────────────────────────

    #[test]
    fn table_round_trip_keeps_other_fields() {
        let table = table();
        let mut out = Vec::new();
        table.to_writer(&mut out).unwrap();
        let reparsed: Value = serde_json::from_slice(&out).unwrap();
        let original: Value = serde_json::from_str(LANGUAGES).unwrap();
        assert_eq!(reparsed, original);

        let keys: Vec<&str> = reparsed["aze"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["iso639_name", "wiktionary_code", "casefold", "script"]);
    }

    #[test]
    fn script_keeps_its_place_among_the_fields() {
        let input = r#"{"kaz": {"script": {"cyrl": "Cyrillic"}, "name": "Kazakh", "casefold": true}}"#;
        let mut table = LanguageTable::from_reader(input.as_bytes()).unwrap();
        table
            .record_mut("kaz")
            .unwrap()
            .script_map_mut()
            .insert_if_absent("latn".into(), "Latin".into());

        let mut out = Vec::new();
        table.to_writer(&mut out).unwrap();
        let reparsed: Value = serde_json::from_slice(&out).unwrap();
        let keys: Vec<&str> = reparsed["kaz"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["script", "name", "casefold"]);
        assert_eq!(
            reparsed["kaz"]["script"],
            json!({ "cyrl": "Cyrillic", "latn": "Latin" })
        );
    }

    #[test]
    fn new_script_map_goes_after_the_other_fields() {
        let mut table = table();
        Updater::new(UpdateConfig::default())
            .apply(&mut table, &WordBatch::new("uig", vec!["ژۇرنال".into()]))
            .unwrap();

        let mut out = Vec::new();
        table.to_writer(&mut out).unwrap();
        let reparsed: Value = serde_json::from_slice(&out).unwrap();
        let keys: Vec<&str> = reparsed["uig"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["iso639_name", "wiktionary_code", "casefold", "script"]);
    }

    #[test]
    fn table_is_written_with_four_space_indent() {
        let table = LanguageTable::from_reader(r#"{"eng": {"name": "English"}}"#.as_bytes()).unwrap();
        let mut out = Vec::new();
        table.to_writer(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n    \"eng\": {\n        \"name\": \"English\"\n    }\n}"
        );
    }

    #[test]
    fn missing_table_is_a_read_error() {
        let err = LanguageTable::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, TableError::Read { .. }));
    }

    #[test]
    fn malformed_table_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            LanguageTable::load(&path).unwrap_err(),
            TableError::Parse { .. }
        ));
    }

    // ── updater ─────────────────────────────────────────────────────────

    #[test]
    fn batch_for_unknown_language_fails() {
        let mut table = table();
        let before = table.clone();
        let batch = WordBatch::new("xyz", vec!["hello".to_owned()]);
        let err = Updater::new(UpdateConfig::default())
            .apply(&mut table, &batch)
            .unwrap_err();
        assert!(matches!(
            err,
            UpdateError::Table(TableError::UnknownLanguage(ref lang)) if lang == "xyz"
        ));
        assert_eq!(table, before);
    }

    #[test]
    fn apply_repairs_and_extends() {
        let mut table = table();
        let updater = Updater::new(UpdateConfig::default());

        let aze = WordBatch::new("aze", vec!["kitab".into(), "китаб".into(), "كتاب".into()]);
        updater.apply(&mut table, &aze).unwrap();
        assert_eq!(
            script_pairs(table.get("aze").unwrap()),
            pairs(&[("latn", "Latin"), ("cyrl", "Cyrillic"), ("arab", "Arabic")])
        );

        let uig = WordBatch::new("uig", vec!["ژۇرنال".into(), "2024".into(), "abc123".into()]);
        let report = updater.apply(&mut table, &uig).unwrap();
        assert_eq!(report.undecided, 1);
        assert_eq!(
            script_pairs(table.get("uig").unwrap()),
            pairs(&[("arab", "Arabic"), ("zyyy", "Common")])
        );
    }

    #[test]
    fn end_to_end_over_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let tsv_dir = dir.path().join("tsv");
        fs::create_dir(&tsv_dir).unwrap();
        fs::write(
            tsv_dir.join("aze_latn_broad.tsv"),
            "kitab\tk i t a b\nçörək\tt͡ʃ œ ɾ æ c\n",
        )
        .unwrap();
        fs::write(tsv_dir.join("uig_arab_narrow.tsv"), "ژۇرنال\tʒ u r n a l\n").unwrap();
        fs::write(tsv_dir.join("fra_latn_broad.tsv"), "chat\tʃ a\n").unwrap();
        fs::write(tsv_dir.join("notes.txt"), "ignored\n").unwrap();

        let base = dir.path().join("languages.json");
        fs::write(&base, LANGUAGES).unwrap();
        let output = dir.path().join("out.json");

        let mut table = LanguageTable::load(&base).unwrap();
        let summary = Updater::new(UpdateConfig::default())
            .run(&mut table, corpus::batches(&tsv_dir).unwrap());

        assert_eq!(summary.outcomes.len(), 3);
        let failed: Vec<_> = summary.failed().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].language.as_deref(), Some("fra"));
        assert!(summary.has_failures());

        table.save(&output).unwrap();
        let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            written,
            json!({
                "aze": {
                    "iso639_name": "Azerbaijani",
                    "wiktionary_code": "az",
                    "casefold": true,
                    "script": {
                        "latn": "Latin",
                        "cyrl": "Cyrillic",
                        "arab": "Arabic"
                    }
                },
                "uig": {
                    "iso639_name": "Uyghur",
                    "wiktionary_code": "ug",
                    "casefold": false,
                    "script": { "arab": "Arabic" }
                }
            })
        );
    }

    #[test]
    fn malformed_word_list_name_fails_only_that_batch() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("aze_latn.tsv"), "kitab\n").unwrap();
        fs::write(dir.path().join("broken.tsv"), "kitab\n").unwrap();

        let mut table = table();
        let summary = Updater::new(UpdateConfig::default())
            .run(&mut table, corpus::batches(dir.path()).unwrap());

        assert_eq!(summary.reports().count(), 1);
        let failed: Vec<_> = summary.failed().collect();
        assert_eq!(failed.len(), 1);
        assert!(failed[0].source.ends_with("broken.tsv"));
        assert!(matches!(
            failed[0].result,
            Err(UpdateError::Corpus(CorpusError::MalformedFileName(_)))
        ));
    }

    #[test]
    fn save_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.json");
        fs::write(&path, "stale").unwrap();
        table().save(&path).unwrap();
        assert_eq!(LanguageTable::load(&path).unwrap(), table());
    }

    #[cfg(unix)]
    #[test]
    fn save_keeps_the_mode_of_the_file_it_replaces() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.json");
        fs::write(&path, LANGUAGES).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o664)).unwrap();

        table().save(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o664);
    }

    #[cfg(unix)]
    #[test]
    fn save_creates_a_world_readable_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.json");
        table().save(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    fn run_with_one_failure(dir: &Path) -> (LanguageTable, crate::RunSummary) {
        fs::write(dir.join("uig_arab.tsv"), "ژۇرنال\n").unwrap();
        fs::write(dir.join("xyz_latn.tsv"), "hello\n").unwrap();
        let mut table = table();
        let summary = Updater::new(UpdateConfig::default())
            .run(&mut table, corpus::batches(dir).unwrap());
        (table, summary)
    }

    #[test]
    fn failed_batch_blocks_the_write() {
        let dir = tempfile::tempdir().unwrap();
        let (table, summary) = run_with_one_failure(dir.path());
        let output = dir.path().join("out.json");

        let err = summary.write(&table, &output, false).unwrap_err();
        assert!(matches!(err, UpdateError::FailedBatches(1)));
        assert!(!output.exists());
    }

    #[test]
    fn keep_going_writes_the_successful_batches() {
        let dir = tempfile::tempdir().unwrap();
        let (table, summary) = run_with_one_failure(dir.path());
        let output = dir.path().join("out.json");

        summary.write(&table, &output, true).unwrap();
        let written = LanguageTable::load(&output).unwrap();
        assert_eq!(
            script_pairs(written.get("uig").unwrap()),
            pairs(&[("arab", "Arabic")])
        );
    }

    #[test]
    fn clean_run_is_written() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("aze_latn.tsv"), "kitab\n").unwrap();
        let mut table = table();
        let summary = Updater::new(UpdateConfig::default())
            .run(&mut table, corpus::batches(dir.path()).unwrap());
        let output = dir.path().join("out.json");

        summary.write(&table, &output, false).unwrap();
        assert_eq!(LanguageTable::load(&output).unwrap(), table);
    }
}
