use line_filter_bench::{
    check_consistency, ensure_dirs, load_lines, read_lines, run_all, BenchConfig, FilterError,
    Pattern, Strategy,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn workspace(corpus: &str, threshold: usize) -> (TempDir, BenchConfig) {
    let root = tempfile::tempdir().unwrap();
    let corpus_path = root.path().join("rockyou.txt");
    fs::write(&corpus_path, corpus).unwrap();

    let data_dir = root.path().join("data");
    let config = BenchConfig {
        corpus_path,
        output_dir: data_dir.join("filtered"),
        data_dir,
        buffer_threshold: threshold,
        flush_tail: true,
    };
    (root, config)
}

#[test]
fn fruit_example_end_to_end() {
    let (_root, config) = workspace("Apple\nbanana\nAPPLE pie\ncherry\n", 100_000);
    let pattern = Pattern::parse("apple").unwrap();

    let runs = run_all(&config, &pattern).unwrap();

    assert_eq!(runs.len(), 3);
    for run in &runs {
        assert_eq!(run.result.lines_count, 2, "{}", run.strategy);
        assert_eq!(run.result.total_size, 16, "{}", run.strategy);
    }
    let output = config.output_dir.join("apple.txt");
    assert_eq!(fs::read_to_string(output).unwrap(), "Apple\nAPPLE pie\n");
}

#[test]
fn strategies_write_identical_files() {
    let root = tempfile::tempdir().unwrap();
    let corpus_path = root.path().join("words.txt");
    line_filter_bench::corpus::generate(&corpus_path, 5_000, 11).unwrap();
    let pattern = Pattern::parse("Love").unwrap();

    let mut outputs = Vec::new();
    for (i, strategy) in Strategy::all(50, true).into_iter().enumerate() {
        let dir = root.path().join(format!("run{}", i));
        ensure_dirs([&dir]).unwrap();
        let corpus = read_lines(&corpus_path).unwrap();
        let result = strategy.run(&pattern, corpus, &dir).unwrap();

        let written = load_lines(pattern.output_path(&dir)).unwrap();
        assert_eq!(written.len(), result.lines_count);
        outputs.push(written);
    }

    assert!(!outputs[0].is_empty());
    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);

    let expected: Vec<String> = load_lines(&corpus_path)
        .unwrap()
        .into_iter()
        .filter(|line| line.to_lowercase().contains("love"))
        .collect();
    assert_eq!(outputs[0], expected);
}

#[test]
fn memory_figures_differ_but_match_sets_agree() {
    let corpus: String = (0..300).map(|i| format!("pass{}\nother{}\n", i, i)).collect();
    let (_root, config) = workspace(&corpus, 100);
    let pattern = Pattern::parse("PASS").unwrap();

    let runs = run_all(&config, &pattern).unwrap();
    assert!(check_consistency(&runs));
    assert!(runs.iter().all(|r| r.result.lines_count == 300));

    // Streaming counts no collection header; accumulation counts exactly one.
    let streaming = runs[0].result.memory_size;
    let accumulated = runs[2].result.memory_size;
    assert_eq!(accumulated, streaming + std::mem::size_of::<Vec<String>>());
}

#[test]
fn second_run_overwrites_output() {
    let (_root, config) = workspace("Dragon1\ndragon2\nmonkey\n", 100_000);
    let pattern = Pattern::parse("dragon").unwrap();

    let first = run_all(&config, &pattern).unwrap();
    let second = run_all(&config, &pattern).unwrap();

    assert_eq!(first, second);
    let output = pattern.output_path(&config.output_dir);
    assert_eq!(fs::metadata(&output).unwrap().len(), 16);
}

#[test]
fn missing_corpus_fails_before_writing() {
    let (_root, mut config) = workspace("", 10);
    config.corpus_path = Path::new("definitely/not/here.txt").to_path_buf();
    let pattern = Pattern::parse("apple").unwrap();

    let err = run_all(&config, &pattern).unwrap_err();
    assert!(matches!(err, FilterError::CorpusNotFound { .. }));
    assert!(!pattern.output_path(&config.output_dir).exists());
}
