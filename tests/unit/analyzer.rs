//! Public analyzer surface: tokenization, stemming, stop words.

use neomys::{is_stop_word, normalize, stem, tokenize};

#[test]
fn tokenize_agrees_with_itself() {
    let text = "Sharded Clusters: a deployment-topology overview!";
    let once = tokenize(text, false);
    let again = tokenize(&once.join(" "), false);
    assert_eq!(once, again);
}

#[test]
fn tokenize_splits_on_non_alphanumeric_runs() {
    assert_eq!(
        tokenize("mongod --port=27017 (default)", false),
        vec!["mongod", "port", "27017", "default"]
    );
}

#[test]
fn prefix_retention_is_opt_in() {
    assert_eq!(tokenize("$match %%atlas", true), vec!["$match", "%%atlas"]);
    assert_eq!(tokenize("$match %%atlas", false), vec!["match", "atlas"]);
}

#[test]
fn stemming_folds_inflections_together() {
    assert_eq!(stem("connection"), stem("connections"));
    assert_eq!(stem("indexing"), stem("indexes"));
    assert_eq!(stem("queried"), stem("queries"));
}

#[test]
fn stemming_is_idempotent_on_real_vocabulary() {
    let vocabulary = [
        "aggregation", "databases", "replication", "sharding", "transactions",
        "connecting", "optimized", "queries", "deployment", "journaling",
    ];
    for word in vocabulary {
        let once = stem(word);
        assert_eq!(stem(&once), once, "stem(stem({word})) != stem({word})");
    }
}

#[test]
fn normalize_lowercases_and_collapses() {
    assert_eq!(normalize("  Replica   SET  "), "replica set");
}

#[test]
fn stop_words_are_case_stable() {
    assert!(is_stop_word("the"));
    assert!(is_stop_word("because"));
    assert!(!is_stop_word("replica"));
}
