//! A single prefix table shared across threads

use sentsplit_core::{classify, Splitter};
use std::sync::Arc;
use std::thread;

#[test]
fn test_shared_table_across_threads() {
    let splitter = Splitter::for_language("en").unwrap();
    let texts: Vec<String> = (0..8)
        .map(|i| format!("Dr. Jones saw patient No. {i} today. The visit went well."))
        .collect();

    let expected: Vec<String> = texts.iter().map(|t| splitter.split_text(t)).collect();

    let handles: Vec<_> = texts
        .into_iter()
        .map(|text| {
            let splitter = splitter.clone();
            thread::spawn(move || splitter.split_text(&text))
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, expected);
    assert_eq!(
        results[3],
        "Dr. Jones saw patient No. 3 today.\nThe visit went well.\n"
    );
}

#[test]
fn test_arc_table_without_splitter() {
    let splitter = Splitter::for_language("fr").unwrap();
    let table = Arc::new(splitter.table().clone());

    let handle = {
        let table = Arc::clone(&table);
        thread::spawn(move || classify("M. Dupont est arrivé. Il a souri.", &table))
    };

    assert_eq!(handle.join().unwrap(), "M. Dupont est arrivé.\nIl a souri.\n");
}

#[test]
fn test_split_documents_matches_sequential() {
    let splitter = Splitter::for_language("en").unwrap();
    let docs: Vec<String> = (0..64)
        .map(|i| format!("Doc {i}. Mr. Smith wrote it.\n\nSecond part? Yes."))
        .collect();

    let parallel = splitter.split_documents(&docs);
    let sequential: Vec<String> = docs.iter().map(|d| splitter.split_text(d)).collect();
    assert_eq!(parallel, sequential);
}
