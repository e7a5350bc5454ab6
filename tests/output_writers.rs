// tests/output_writers.rs

use std::io::Write;
use std::sync::Arc;
use std::thread;

use kubectl_foreach::output::{PrefixWriter, SynchronizedWriter, label_width, task_label};
use kubectl_foreach_test_utils::io::{BrokenSink, ChunkRecorder, SharedBuffer};

#[test]
fn test_synchronized_writer_no_torn_writes() {
    let sw = SynchronizedWriter::new(Vec::<u8>::new());
    let n = 1000;
    let seq = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    let handles: Vec<_> = (0..n)
        .map(|_| {
            let mut w = sw.clone();
            thread::spawn(move || {
                w.write(seq.as_bytes()).unwrap();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let out = String::from_utf8(sw.into_inner().unwrap()).unwrap();
    assert_eq!(out.len(), 26 * n);
    assert_eq!(out.matches(seq).count(), n);
}

#[test]
fn test_synchronized_writer_from_tokio_tasks() {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .build()
        .unwrap();
    let buf = SharedBuffer::new();
    let sw = SynchronizedWriter::new(buf.clone());
    let line = "0123456789\n";

    rt.block_on(async {
        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..200 {
            let mut w = sw.clone();
            tasks.spawn(async move {
                for _ in 0..5 {
                    w.write_all(line.as_bytes()).unwrap();
                    tokio::task::yield_now().await;
                }
            });
        }
        while let Some(res) = tasks.join_next().await {
            res.unwrap();
        }
    });

    let text = buf.text();
    assert_eq!(text.lines().count(), 1000);
    assert!(text.lines().all(|l| l == "0123456789"));
}

#[test]
fn test_synchronized_writer_propagates_errors() {
    let mut sw = SynchronizedWriter::new(BrokenSink);
    assert!(sw.write(b"x").is_err());
    // lock released on the error path
    assert!(sw.write(b"y").is_err());
}

#[test]
fn test_prefix_writer() {
    let mut b = Vec::new();
    {
        let mut pw = PrefixWriter::new("p: ", &mut b);

        // single line (no trailing newline)
        assert_eq!(pw.write(b"hello").unwrap(), 5);

        // continuation of the line + a new partial one
        assert_eq!(pw.write(b"a\nb").unwrap(), 3);
        assert_eq!(pw.get_ref().as_slice(), b"p: helloa\n");

        assert_eq!(pw.write(b"eof\n").unwrap(), 4);
        pw.finish().unwrap();
    }
    assert_eq!(String::from_utf8(b).unwrap(), "p: helloa\np: beof\n");
}

#[test]
fn test_prefix_writer_holds_partial_lines() {
    let rec = ChunkRecorder::new();
    let mut pw = PrefixWriter::new("ctx | ", rec.clone());

    pw.write_all(b"no newline yet").unwrap();
    assert!(rec.chunks().is_empty());

    pw.write_all(b"\n").unwrap();
    assert_eq!(rec.chunks(), vec!["ctx | no newline yet\n"]);
}

#[test]
fn test_prefix_writer_splits_merged_lines() {
    let rec = ChunkRecorder::new();
    let mut pw = PrefixWriter::new("> ", rec.clone());

    pw.write_all(b"one\ntwo\nthree\nfour").unwrap();
    pw.finish().unwrap();

    assert_eq!(rec.chunks(), vec!["> one\n", "> two\n", "> three\n", "> four\n"]);
}

#[test]
fn test_prefix_writer_finish_adds_missing_newline_in_one_write() {
    let rec = ChunkRecorder::new();
    let mut pw = PrefixWriter::new("> ", rec.clone());

    pw.write_all(b"tail").unwrap();
    pw.finish().unwrap();

    assert_eq!(rec.chunks(), vec!["> tail\n"]);
}

#[test]
fn test_prefix_writer_finish_is_idempotent() {
    let rec = ChunkRecorder::new();
    let mut pw = PrefixWriter::new("> ", rec.clone());

    pw.finish().unwrap();
    pw.write_all(b"x\n").unwrap();
    pw.finish().unwrap();
    pw.finish().unwrap();

    assert_eq!(rec.chunks(), vec!["> x\n"]);
}

#[test]
fn test_prefix_writer_empty_write_emits_nothing() {
    let rec = ChunkRecorder::new();
    let mut pw = PrefixWriter::new("> ", rec.clone());

    assert_eq!(pw.write(b"").unwrap(), 0);
    pw.finish().unwrap();

    assert!(rec.chunks().is_empty());
}

#[test]
fn test_prefix_writer_blank_lines_are_prefixed() {
    let mut b = Vec::new();
    let mut pw = PrefixWriter::new("> ", &mut b);
    pw.write_all(b"\n\n").unwrap();
    pw.finish().unwrap();
    assert_eq!(b, b"> \n> \n");
}

#[test]
fn test_prefix_writer_surfaces_inner_errors() {
    let mut pw = PrefixWriter::new("> ", BrokenSink);
    assert!(pw.write(b"partial").is_ok());
    assert!(pw.write(b"\n").is_err());
}

#[test]
fn test_prefixed_lines_from_many_writers_stay_whole() {
    let buf = SharedBuffer::new();
    let shared = SynchronizedWriter::new(buf.clone());
    let shared = Arc::new(shared);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let mut pw = PrefixWriter::new(format!("w{i} | "), (*shared).clone());
                for _ in 0..50 {
                    // deliberately split each line across writes
                    pw.write_all(b"abc").unwrap();
                    pw.write_all(b"def\nghi").unwrap();
                    pw.write_all(b"\n").unwrap();
                }
                pw.finish().unwrap();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let text = buf.text();
    assert_eq!(text.lines().count(), 8 * 100);
    for line in text.lines() {
        let (label, body) = line.split_once(" | ").expect("line without label");
        assert!(label.starts_with('w'));
        assert!(body == "abcdef" || body == "ghi", "torn line: {line:?}");
    }
}

#[test]
fn test_task_label_pads_to_widest_name() {
    let contexts = ["a", "prod-eu", "dev"];
    let width = label_width(&contexts);
    assert_eq!(width, 7);

    assert_eq!(task_label("a", 0, width, false), "      a | ");
    assert_eq!(task_label("prod-eu", 1, width, false), "prod-eu | ");
    assert_eq!(task_label("dev", 2, width, false), "    dev | ");
}

#[test]
fn test_task_label_colours_cycle() {
    use kubectl_foreach::output::palette::palette_len;

    let n = palette_len();
    let first = task_label("ctx", 0, 3, true);
    let wrapped = task_label("ctx", n, 3, true);
    let second = task_label("ctx", 1, 3, true);

    assert_eq!(first, wrapped);
    assert_ne!(first, second);
    assert!(first.contains("\u{1b}["), "expected ANSI escape in {first:?}");
    assert!(first.ends_with(" | "));
}
