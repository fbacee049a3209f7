//! Concurrent frame use

use crate::helpers::numbered_frame;
use microframe::ElementType;
use std::sync::Arc;
use std::thread;

#[test]
fn test_readers_see_whole_stores_during_renames() {
    let frame = Arc::new(numbered_frame(100));

    let writer = {
        let frame = Arc::clone(&frame);
        thread::spawn(move || {
            for i in 0..200 {
                let (from, to) = if i % 2 == 0 { ("id", "key") } else { ("key", "id") };
                frame.rename([(from, to)]).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let frame = Arc::clone(&frame);
            thread::spawn(move || {
                for _ in 0..200 {
                    let store = frame.snapshot();
                    let names = store.column_names();
                    assert!(names == vec!["id", "label"] || names == vec!["key", "label"]);
                    assert_eq!(store.row_count(), 100);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(frame.column_names(), vec!["id", "label"]);
}

#[test]
fn test_concurrent_retypes_serialize() {
    let frame = Arc::new(numbered_frame(50));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let frame = Arc::clone(&frame);
            thread::spawn(move || {
                let target = if i % 2 == 0 { ElementType::Float } else { ElementType::Integer };
                frame.change_dtypes([("id", target)]).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    let dtype = frame.types()[0].1;
    assert!(dtype == ElementType::Float || dtype == ElementType::Integer);
    assert_eq!(frame.count(), 50);
}
