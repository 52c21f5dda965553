//! The cache itself is unsynchronized; these tests share it behind a lock.

use std::sync::Arc;
use std::thread;

use bytelru::{Cache, CacheConfig, OnEvict};
use parking_lot::Mutex;

#[test]
fn shared_behind_mutex() {
    let evicted = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&evicted);
    let on_evict: OnEvict<Vec<u8>> = Box::new(move |key: String, _value: Vec<u8>| {
        sink.lock().push(key);
    });

    // Each entry is 4 bytes of key plus 4 bytes of value
    let cache = Arc::new(Mutex::new(Cache::with_config(
        CacheConfig::new(8 * 16),
        Some(on_evict),
    )));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..25 {
                    let key = format!("{}{:03}", t, i);
                    cache.lock().add(key, vec![0u8; 4]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let cache = cache.lock();
    assert_eq!(cache.len(), 16);
    assert_eq!(cache.bytes(), 8 * 16);
    assert_eq!(evicted.lock().len(), 100 - 16);
    assert_eq!(cache.stats().evictions(), 84);
}

#[test]
fn lookups_from_many_threads() {
    let cache = Arc::new(Mutex::new(Cache::new(0, None)));
    {
        let mut cache = cache.lock();
        cache.add("shared", String::from("value"));
    }

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for _ in 0..10 {
                    assert_eq!(
                        cache.lock().get("shared").map(String::as_str),
                        Some("value")
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let cache = cache.lock();
    assert_eq!(cache.stats().hits(), 40);
    assert_eq!(cache.bytes(), "shared".len() + "value".len());
}
