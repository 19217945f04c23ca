//! 并发识别测试：全新识别器上的并发首调用只触发一次构建，且结果一致

use std::sync::{Arc, Barrier};
use std::thread;

use rsuaclient::{
    ClientBrowserType, ClientSystemType, DetectorConfig, MatcherCache, UaDetector, Version,
};

const CONCURRENT_LEVEL: usize = 32;
const UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 14_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 MicroMessenger/7.0.0(0x17000024) NetType/WIFI";

#[test]
fn test_threads_build_each_cache_once() {
    let detector = UaDetector::default();
    assert_eq!(detector.system_cache().build_count(), 0);

    let barrier = Arc::new(Barrier::new(CONCURRENT_LEVEL));
    let handles: Vec<_> = (0..CONCURRENT_LEVEL)
        .map(|_| {
            let detector = detector.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                detector.detect(UA)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(detector.system_cache().build_count(), 1);
    assert_eq!(detector.browser_cache().build_count(), 1);

    let expected = results[0];
    assert!(results.iter().all(|r| *r == expected));
    assert_eq!(expected.system.kind, ClientSystemType::IPhone);
    assert_eq!(expected.system.version, Version::new(14, 4, 0, 0));
    assert_eq!(expected.browser.kind, ClientBrowserType::WeiXin);
    assert_eq!(expected.browser.version, Version::new(7, 0, 0, 0));
}

#[test]
fn test_injected_caches_shared_across_detectors() {
    let config = DetectorConfig::default();
    let systems = Arc::new(MatcherCache::<ClientSystemType>::builtin(&config));
    let browsers = Arc::new(MatcherCache::<ClientBrowserType>::builtin(&config));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let detector =
                UaDetector::with_caches(Arc::clone(&systems), Arc::clone(&browsers), config.clone());
            thread::spawn(move || detector.detect(UA))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().system.kind, ClientSystemType::IPhone);
    }
    assert_eq!(systems.build_count(), 1);
    assert_eq!(browsers.build_count(), 1);
}

#[test]
fn test_empty_inputs_never_build_under_contention() {
    let detector = UaDetector::default();

    thread::scope(|scope| {
        for _ in 0..CONCURRENT_LEVEL {
            scope.spawn(|| {
                assert!(detector.detect("").is_unknown());
                assert!(detector.detect_opt(None).is_unknown());
            });
        }
    });

    assert!(!detector.system_cache().is_built());
    assert!(!detector.browser_cache().is_built());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_tokio_tasks_build_once() {
    let detector = UaDetector::default();

    let mut tasks = Vec::with_capacity(CONCURRENT_LEVEL * 2);
    for _ in 0..CONCURRENT_LEVEL * 2 {
        let detector = detector.clone();
        tasks.push(tokio::task::spawn_blocking(move || detector.detect(UA)));
    }

    let mut results = Vec::with_capacity(tasks.len());
    for task in tasks {
        results.push(task.await.unwrap());
    }

    assert!(results.iter().all(|r| *r == results[0]));
    assert_eq!(detector.system_cache().build_count(), 1);
    assert_eq!(detector.browser_cache().build_count(), 1);
}
