use exercise_log::{get_logger, init_with, Config, Error, Logger};

#[test]
fn failed_build_is_retried_and_first_callers_share_one_logger() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        file_path: dir.path().join("missing").join("log_file.txt"),
        ..Config::default()
    };

    match init_with(config) {
        Err(Error::OpenLogFile { path, .. }) => assert!(path.ends_with("missing/log_file.txt")),
        Err(err) => panic!("unexpected error {err:?}"),
        Ok(_) => panic!("building on a missing directory should fail"),
    }

    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| get_logger().map(|logger| logger as *const Logger as usize)))
        .collect();

    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();

    let first = get_logger().unwrap();
    assert_eq!(first.name(), "exercise");
    assert_eq!(first.sinks().len(), 2);
    for address in addresses {
        assert_eq!(address, first as *const Logger as usize);
    }
}
