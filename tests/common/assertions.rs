//! Assertion macros with descriptive failure messages.

/// Assert that a CLI run succeeded, printing both streams otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "Expected success, got exit code {}.\nstdout:\n{}\nstderr:\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a CLI run failed and mentioned `$needle` somewhere.
#[macro_export]
macro_rules! assert_failure {
    ($result:expr, $needle:expr) => {
        assert!(
            !$result.success,
            "Expected failure, but command succeeded.\nstdout:\n{}",
            $result.stdout
        );
        assert!(
            $result.combined_output().contains($needle),
            "Expected output to contain '{}'.\nOutput:\n{}",
            $needle,
            $result.combined_output()
        );
    };
}

/// Assert that a catalog call failed with the given `ErrorKind`.
#[macro_export]
macro_rules! assert_kind {
    ($result:expr, $kind:expr) => {
        match $result {
            Ok(value) => panic!("Expected {:?} error, got Ok({:?})", $kind, value),
            Err(err) => assert_eq!(err.kind(), $kind, "unexpected error: {}", err),
        }
    };
}
