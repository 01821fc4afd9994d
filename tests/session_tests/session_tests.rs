//! Tests for Session
//!
//! These tests verify:
//! - read = transport read + decode
//! - Per-key independence of read_many
//! - Close semantics
//! - Shared sessions across threads
//! - Configuration validation and open failures

use std::thread;

use smcprobe::config::Config;
use smcprobe::protocol::Command;
use smcprobe::transport::simulated::SimulatedController;
use smcprobe::transport::{KernReturn, Phase};
use smcprobe::{Session, SmcError};

// =============================================================================
// Helper Functions
// =============================================================================

fn demo_session() -> Session<SimulatedController> {
    Session::with_connection(SimulatedController::demo())
}

// =============================================================================
// Read Tests
// =============================================================================

#[test]
fn test_read_decodes_value() {
    let session = demo_session();

    assert_eq!(session.read("TC0P").unwrap(), 45.5);
    assert_eq!(session.read("F0Ac").unwrap(), 2000.0);
}

#[test]
fn test_read_raw_keeps_metadata() {
    let session = demo_session();

    let reading = session.read_raw("VP0R").unwrap();

    assert_eq!(reading.info.data_type, "flt ");
    assert_eq!(reading.info.size, 4);
    assert_eq!(reading.declared_bytes(), &12.25f32.to_bits().to_be_bytes());
    assert_eq!(reading.value(), 12.25);
}

#[test]
fn test_read_short_key_is_padded() {
    let session = Session::with_connection(SimulatedController::new().with_key("AB", "ui8 ", &[7]));

    assert_eq!(session.read("AB").unwrap(), 7.0);
    assert_eq!(session.read("AB\0\0").unwrap(), 7.0);
}

#[test]
fn test_read_propagates_transport_error() {
    let session = Session::with_connection(
        SimulatedController::demo().fail_on(Command::ReadBytes, KernReturn::NOT_RESPONDING),
    );

    match session.read("TC0P") {
        Err(SmcError::Transport { phase, status }) => {
            assert_eq!(phase, Phase::ReadBytes);
            assert_eq!(status, KernReturn::NOT_RESPONDING);
        }
        other => panic!("Expected transport error, got {:?}", other),
    }
}

#[test]
fn test_caller_retry_after_failure() {
    let session = Session::with_connection(
        SimulatedController::demo().fail_on(Command::ReadKeyInfo, KernReturn::EXCLUSIVE_ACCESS),
    );

    assert!(session.read("TC0P").is_err());

    session.connection().clear_failures();
    assert_eq!(session.read("TC0P").unwrap(), 45.5);
}

#[test]
fn test_read_many_reports_each_key() {
    let controller = SimulatedController::demo();
    controller.set_failure(Command::ReadKeyInfo, KernReturn::TIMEOUT);
    let session = Session::with_connection(controller);

    let results = session.read_many(["TC0P", "FNum"]);
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|(_, r)| r.is_err()));

    session.connection().clear_failures();
    let results = session.read_many(["TC0P", "ZZZZ", "FNum"]);

    assert_eq!(results[0].0, "TC0P");
    assert_eq!(*results[0].1.as_ref().unwrap(), 45.5);
    assert_eq!(*results[1].1.as_ref().unwrap(), 0.0);
    assert_eq!(*results[2].1.as_ref().unwrap(), 2.0);
}

// =============================================================================
// Close Tests
// =============================================================================

#[test]
fn test_close_releases_connection() {
    let controller = SimulatedController::demo();
    let session = Session::with_connection(&controller);

    session.read("TC0P").unwrap();
    session.close().unwrap();

    assert_eq!(controller.request_count(), 2);
    assert!(controller.is_closed());

    let err = smcprobe::read_key(&controller, "TC0P").unwrap_err();
    assert_eq!(err.status(), Some(KernReturn::NOT_OPEN));
    assert_eq!(controller.request_count(), 2);
}

#[test]
fn test_close_twice_through_borrowed_sessions() {
    let controller = SimulatedController::demo();

    Session::with_connection(&controller).close().unwrap();

    match Session::with_connection(&controller).close() {
        Err(SmcError::Close(status)) => assert_eq!(status, KernReturn::NOT_OPEN),
        other => panic!("Expected close error, got {:?}", other),
    }
}

#[test]
fn test_close_reports_failure_status() {
    struct StubbornConnection;

    impl smcprobe::StructuredCall for StubbornConnection {
        fn call_struct_method(&self, _: u32, _: &[u8], _: &mut [u8]) -> KernReturn {
            KernReturn::NOT_OPEN
        }

        fn close(&self) -> KernReturn {
            KernReturn::ERROR
        }
    }

    let session = Session::with_connection(StubbornConnection);

    match session.close() {
        Err(SmcError::Close(status)) => assert_eq!(status, KernReturn::ERROR),
        other => panic!("Expected close error, got {:?}", other),
    }
}

// =============================================================================
// Shared Session Tests
// =============================================================================

#[test]
fn test_shared_session_concurrent_reads() {
    let shared = demo_session().into_shared();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || {
                let key = if i % 2 == 0 { "TC0P" } else { "F0Ac" };
                (0..50).map(|_| shared.read(key).unwrap()).collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let expected = if i % 2 == 0 { 45.5 } else { 2000.0 };
        assert!(handle.join().unwrap().iter().all(|&v| v == expected));
    }

    let session = shared.into_inner().expect("all clones dropped");
    let requests = session.connection().requests();
    assert_eq!(requests.len(), 8 * 50 * 2);

    // Serialized pairs: every key-info is immediately followed by its read-bytes.
    for pair in requests.chunks(2) {
        assert_eq!(pair[0].command(), Some(Command::ReadKeyInfo));
        assert_eq!(pair[1].command(), Some(Command::ReadBytes));
        assert_eq!(pair[0].key, pair[1].key);
    }
}

#[test]
fn test_shared_into_inner_with_live_clone() {
    let shared = demo_session().into_shared();
    let _other = shared.clone();

    assert!(shared.into_inner().is_none());
}

// =============================================================================
// Config / Open Tests
// =============================================================================

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.service_name, "AppleSMC");
    assert_eq!(config.poll_interval_ms, 1000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_builder_and_validation() {
    let config = Config::builder()
        .service_name("AppleSMCKeysEndpoint")
        .poll_interval_ms(250)
        .build();
    assert_eq!(config.service_name, "AppleSMCKeysEndpoint");
    assert_eq!(config.poll_interval_ms, 250);

    let empty = Config::builder().service_name("  ").build();
    assert!(matches!(empty.validate(), Err(SmcError::Config(_))));

    let zero = Config::builder().poll_interval_ms(0).build();
    assert!(matches!(zero.validate(), Err(SmcError::Config(_))));
}

#[test]
fn test_open_rejects_invalid_config() {
    let config = Config::builder().service_name("").build();

    assert!(matches!(Session::open(&config), Err(SmcError::Config(_))));
}

#[cfg(not(target_os = "macos"))]
#[test]
fn test_open_unavailable_off_macos() {
    match Session::open(&Config::default()) {
        Err(SmcError::ConnectionUnavailable { service, status }) => {
            assert_eq!(service, "AppleSMC");
            assert_eq!(status, KernReturn::UNSUPPORTED);
        }
        other => panic!("Expected unavailable connection, got {:?}", other.map(|_| ())),
    }
}

#[cfg(target_os = "macos")]
#[test]
fn test_open_unknown_service_is_unavailable() {
    let config = Config::builder().service_name("NoSuchSmcServiceClass").build();

    match Session::open(&config) {
        Err(SmcError::ConnectionUnavailable { service, status }) => {
            assert_eq!(service, "NoSuchSmcServiceClass");
            assert_eq!(status, KernReturn::ERROR);
        }
        other => panic!("Expected unavailable connection, got {:?}", other.map(|_| ())),
    }
}
