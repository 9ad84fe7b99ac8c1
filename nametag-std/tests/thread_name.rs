#![expect(missing_docs, reason = "test")]

use nametag_std::thread::Thread;

#[test]
fn round_trip() {
    nametag_api::thread::test_suite::test_round_trip::<Thread>();
}

#[test]
fn idempotence() {
    nametag_api::thread::test_suite::test_idempotence::<Thread>();
}

#[test]
fn truncation() {
    nametag_api::thread::test_suite::test_truncation::<Thread>();
}

#[test]
fn unnamed_default() {
    nametag_api::thread::test_suite::test_unnamed_default::<Thread>();
}

#[test]
fn invalid_name_rejected() {
    nametag_api::thread::test_suite::test_invalid_name_rejected::<Thread>();
}

#[test]
fn cross_thread_isolation() {
    nametag_api::thread::test_suite::test_cross_thread_isolation::<Thread>();
}

// Android can only read the calling thread's name.
#[test]
#[cfg(not(target_os = "android"))]
fn cross_thread_read() {
    nametag_api::thread::test_suite::test_cross_thread_read::<Thread>();
}

#[test]
fn thread_id_unique() {
    nametag_api::thread::test_suite::test_thread_id_unique::<Thread>();
}
