#![expect(missing_docs, reason = "test")]

use nametag_noop::thread::Thread;

#[test]
fn noop_backend() {
    nametag_api::thread::test_suite::test_noop_backend::<Thread>();
}

#[test]
fn unnamed_default() {
    nametag_api::thread::test_suite::test_unnamed_default::<Thread>();
}

#[test]
fn thread_id_unique() {
    nametag_api::thread::test_suite::test_thread_id_unique::<Thread>();
}
