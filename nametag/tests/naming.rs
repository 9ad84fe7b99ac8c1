#![expect(missing_docs, reason = "test")]

// On targets served by the no-op backend, reads are always empty; the
// read-back assertions only hold where a native primitive exists.
#[test]
#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    windows
))]
fn names_and_reads_back_the_calling_thread() {
    std::thread::spawn(|| {
        nametag::set_current_thread_name("facade-check").unwrap();
        assert_eq!(
            nametag::current_thread_name().unwrap().as_str(),
            "facade-check"
        );

        let handle = nametag::current_thread();
        assert_eq!(
            nametag::thread_name(&handle).unwrap().as_str(),
            "facade-check"
        );
    })
    .join()
    .unwrap();
}

#[test]
fn setting_a_name_never_panics() {
    std::thread::spawn(|| {
        nametag::set_current_thread_name("a-name-well-over-any-platform-limit-xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx")
            .unwrap();
    })
    .join()
    .unwrap();
}

#[test]
fn thread_ids_differ_across_threads() {
    let main_id = nametag::current_thread_id();
    let other_id = std::thread::spawn(nametag::current_thread_id)
        .join()
        .unwrap();

    assert_ne!(main_id, other_id);
}
