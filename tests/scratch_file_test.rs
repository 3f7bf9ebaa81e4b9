use medscribe::application::services::ScratchFile;

#[test]
fn given_claimed_filename_with_extension_then_scratch_path_keeps_it() {
    let scratch = ScratchFile::create(b"bytes", Some("consult.mp3")).unwrap();

    assert_eq!(
        scratch.path().extension().and_then(|e| e.to_str()),
        Some("mp3")
    );
    assert_eq!(std::fs::read(scratch.path()).unwrap(), b"bytes");
}

#[test]
fn given_no_filename_then_defaults_to_browser_recording_container() {
    let scratch = ScratchFile::create(b"bytes", None).unwrap();

    assert_eq!(
        scratch.path().extension().and_then(|e| e.to_str()),
        Some("webm")
    );
}

#[test]
fn given_extensionless_filename_then_defaults_to_browser_recording_container() {
    let scratch = ScratchFile::create(b"bytes", Some("blob")).unwrap();

    assert_eq!(
        scratch.path().extension().and_then(|e| e.to_str()),
        Some("webm")
    );
}

#[test]
fn given_suffix_with_path_separator_then_defaults_to_browser_recording_container() {
    let scratch = ScratchFile::create(b"bytes", Some("clip.a/b")).unwrap();

    assert_eq!(
        scratch.path().extension().and_then(|e| e.to_str()),
        Some("webm")
    );
}

#[test]
fn given_uppercase_suffix_then_extension_is_lowercased() {
    let scratch = ScratchFile::create(b"bytes", Some("VISIT.WAV")).unwrap();

    assert_eq!(
        scratch.path().extension().and_then(|e| e.to_str()),
        Some("wav")
    );
}

#[test]
fn given_dropped_handle_then_file_is_removed_from_disk() {
    let path = {
        let scratch = ScratchFile::create(b"bytes", Some("visit.wav")).unwrap();
        assert!(scratch.path().exists());
        scratch.path().to_path_buf()
    };

    assert!(!path.exists());
}

#[test]
fn given_two_scratch_files_then_names_never_collide() {
    let a = ScratchFile::create(b"a", Some("visit.wav")).unwrap();
    let b = ScratchFile::create(b"b", Some("visit.wav")).unwrap();

    assert_ne!(a.path(), b.path());
}

#[test]
fn given_canonical_sibling_then_path_differs_even_for_wav_input() {
    let scratch = ScratchFile::create(b"bytes", Some("visit.wav")).unwrap();
    let sibling = scratch.canonical_sibling();

    assert_ne!(sibling, scratch.path());
    assert!(sibling.to_string_lossy().ends_with(".canonical.wav"));
}
