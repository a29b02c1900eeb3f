use super::*;

#[test]
fn decode_reads_stored_session() {
    let raw = r#"{"user_id":"u-1","email":"a@b.test","display_name":null,"access_token":"t","refresh_token":"r","expires_at":1700000000}"#;
    let session: Session = decode(raw).unwrap();
    assert_eq!(session.user_id, "u-1");
    assert_eq!(session.refresh_token.as_deref(), Some("r"));
    assert_eq!(session.expires_at, Some(1_700_000_000));
}

#[test]
fn decode_treats_corrupt_entry_as_absent() {
    assert!(decode::<Session>("{not json").is_none());
    assert!(decode::<Session>("").is_none());
}

#[test]
fn storage_is_unavailable_off_browser() {
    save_session(&Session { access_token: "t".into(), ..Session::default() });
    assert!(load_session().is_none());
    clear_session();
}
