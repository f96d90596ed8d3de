use super::*;

// =============================================================================
// contains_digit — the deliberately loose id-list shape check.
// =============================================================================

#[test]
fn empty_string_has_no_digit() {
    assert!(!contains_digit(""));
}

#[test]
fn letters_only_has_no_digit() {
    assert!(!contains_digit("abc"));
}

#[test]
fn plain_id_list_passes() {
    assert!(contains_digit("1,2,3"));
}

#[test]
fn digit_buried_in_letters_still_passes() {
    // Loose by design: one digit anywhere is enough.
    assert!(contains_digit("abc1"));
}

// =============================================================================
// links_from_urls
// =============================================================================

#[test]
fn urls_become_active_links_in_order() {
    let links = links_from_urls(vec!["http://a".into(), "http://b".into()]);
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].link.as_deref(), Some("http://a"));
    assert_eq!(links[1].link.as_deref(), Some("http://b"));
    for link in &links {
        assert!(link.id.is_none());
        assert_eq!(link.status, Some(1));
    }
}

// =============================================================================
// links_from_edits
// =============================================================================

#[test]
fn edits_keep_id_and_text_but_not_status() {
    let links = links_from_edits(vec![
        LinkEdit { id: 4, link: "http://new".into() },
        LinkEdit { id: 9, link: "http://newer".into() },
    ]);
    assert_eq!(links[0], Link { id: Some(4), link: Some("http://new".into()), status: None });
    assert_eq!(links[1].id, Some(9));
    assert!(links.iter().all(|l| l.status.is_none()));
}

// =============================================================================
// links_from_id_list
// =============================================================================

#[test]
fn id_list_parses_in_order() {
    let links = links_from_id_list("1,2,3").unwrap();
    let ids: Vec<_> = links.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    assert!(links.iter().all(|l| l.link.is_none() && l.status.is_none()));
}

#[test]
fn single_id_parses() {
    let links = links_from_id_list("42").unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].id, Some(42));
}

#[test]
fn non_numeric_token_fails_parse() {
    assert!(links_from_id_list("1,abc").is_err());
}

#[test]
fn empty_token_fails_parse() {
    assert!(links_from_id_list(",1").is_err());
}

// =============================================================================
// payload deserialization — wire names from the external interface.
// =============================================================================

#[test]
fn add_links_body_without_list_is_none() {
    let body: AddLinksBody = serde_json::from_str("{}").unwrap();
    assert!(body.links.is_none());
}

#[test]
fn edit_links_body_uses_po_list_wire_name() {
    let body: EditLinksBody =
        serde_json::from_str(r#"{"poList":[{"id":1,"link":"http://a"}]}"#).unwrap();
    let edits = body.edits.unwrap();
    assert_eq!(edits[0].id, 1);
    assert_eq!(edits[0].link, "http://a");
}

#[test]
fn delete_links_query_uses_id_list_wire_name() {
    let query: DeleteLinksQuery = serde_json::from_str(r#"{"idList":"1,2"}"#).unwrap();
    assert_eq!(query.ids.as_deref(), Some("1,2"));
}
