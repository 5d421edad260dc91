use super::*;

fn guest(id: &str, name: &str, email: &str) -> Guest {
    Guest { id: id.to_owned(), name: name.to_owned(), email: email.to_owned(), phone: None, vip: false }
}

fn seeded() -> GuestState {
    let mut state = GuestState::default();
    state.replace_all(vec![
        guest("g-1", "Ada Lovelace", "ada@example.com"),
        guest("g-2", "Grace Hopper", "grace@navy.mil"),
    ]);
    state
}

#[test]
fn upsert_inserts_then_overwrites() {
    let mut state = seeded();
    state.upsert(guest("g-3", "Alan Turing", "alan@example.com"));
    assert_eq!(state.guests.len(), 3);

    let mut renamed = guest("g-1", "Ada King", "ada@example.com");
    renamed.vip = true;
    state.upsert(renamed);
    assert_eq!(state.guests.len(), 3);
    assert_eq!(state.get("g-1").unwrap().name, "Ada King");
    assert!(state.get("g-1").unwrap().vip);
}

#[test]
fn remove_clears_matching_selection() {
    let mut state = seeded();
    state.select(Some("g-2"));
    assert_eq!(state.selected_guest().unwrap().name, "Grace Hopper");

    let removed = state.remove("g-2").unwrap();
    assert_eq!(removed.id, "g-2");
    assert!(state.selected.is_none());
    assert!(state.remove("g-2").is_none());
}

#[test]
fn select_unknown_id_clears_selection() {
    let mut state = seeded();
    state.select(Some("g-1"));
    state.select(Some("missing"));
    assert!(state.selected.is_none());
}

#[test]
fn replace_all_drops_stale_selection() {
    let mut state = seeded();
    state.select(Some("g-1"));
    state.replace_all(vec![guest("g-2", "Grace Hopper", "grace@navy.mil")]);
    assert!(state.selected.is_none());
}

#[test]
fn filtered_matches_name_or_email_case_insensitive() {
    let mut state = seeded();
    state.set_filter("  NAVY ");
    let hits: Vec<_> = state.filtered().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(hits, vec!["g-2"]);

    state.set_filter("ada");
    assert_eq!(state.filtered().len(), 1);

    state.set_filter("");
    assert_eq!(state.filtered().len(), 2);
}
