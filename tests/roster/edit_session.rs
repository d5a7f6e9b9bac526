use roster_rust::{BackingStore, Field, InMemoryBackingStore, Notification, Roster, RosterError};

use crate::support::{roster, type_draft, valid};

fn seeded() -> (Roster<InMemoryBackingStore>, crate::support::Seen, u64) {
    let (mut roster, seen) = roster();
    type_draft(&mut roster, &valid("derrick henry", "95"));
    let id = roster.add().unwrap().id;
    type_draft(&mut roster, &valid("nick chubb", "90"));
    roster.add().unwrap();
    (roster, seen, id)
}

#[test]
fn start_edit_copies_fields() {
    let (mut roster, _, id) = seeded();

    roster.start_edit(id).unwrap();

    assert_eq!(roster.editing_id(), Some(id));
    assert_eq!(roster.draft().name, "Derrick Henry");
    assert_eq!(roster.draft().rating, "95");
}

#[test]
fn cancel_leaves_store_untouched() {
    let (mut roster, seen, id) = seeded();
    let before = roster.stored().to_vec();
    let raw_before = roster.backing().get("players").unwrap();

    roster.start_edit(id).unwrap();
    roster.set_field(Field::Name, "");
    roster.set_field(Field::Rating, "1000");
    roster.set_field(Field::Position, "ZZ");
    roster.cancel_edit();

    assert_eq!(roster.stored(), before.as_slice());
    assert_eq!(roster.backing().get("players").unwrap(), raw_before);
    assert!(!roster.is_editing());
    assert!(roster.draft().is_empty());
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[test]
fn save_replaces_in_place_and_keeps_id() {
    let (mut roster, seen, id) = seeded();

    roster.start_edit(id).unwrap();
    roster.set_field(Field::Name, "king henry");
    roster.set_field(Field::Year, "SR (RS)");
    let saved = roster.save_edit().unwrap();

    assert_eq!(saved.id, id);
    assert_eq!(saved.name, "King Henry");
    assert_eq!(roster.stored().len(), 2);
    assert_eq!(roster.stored()[0], saved);
    assert!(!roster.is_editing());
    assert!(roster.draft().is_empty());
    assert_eq!(
        seen.lock().unwrap().last(),
        Some(&Notification::PlayerUpdated {
            id,
            name: "King Henry".into()
        })
    );
}

#[test]
fn invalid_save_stays_in_session() {
    let (mut roster, _, id) = seeded();
    let before = roster.stored().to_vec();

    roster.start_edit(id).unwrap();
    roster.set_field(Field::Rating, "abc");
    let err = roster.save_edit().unwrap_err();

    assert!(matches!(err, RosterError::Validation(_)));
    assert_eq!(roster.editing_id(), Some(id));
    assert_eq!(roster.draft().rating, "abc");
    assert_eq!(roster.errors().fields(), vec![Field::Rating]);
    assert_eq!(roster.stored(), before.as_slice());

    roster.set_field(Field::Rating, "96");
    assert_eq!(roster.save_edit().unwrap().rating, "96");
    assert!(roster.errors().is_empty());
}

#[test]
fn save_revalidates_untouched_fields() {
    let (mut roster, _, id) = seeded();

    roster.start_edit(id).unwrap();
    // Only the name is "changed", but the whole draft is checked.
    roster.set_draft(roster_rust::PlayerDraft::new("Henry", "RB", "JR", "101"));
    let err = roster.save_edit().unwrap_err();

    assert_eq!(err.field_errors().unwrap().fields(), vec![Field::Rating]);
}

#[test]
fn removing_edited_player_closes_session() {
    let (mut roster, _, id) = seeded();
    roster.start_edit(id).unwrap();
    roster.set_field(Field::Name, "typed but never saved");

    assert!(roster.remove(id).unwrap());

    assert!(!roster.is_editing());
    assert!(roster.draft().is_empty());
    assert_eq!(roster.save_edit(), Err(RosterError::NotEditing));
    assert_eq!(roster.stored().len(), 1);
}

#[test]
fn removing_other_player_keeps_session() {
    let (mut roster, _, id) = seeded();
    let other = roster
        .stored()
        .iter()
        .find(|p| p.id != id)
        .map(|p| p.id)
        .unwrap();

    roster.start_edit(id).unwrap();
    roster.set_field(Field::Rating, "80");
    roster.remove(other).unwrap();

    assert_eq!(roster.editing_id(), Some(id));
    assert_eq!(roster.save_edit().unwrap().rating, "80");
}

#[test]
fn only_one_session_at_a_time() {
    let (mut roster, _, id) = seeded();
    let other = roster.stored()[1].id;

    roster.start_edit(id).unwrap();
    roster.start_edit(other).unwrap();

    assert_eq!(roster.editing_id(), Some(other));
    assert_eq!(roster.draft().name, "Nick Chubb");
}
