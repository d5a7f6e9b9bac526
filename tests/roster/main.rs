mod edit_session;

use roster_rust::{
    BackingStore, Field, InMemoryBackingStore, Notification, PlayerDraft, RosterError, SortDirection,
    SortState,
};
use support::{kinds, roster, roster_on, type_draft, valid};

// =============================================================================
// add
// =============================================================================

#[test]
fn add_valid_player() {
    let (mut roster, seen) = roster();
    type_draft(&mut roster, &PlayerDraft::new("  saquon   barkley ", "RB", "SR", "97"));

    let player = roster.add().unwrap();

    assert_eq!(player.name, "Saquon Barkley");
    assert_eq!(player.position, "RB");
    assert_eq!(player.year, "SR");
    assert_eq!(player.rating, "97");
    assert_eq!(roster.stored(), &[player.clone()]);
    assert!(roster.errors().is_empty());
    assert!(roster.draft().is_empty());
    assert_eq!(
        seen.lock().unwrap().last(),
        Some(&Notification::PlayerAdded {
            id: player.id,
            name: "Saquon Barkley".into()
        })
    );
}

#[test]
fn add_succeeds_iff_every_field_is_valid() {
    let too_long = "n".repeat(101);
    let names = ["Ed Reed", "", "   ", too_long.as_str()];
    let positions = ["S", "s", "Safety", ""];
    let ratings = ["0", "99", "100", "-3", "ten", ""];

    for name in names {
        for position in positions {
            for rating in ratings {
                let (mut roster, _) = roster();
                let draft = PlayerDraft::new(name, position, "SO", rating);
                type_draft(&mut roster, &draft);

                let name_ok = roster_rust::validate_name(name);
                let position_ok = roster_rust::validate_position(position);
                let rating_ok = roster_rust::validate_rating(rating);

                match roster.add() {
                    Ok(_) => {
                        assert!(name_ok && position_ok && rating_ok, "{:?} accepted", draft);
                        assert_eq!(roster.stored().len(), 1);
                    }
                    Err(RosterError::Validation(errors)) => {
                        assert!(!(name_ok && position_ok && rating_ok), "{:?} rejected", draft);
                        assert_eq!(errors.contains(Field::Name), !name_ok);
                        assert_eq!(errors.contains(Field::Position), !position_ok);
                        assert_eq!(errors.contains(Field::Rating), !rating_ok);
                        assert!(!errors.contains(Field::Year));
                        assert!(roster.stored().is_empty());
                        assert_eq!(roster.backing().get("players").unwrap(), None);
                    }
                    Err(other) => panic!("unexpected error {:?}", other),
                }
            }
        }
    }
}

#[test]
fn invalid_year_is_rejected() {
    let (mut roster, _) = roster();
    type_draft(&mut roster, &PlayerDraft::new("Ed Reed", "S", "GR", "90"));

    let err = roster.add().unwrap_err();
    assert_eq!(err.field_errors().unwrap().fields(), vec![Field::Year]);
}

#[test]
fn name_that_grows_when_capitalized_is_rejected() {
    let (mut roster, _) = roster();
    type_draft(&mut roster, &PlayerDraft::new(vec!["ß"; 50].join(" "), "OL", "FR", "60"));

    let err = roster.add().unwrap_err();

    assert_eq!(err.field_errors().unwrap().fields(), vec![Field::Name]);
    assert!(roster.stored().is_empty());
}

#[test]
fn stored_names_stay_valid_and_resave_unchanged() {
    let (mut roster, _) = roster();
    type_draft(&mut roster, &PlayerDraft::new(vec!["ß"; 30].join(" "), "OL", "FR", "60"));
    let player = roster.add().unwrap();

    assert!(roster_rust::validate_name(&player.name));
    assert!(player.name.chars().count() <= roster_rust::MAX_NAME_LEN);

    roster.start_edit(player.id).unwrap();
    assert_eq!(roster.save_edit().unwrap(), player);
}

#[test]
fn validation_errors_are_exposed_and_draft_kept() {
    let (mut roster, seen) = roster();
    type_draft(&mut roster, &PlayerDraft::new("", "QB", "FR", "150"));

    let err = roster.add().unwrap_err();

    assert!(err.is_recoverable());
    assert_eq!(roster.errors().fields(), vec![Field::Name, Field::Rating]);
    assert_eq!(roster.draft().rating, "150");
    assert_eq!(kinds(&seen), vec!["ValidationFailed"]);

    // Fixing the input and retrying clears the error state.
    roster.set_field(Field::Name, "Cam Newton");
    roster.set_field(Field::Rating, "88");
    roster.add().unwrap();
    assert!(roster.errors().is_empty());
}

// =============================================================================
// remove
// =============================================================================

#[test]
fn remove_existing_player() {
    let (mut roster, seen) = roster();
    type_draft(&mut roster, &valid("a", "10"));
    let a = roster.add().unwrap();
    type_draft(&mut roster, &valid("b", "20"));
    let b = roster.add().unwrap();

    assert!(roster.remove(a.id).unwrap());

    assert_eq!(roster.stored(), &[b]);
    assert_eq!(
        seen.lock().unwrap().last(),
        Some(&Notification::PlayerRemoved { id: a.id })
    );
}

#[test]
fn remove_unknown_id_is_a_no_op() {
    let backing = InMemoryBackingStore::new();
    let (mut roster, seen) = roster_on(backing.clone());
    type_draft(&mut roster, &valid("a", "10"));
    let a = roster.add().unwrap();
    let stored_before = backing.get("players").unwrap();
    roster.request_sort(Field::Name);

    assert!(!roster.remove(a.id + 1000).unwrap());

    assert_eq!(roster.stored(), &[a]);
    assert_eq!(backing.get("players").unwrap(), stored_before);
    assert_eq!(kinds(&seen), vec!["PlayerAdded"]);
    // No change to the collection, so the chosen sort survives.
    assert_eq!(roster.sort_state().field, Field::Name);
}

// =============================================================================
// sorted view
// =============================================================================

#[test]
fn view_defaults_to_rating_descending() {
    let (mut roster, _) = roster();
    for (name, rating) in [("a", "45"), ("b", "92"), ("c", "7"), ("d", "99")] {
        type_draft(&mut roster, &valid(name, rating));
        roster.add().unwrap();
    }

    let ratings: Vec<String> = roster.players().into_iter().map(|p| p.rating).collect();
    assert_eq!(ratings, vec!["99", "92", "45", "7"]);

    // Stored order is untouched by sorting.
    let stored: Vec<&str> = roster.stored().iter().map(|p| p.rating.as_str()).collect();
    assert_eq!(stored, vec!["45", "92", "7", "99"]);
}

#[test]
fn sort_requests_toggle_and_reset() {
    let (mut roster, _) = roster();

    roster.request_sort(Field::Name);
    assert_eq!(roster.sort_state(), SortState::new(Field::Name, SortDirection::Ascending));
    roster.request_sort(Field::Name);
    assert_eq!(roster.sort_state(), SortState::new(Field::Name, SortDirection::Descending));
    roster.request_sort(Field::Position);
    assert_eq!(
        roster.sort_state(),
        SortState::new(Field::Position, SortDirection::Ascending)
    );
}

#[test]
fn every_change_restores_default_sort() {
    let (mut roster, _) = roster();
    type_draft(&mut roster, &valid("Zach", "50"));
    let zach = roster.add().unwrap();
    type_draft(&mut roster, &valid("Abe", "60"));
    roster.add().unwrap();

    roster.request_sort(Field::Name);
    assert_eq!(roster.players()[0].name, "Abe");

    roster.remove(zach.id).unwrap();
    assert_eq!(roster.sort_state(), SortState::default());
}

// =============================================================================
// reset
// =============================================================================

#[test]
fn reset_clears_everything() {
    let backing = InMemoryBackingStore::new();
    backing.set("coachName", "Nick").unwrap();
    backing.set("schoolName", "Bama").unwrap();
    let (mut roster, seen) = roster_on(backing.clone());
    type_draft(&mut roster, &valid("a", "10"));
    let a = roster.add().unwrap();
    roster.start_edit(a.id).unwrap();

    roster.reset().unwrap();

    assert!(roster.players().is_empty());
    assert!(!roster.is_editing());
    for key in ["players", "coachName", "schoolName"] {
        assert_eq!(backing.get(key).unwrap(), None);
    }
    assert_eq!(kinds(&seen), vec!["PlayerAdded", "RosterReset"]);
}
