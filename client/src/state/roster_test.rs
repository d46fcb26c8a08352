use super::*;

#[test]
fn roster_has_eighteen_entries() {
    assert_eq!(TEAM_MEMBERS.len(), 18);
}

#[test]
fn roster_has_exactly_one_lead() {
    let leads: Vec<_> = TEAM_MEMBERS.iter().filter(|m| m.role == Role::Lead).collect();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].display, "Esther-Isreal-Olawepo (GROUP HEAD)");
}

#[test]
fn roster_role_agrees_with_marker() {
    for m in TEAM_MEMBERS {
        assert_eq!(m.role, Role::from_display(m.display), "role mismatch for {}", m.display);
    }
}

#[test]
fn roster_order_is_preserved() {
    assert_eq!(TEAM_MEMBERS[0].display, "Ayotomiwa-Odunayo");
    assert_eq!(TEAM_MEMBERS[3].display, "Esther-Isreal-Olawepo (GROUP HEAD)");
    assert_eq!(TEAM_MEMBERS[17].display, "Ejionye-Sylvaline");
}

#[test]
fn role_from_display_detects_marker() {
    assert_eq!(Role::from_display("Someone (GROUP HEAD)"), Role::Lead);
    assert_eq!(Role::from_display("Someone"), Role::Member);
    assert_eq!(Role::from_display("group head"), Role::Member);
}

#[test]
fn role_styles_differ() {
    assert_ne!(Role::Lead.badge(), Role::Member.badge());
    assert_ne!(Role::Lead.card_class(), Role::Member.card_class());
    assert_ne!(Role::Lead.text_class(), Role::Member.text_class());
}
