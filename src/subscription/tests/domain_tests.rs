//! Unit tests for subscription form domain types.

use crate::subscription::domain::{
    FieldFeedback, FieldId, FormMode, GroupDomainError, GroupName, GroupNameComponents,
    ParseFormModeError, ProjectKey, RemoteSearch, RuleViolation, ValidationRule,
    derive_full_name,
};
use rstest::rstest;

use super::project_key;

fn components(parent: &str, organisation: &str, simple_name: &str) -> GroupNameComponents {
    GroupNameComponents::new(
        Some(parent.to_owned()),
        Some(organisation.to_owned()),
        Some(simple_name.to_owned()),
    )
}

// ── Full name derivation ───────────────────────────────────────────

#[rstest]
#[case("proj1-ou1", "proj1", "Web", "proj1-ou1-web")]
#[case("proj1-ou1", "", "web", "proj1-ou1-web")]
#[case("", "proj1", "Web", "proj1-web")]
#[case("", "", "Other", "other")]
#[case("", "", "", "")]
#[case("proj1", "", "", "proj1-")]
fn full_name_prefers_parent_then_organisation(
    #[case] parent: &str,
    #[case] organisation: &str,
    #[case] simple_name: &str,
    #[case] expected: &str,
) {
    assert_eq!(derive_full_name(parent, organisation, simple_name), expected);
    assert_eq!(
        components(parent, organisation, simple_name).full_name(),
        GroupName::new(expected)
    );
}

#[rstest]
fn only_the_simple_name_is_lowercased() {
    assert_eq!(derive_full_name("Proj1-OU", "", "ÉQUIPE"), "Proj1-OU-équipe");
}

#[rstest]
fn derivation_is_deterministic() {
    let parts = components("proj1-ou1", "proj1", "Web");

    assert_eq!(parts.full_name(), parts.clone().full_name());
}

#[rstest]
fn absent_and_whitespace_values_count_as_empty() {
    let parts = GroupNameComponents::new(None, Some("   ".to_owned()), Some("Web".to_owned()));

    assert_eq!(parts.parent(), "");
    assert_eq!(parts.organisation(), "");
    assert_eq!(parts.full_name().as_str(), "web");
}

#[rstest]
fn non_blank_values_are_kept_verbatim() {
    let parts = components("", "proj1", " Web");

    assert_eq!(parts.simple_name(), " Web");
    assert_eq!(parts.full_name().as_str(), "proj1- web");
}

// ── Project namespace ──────────────────────────────────────────────

#[rstest]
#[case("proj1", true)]
#[case("proj1-web", true)]
#[case("proj1-ou1-web", true)]
#[case("proj1web", false)]
#[case("other", false)]
#[case("proj", false)]
#[case("", false)]
fn project_key_admits_itself_and_its_children(#[case] name: &str, #[case] admitted: bool) {
    assert_eq!(project_key().admits(&GroupName::new(name)), admitted);
}

#[rstest]
fn project_key_is_trimmed() {
    let key = ProjectKey::new("  proj1 ").expect("valid key");
    assert_eq!(key.as_str(), "proj1");
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_project_key_is_rejected(#[case] input: &str) {
    assert_eq!(ProjectKey::new(input), Err(GroupDomainError::EmptyProjectKey));
}

#[rstest]
#[case("proj1-web", "proj1", true)]
#[case("proj1", "proj1", false)]
#[case("proj1-", "proj1", false)]
#[case("proj10-web", "proj1", false)]
fn group_extends_requires_a_non_empty_suffix(
    #[case] name: &str,
    #[case] prefix: &str,
    #[case] expected: bool,
) {
    assert_eq!(GroupName::new(name).extends(prefix), expected);
}

// ── Form mode ──────────────────────────────────────────────────────

#[rstest]
#[case("create", FormMode::Create)]
#[case(" LINK ", FormMode::Link)]
#[case("edit", FormMode::Edit)]
fn form_mode_parses_case_insensitively(#[case] input: &str, #[case] expected: FormMode) {
    assert_eq!(FormMode::try_from(input), Ok(expected));
    assert_eq!(FormMode::try_from(expected.as_str()), Ok(expected));
}

#[rstest]
fn unknown_form_mode_is_rejected() {
    assert_eq!(
        FormMode::try_from("delete"),
        Err(ParseFormModeError("delete".to_owned()))
    );
}

// ── Field identifiers and searches ─────────────────────────────────

#[rstest]
fn well_known_field_ids_match_owned_keys() {
    assert_eq!(FieldId::new("service:id:group"), FieldId::GROUP);
    assert_eq!(
        FieldId::GROUP_SIMPLE_NAME.as_str(),
        "service:id:group-simple-name"
    );
}

#[rstest]
fn remote_search_encodes_the_term() {
    let search = RemoteSearch::with_query("service/id/group", "search[value]=");
    assert_eq!(
        search.query_url("proj1/ou"),
        "service/id/group?search[value]=proj1%2Fou"
    );
}

// ── Feedback ───────────────────────────────────────────────────────

#[rstest]
fn starts_with_violation_carries_the_project_key() {
    let violation = RuleViolation::starts_with(&project_key());

    assert_eq!(violation.rule(), ValidationRule::StartsWith);
    assert_eq!(violation.parameters(), ["proj1".to_owned()]);
    assert_eq!(violation.channel(), "group");
    assert!(violation.is_blocking());
}

#[rstest]
fn already_exist_violation_names_field_and_group() {
    let violation = RuleViolation::already_exist(&GroupName::new("proj1-web"));

    assert_eq!(violation.rule().as_str(), "already-exist");
    assert_eq!(
        violation.parameters(),
        ["service:id:group".to_owned(), "proj1-web".to_owned()]
    );
}

#[rstest]
fn group_type_violation_names_the_group() {
    let violation = RuleViolation::group_type(&GroupName::new("ou1"));

    assert_eq!(violation.rule().as_str(), "group-type");
    assert_eq!(violation.parameters(), ["ou1".to_owned()]);
    assert!(violation.is_blocking());
}

#[rstest]
fn only_errors_block_submission() {
    let error = FieldFeedback::Error {
        violation: RuleViolation::starts_with(&project_key()),
    };

    assert!(error.is_blocking());
    assert!(!FieldFeedback::Success.is_blocking());
    assert!(!FieldFeedback::Pending.is_blocking());
    assert!(
        !FieldFeedback::Inconclusive {
            message: "timeout".to_owned()
        }
        .is_blocking()
    );
}

#[rstest]
fn feedback_serializes_with_rule_identifiers() {
    let feedback = FieldFeedback::Error {
        violation: RuleViolation::starts_with(&project_key()),
    };

    let json = serde_json::to_value(&feedback).expect("serializable feedback");

    assert_eq!(json["state"], "error");
    assert_eq!(json["violation"]["rule"], "StartsWith");
    assert_eq!(json["violation"]["parameters"][0], "proj1");
}
