use super::*;

#[test]
fn sign_in_is_recognized() {
    assert_eq!(QueryMode::from_query("mode=signIn"), QueryMode::SignIn);
}

#[test]
fn leading_question_mark_is_ignored() {
    assert!(QueryMode::from_query("?mode=signIn").is_sign_in());
}

#[test]
fn sign_in_among_other_params() {
    assert!(QueryMode::from_query("?redirect=%2Fadmin&mode=signIn&x=1").is_sign_in());
}

#[test]
fn empty_query_is_unset() {
    assert_eq!(QueryMode::from_query(""), QueryMode::Unset);
    assert_eq!(QueryMode::from_query("?"), QueryMode::Unset);
    assert_eq!(QueryMode::from_query("?other=signIn"), QueryMode::Unset);
}

#[test]
fn match_is_case_sensitive() {
    assert!(!QueryMode::from_query("mode=signin").is_sign_in());
    assert!(!QueryMode::from_query("mode=SIGNIN").is_sign_in());
    assert!(!QueryMode::from_query("MODE=signIn").is_sign_in());
}

#[test]
fn whitespace_is_not_trimmed() {
    assert!(!QueryMode::from_query("mode=%20signIn").is_sign_in());
    assert!(!QueryMode::from_query("mode=signIn+").is_sign_in());
}

#[test]
fn percent_encoded_value_is_decoded() {
    assert!(QueryMode::from_query("mode=sign%49n").is_sign_in());
}

#[test]
fn other_value_is_kept_verbatim() {
    assert_eq!(QueryMode::from_query("mode=signUp"), QueryMode::Other(vec!["signUp".to_owned()]));
}

#[test]
fn repeated_mode_is_never_sign_in() {
    let mode = QueryMode::from_query("mode=signIn&mode=signIn");
    assert!(!mode.is_sign_in());
    assert_eq!(mode, QueryMode::Other(vec!["signIn".to_owned(), "signIn".to_owned()]));
}
