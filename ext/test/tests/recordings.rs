//! Recording store driven the way a mock statement handler drives it:
//! prepared results are looked up by the SQL a test executes, executed
//! statements are checked afterwards.

use recmatch_test::prelude::*;

fn prepared_results() -> Recordings<&'static str> {
    Recordings::new()
        .with("select * from users", "all_users")
        .with("select name from users where id = ?", "one_user")
        .with("update users", "update_count")
}

#[test]
fn executed_sql_contains_prepared_key() {
    let results = prepared_results();
    let matcher = Matcher::default();

    let found = results
        .find(&matcher, Some("SELECT * FROM users ORDER BY id"), Direction::KeyInQuery)
        .unwrap();
    assert_eq!(found, vec![&"all_users"]);

    let found = results
        .find(&matcher, Some("UPDATE users SET name = ?"), Direction::KeyInQuery)
        .unwrap();
    assert_eq!(found, vec![&"update_count"]);
}

#[test]
fn exact_lookup_ignores_partial_statements() {
    let results = prepared_results();
    let matcher = Matcher::simple(false, true);

    let found = results
        .find(&matcher, Some("SELECT * FROM USERS"), Direction::QueryInKey)
        .unwrap();
    assert_eq!(found, vec![&"all_users"]);

    let found = results
        .find(&matcher, Some("select * from users where 1 = 1"), Direction::KeyInQuery)
        .unwrap();
    assert!(found.is_empty());
}

#[test]
fn regex_lookup_by_query_pattern() {
    let results = prepared_results();
    let matcher = Matcher::new(true, false, true);

    let found = results
        .find(&matcher, Some(r"select \w+ from users.*"), Direction::QueryInKey)
        .unwrap();
    assert_eq!(found, vec![&"one_user"]);
}

#[test]
fn executed_statements_membership() {
    let mut executed: Recordings<Vec<Vec<&str>>> = Recordings::new();
    executed.append("insert into orders values (?, ?)", vec!["1", "book"]);
    executed.append("insert into orders values (?, ?)", vec!["2", "pen"]);
    executed.append("commit", vec![]);

    let matcher = Matcher::default();
    assert!(executed
        .was_recorded(&matcher, Some("INSERT INTO ORDERS"), Direction::QueryInKey)
        .unwrap());
    assert!(!executed
        .was_recorded(&matcher, Some("rollback"), Direction::QueryInKey)
        .unwrap());

    let params = executed
        .find_all(&matcher, Some("insert"), Direction::QueryInKey)
        .unwrap();
    assert_eq!(params, vec![&vec!["1", "book"], &vec!["2", "pen"]]);
}

#[test]
fn explain_lists_every_key() {
    let results = prepared_results();
    let trace = results
        .explain(&Matcher::default(), Some("users where"), Direction::QueryInKey)
        .unwrap();

    assert_eq!(trace.entries.len(), 3);
    assert_eq!(
        trace.matched_keys().collect::<Vec<_>>(),
        vec!["select name from users where id = ?"]
    );
    assert!(trace.to_string().contains("1/3 matched"));
}

#[test]
fn invalid_pattern_is_reported_with_the_pattern() {
    let results = prepared_results();
    let err = results
        .find(&Matcher::new(false, false, true), Some("select (*"), Direction::QueryInKey)
        .unwrap_err();
    assert!(err.to_string().starts_with("invalid pattern \"select (*\""));
}
