use quoterack::json::JsonSource;
use quoterack::source::QuoteSource;
use quoterack::sqlite::SqliteSource;
use rusqlite::Connection;
use serde_json::json;

fn create_db(name: &str) -> String {
    let path = format!("test_quoterack_{name}.db");
    let _ = std::fs::remove_file(&path);
    let db = Connection::open(&path).expect("create db");
    db.execute_batch(
        "create table quotes (
            author text,
            quote text,
            comment text,
            day integer,
            month integer,
            year integer,
            annodomini text
        );
        insert into quotes values ('Seneca', 'one', null, 0, 0, 65, 'true');
        insert into quotes values ('Cato', 'two', null, 0, 0, 150, 'false');
        insert into quotes values ('Seneca', 'three', null, 0, 0, 62, 'true');",
    )
    .expect("seed");
    path
}

fn write_doc(name: &str) -> String {
    let path = format!("test_quoterack_{name}.json");
    let doc = json!({
        "quotes": [
            { "author": "Seneca", "quote": "one" },
            { "author": "Cato", "quote": "two" },
            { "author": "Seneca", "quote": "three" }
        ]
    });
    std::fs::write(&path, doc.to_string()).expect("write doc");
    path
}

#[test]
fn sql_author_filter_matches_exactly() {
    let path = create_db("author_exact");
    let chain = SqliteSource::new(path.as_str())
        .get_all_by_author(Some("Seneca"))
        .expect("chain");
    assert_eq!(chain.node_count(), 2);
    assert!(chain.iter().all(|q| q.author() == Some("Seneca")));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn sql_author_filter_is_case_sensitive() {
    let path = create_db("author_case");
    assert!(SqliteSource::new(path.as_str()).get_all_by_author(Some("seneca")).is_none());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn sql_absent_author_is_rejected() {
    let path = create_db("author_absent");
    assert!(SqliteSource::new(path.as_str()).get_all_by_author(None).is_none());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn sql_unmatched_author_yields_no_chain() {
    let path = create_db("author_unmatched");
    assert!(SqliteSource::new(path.as_str()).get_all_by_author(Some("Cicero")).is_none());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn json_author_filter_matches_exactly() {
    let path = write_doc("author_json");
    let source = JsonSource::new(path.as_str());
    let chain = source.get_all_by_author(Some("Cato")).expect("chain");
    assert_eq!(chain.node_count(), 1);
    assert_eq!(chain.get(chain.head()).unwrap().text(), Some("two"));
    assert!(source.get_all_by_author(None).is_none());
    let _ = std::fs::remove_file(&path);
}
