use sitecms_store::{ContentStore, Loaded, SlotBackend, SqliteBackend};
use sitecms_types::{FaqItem, slots};

fn faq(id: u64, q: &str, a: &str) -> FaqItem {
    FaqItem {
        id,
        question: q.to_string(),
        answer: a.to_string(),
    }
}

#[test]
fn read_of_unwritten_slot_is_none() {
    let backend = SqliteBackend::open_in_memory().unwrap();
    assert!(backend.read(slots::FAQ).unwrap().is_none());
}

#[test]
fn write_then_read_returns_payload() {
    let backend = SqliteBackend::open_in_memory().unwrap();
    backend.write(slots::FAQ, r#"[{"id":1}]"#).unwrap();
    assert_eq!(
        backend.read(slots::FAQ).unwrap().as_deref(),
        Some(r#"[{"id":1}]"#)
    );
}

#[test]
fn write_replaces_existing_payload() {
    let backend = SqliteBackend::open_in_memory().unwrap();
    backend.write(slots::FAQ, "old").unwrap();
    backend.write(slots::FAQ, "new").unwrap();
    assert_eq!(backend.read(slots::FAQ).unwrap().as_deref(), Some("new"));
}

#[test]
fn slots_are_independent() {
    let backend = SqliteBackend::open_in_memory().unwrap();
    backend.write(slots::FAQ, "faq").unwrap();
    backend.write(slots::BLOG, "blog").unwrap();
    assert_eq!(backend.read(slots::FAQ).unwrap().as_deref(), Some("faq"));
    assert_eq!(backend.read(slots::BLOG).unwrap().as_deref(), Some("blog"));
    assert!(backend.read(slots::FOOTER).unwrap().is_none());
}

#[test]
fn payload_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.db");

    {
        let ctx = ContentStore::new(SqliteBackend::open(&path).unwrap()).context();
        ctx.save(slots::FAQ, &vec![faq(1, "Q1", "A1"), faq(2, "Q2", "A2")])
            .unwrap();
    }

    let ctx = ContentStore::new(SqliteBackend::open(&path).unwrap()).context();
    let loaded: Loaded<Vec<FaqItem>> = ctx.load(slots::FAQ).unwrap();
    assert_eq!(
        loaded,
        Loaded::Value(vec![faq(1, "Q1", "A1"), faq(2, "Q2", "A2")])
    );
}

#[test]
fn typed_store_over_sqlite_round_trips() {
    let ctx = ContentStore::new(SqliteBackend::open_in_memory().unwrap()).context();
    let items = vec![faq(5, "e", "E"), faq(2, "b", "B")];
    ctx.save(slots::FAQ, &items).unwrap();

    let loaded: Loaded<Vec<FaqItem>> = ctx.load(slots::FAQ).unwrap();
    assert_eq!(loaded, Loaded::Value(items));
}
