use std::cell::RefCell;
use std::rc::Rc;
use todo_core::db::open_db;
use todo_core::{
    persist_on_change, start_session, MemoryKeyValueStore, Priority, SqliteKeyValueStore, Todo,
    TodoAction, TodoId, TodoStats, TodoStorage, TodoStore, STORAGE_KEY,
};

fn stored(kv: &MemoryKeyValueStore) -> Option<Vec<Todo>> {
    kv.raw(STORAGE_KEY)
        .map(|raw| serde_json::from_str(&raw).unwrap())
}

#[test]
fn write_toggle_delete_scenario() {
    let kv = MemoryKeyValueStore::new();
    let mut store = start_session(TodoStorage::new(kv.clone()));
    assert!(store.todos().is_empty());
    assert!(stored(&kv).is_none(), "empty startup must not write");

    let id = store.add("Write spec", Priority::High).unwrap();
    assert_eq!(store.todos().len(), 1);
    let todo = store.get(&id).unwrap();
    assert!(!todo.completed);
    assert_eq!(todo.priority, Priority::High);
    assert_eq!(stored(&kv).unwrap(), store.todos());

    assert!(store.toggle(id.clone()));
    assert!(store.get(&id).unwrap().completed);
    assert_eq!(
        store.stats(),
        TodoStats {
            total: 1,
            completed: 1,
            pending: 0,
        }
    );
    assert!(stored(&kv).unwrap()[0].completed);

    assert!(store.delete(id));
    assert!(store.todos().is_empty());
    assert_eq!(stored(&kv).unwrap(), Vec::<Todo>::new());
}

#[test]
fn load_action_replaces_prior_state() {
    let mut store = TodoStore::new();
    store.add("old one", Priority::Low).unwrap();
    store.add("old two", Priority::Low).unwrap();
    store.add("old three", Priority::Low).unwrap();

    let item_a = Todo::new("A", Priority::Medium);
    let item_b = Todo::new("B", Priority::High);
    assert!(store.dispatch(TodoAction::Load(vec![
        item_a.clone(),
        item_b.clone()
    ])));

    assert_eq!(store.todos(), &[item_a, item_b][..]);
    assert_eq!(store.stats().total, 2);
}

#[test]
fn session_restores_saved_list() {
    let kv = MemoryKeyValueStore::new();
    let saved = vec![
        Todo::new("carry over", Priority::Medium),
        Todo::new("second", Priority::Low),
    ];
    TodoStorage::new(kv.clone()).save(&saved);

    let store = start_session(TodoStorage::new(kv.clone()));

    assert_eq!(store.todos(), &saved[..]);
    assert_eq!(store.stats().total, 2);
    assert_eq!(stored(&kv).unwrap(), saved);
}

#[test]
fn corrupt_storage_starts_empty_and_keeps_working() {
    let kv = MemoryKeyValueStore::new();
    kv.insert_raw(STORAGE_KEY, "definitely not json");

    let mut store = start_session(TodoStorage::new(kv.clone()));
    assert!(store.todos().is_empty());
    assert_eq!(kv.raw(STORAGE_KEY).as_deref(), Some("definitely not json"));

    store.add("fresh start", Priority::Medium).unwrap();
    assert_eq!(stored(&kv).unwrap().len(), 1);
}

#[test]
fn disabled_storage_keeps_session_only_state() {
    let kv = MemoryKeyValueStore::new();
    kv.set_disabled(true);

    let mut store = start_session(TodoStorage::new(kv.clone()));
    let id = store.add("not persisted", Priority::Low).unwrap();
    store.toggle(id);

    assert_eq!(store.stats().completed, 1);
    kv.set_disabled(false);
    assert!(stored(&kv).is_none());
}

#[test]
fn persistence_runs_once_per_commit_and_after_it() {
    let kv = MemoryKeyValueStore::new();
    let observed = Rc::new(RefCell::new(Vec::new()));

    let mut store = TodoStore::new();
    store.subscribe(persist_on_change(TodoStorage::new(kv.clone())));
    let probe_kv = kv.clone();
    let probe = Rc::clone(&observed);
    store.subscribe(move |todos| {
        // Runs after the persistence hook registered before it.
        let persisted: Vec<Todo> =
            serde_json::from_str(&probe_kv.raw(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(&persisted, &**todos);
        probe.borrow_mut().push(todos.len());
    });

    let first = store.add("one", Priority::Low).unwrap();
    store.add("two", Priority::Low).unwrap();
    store.toggle(TodoId::generate());
    store.dispatch(TodoAction::Unrecognized);
    store.delete(first);

    assert_eq!(*observed.borrow(), vec![1, 2, 1]);
}

#[test]
fn sqlite_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.db");

    let id = {
        let conn = open_db(&path).unwrap();
        let mut store = start_session(TodoStorage::new(SqliteKeyValueStore::new(&conn)));
        let id = store.add("persist me", Priority::High).unwrap();
        store.add("and me", Priority::Low).unwrap();
        store.toggle(id.clone());
        id
    };

    let conn = open_db(&path).unwrap();
    let store = start_session(TodoStorage::new(SqliteKeyValueStore::new(&conn)));
    assert_eq!(store.todos().len(), 2);
    assert!(store.get(&id).unwrap().completed);
    assert_eq!(store.todos()[1].title, "and me");
}
