use serde_json::json;
use tempfile::TempDir;
use userdeck::domain::{SortKey, SortOrder};
use userdeck::storage::{
    JsonPreferences, PreferenceBackend, Preferences, SortPreference, SEARCH_KEY, SORT_KEY,
};

fn prefs_in(dir: &TempDir) -> Preferences<JsonPreferences> {
    Preferences::new(JsonPreferences::new(dir.path().join("preferences.json")))
}

#[test]
fn saved_values_survive_a_new_instance() {
    let dir = TempDir::new().unwrap();
    let sort = SortPreference::new(SortKey::Email, SortOrder::Descending);

    let mut prefs = prefs_in(&dir);
    prefs.save(SEARCH_KEY, "Leanne");
    prefs.save(SORT_KEY, &sort);
    drop(prefs);

    let prefs = prefs_in(&dir);
    assert_eq!(prefs.load::<String>(SEARCH_KEY).as_deref(), Some("Leanne"));
    assert_eq!(prefs.load::<SortPreference>(SORT_KEY), Some(sort));
}

#[test]
fn file_uses_the_documented_layout() {
    let dir = TempDir::new().unwrap();
    let mut prefs = prefs_in(&dir);
    prefs.save(SEARCH_KEY, "bob");
    prefs.save(SORT_KEY, &SortPreference::new(SortKey::Name, SortOrder::Ascending));

    let raw = std::fs::read_to_string(dir.path().join("preferences.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        parsed,
        json!({"userSearch": "bob", "userSort": {"key": "name", "order": "asc"}})
    );
    assert!(!dir.path().join("preferences.tmp").exists());
}

#[test]
fn missing_key_and_missing_file_load_as_none() {
    let dir = TempDir::new().unwrap();
    let prefs = prefs_in(&dir);
    assert_eq!(prefs.load::<String>(SEARCH_KEY), None);
    assert_eq!(prefs.load::<SortPreference>(SORT_KEY), None);
}

#[test]
fn arbitrary_values_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut prefs = prefs_in(&dir);
    let value = json!({"nested": [1, 2, {"deep": true}], "text": "ü"});

    prefs.save("k", &value);
    assert_eq!(prefs.load::<serde_json::Value>("k"), Some(value));
}

#[test]
fn malformed_file_loads_as_none_and_is_replaced_on_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut prefs = prefs_in(&dir);
    assert_eq!(prefs.load::<String>(SEARCH_KEY), None);
    assert!(prefs.backend().get(SEARCH_KEY).is_err());

    prefs.save(SEARCH_KEY, "carol");
    assert_eq!(prefs.load::<String>(SEARCH_KEY).as_deref(), Some("carol"));
}

#[test]
fn unwritable_location_is_swallowed() {
    let dir = TempDir::new().unwrap();
    let mut prefs =
        Preferences::new(JsonPreferences::new(dir.path().join("missing").join("preferences.json")));

    prefs.save(SEARCH_KEY, "dave");
    assert_eq!(prefs.load::<String>(SEARCH_KEY), None);
}

#[test]
fn remove_deletes_only_that_key() {
    let dir = TempDir::new().unwrap();
    let mut prefs = prefs_in(&dir);
    prefs.save(SEARCH_KEY, "erin");
    prefs.save(SORT_KEY, &SortPreference::default());

    prefs.remove(SEARCH_KEY);
    prefs.remove("never-written");

    assert_eq!(prefs.load::<String>(SEARCH_KEY), None);
    assert_eq!(prefs.load::<SortPreference>(SORT_KEY), Some(SortPreference::default()));
}
