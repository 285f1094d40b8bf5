use gridschema_model::SchemaStore;
use gridschema_resolve::{ResolveError, ResolveOptions, Resolver};
use pretty_assertions::assert_eq;
use serde_json::json;

fn store() -> SchemaStore {
    let mut store = SchemaStore::new();

    let shot = store.entity_mut("Shot");
    shot.field_mut("code");
    shot.field_mut("sg_status_list");
    shot.field_aliases
        .insert("status".into(), "sg_status_list".into());
    shot.field_aliases
        .insert("sg_status".into(), "sg_status_list".into());
    shot.field_tags
        .insert("core".into(), vec!["code".into(), "sg_status_list".into()]);

    let version = store.entity_mut("Version");
    version.field_mut("code");
    version.field_mut("sg_path_to_movie");

    store
}

// ── Entity records ───────────────────────────────────────────────

#[test]
fn symbolic_keys_become_physical_keys() {
    let store = store();
    let r = Resolver::new(&store);
    let opts = ResolveOptions::default();
    let record = json!({"type": "Shot", "sg_status": "ip"});
    assert_eq!(
        r.resolve_structure(&record, None, &opts).unwrap(),
        json!({"type": "Shot", "sg_status_list": "ip"})
    );
}

#[test]
fn explicit_entity_type_override_is_used() {
    let store = store();
    let r = Resolver::new(&store);
    let opts = ResolveOptions::default();
    let record = json!({"status": "ip"});
    assert_eq!(
        r.resolve_structure(&record, Some("Shot"), &opts).unwrap(),
        json!({"sg_status_list": "ip"})
    );
}

#[test]
fn unknown_type_override_leaves_keys_untouched() {
    let store = store();
    let r = Resolver::new(&store);
    let opts = ResolveOptions::default();
    let record = json!({"status": "ip"});
    assert_eq!(
        r.resolve_structure(&record, Some("Cut"), &opts).unwrap(),
        json!({"status": "ip"})
    );
}

#[test]
fn tag_key_fans_out_to_every_member() {
    let store = store();
    let r = Resolver::new(&store);
    let opts = ResolveOptions::default();
    let record = json!({"type": "Shot", "#core": "x"});
    assert_eq!(
        r.resolve_structure(&record, None, &opts).unwrap(),
        json!({"type": "Shot", "code": "x", "sg_status_list": "x"})
    );
}

#[test]
fn later_key_wins_on_physical_collision() {
    let store = store();
    let r = Resolver::new(&store);
    let opts = ResolveOptions::default();
    // Both keys resolve to sg_status_list; "status" iterates after
    // "sg_status", so its value lands.
    let record = json!({"type": "Shot", "sg_status": "a", "status": "b"});
    assert_eq!(
        r.resolve_structure(&record, None, &opts).unwrap(),
        json!({"type": "Shot", "sg_status_list": "b"})
    );
}

#[test]
fn strict_mode_propagates_into_key_resolution() {
    let store = store();
    let r = Resolver::new(&store);
    let record = json!({"type": "Shot", "frames": 96});
    assert_eq!(
        r.resolve_structure(&record, None, &ResolveOptions::strict()),
        Err(ResolveError::UnknownField {
            entity_type: "Shot".into(),
            spec: "frames".into(),
        })
    );
}

#[test]
fn invalid_key_spec_is_an_error() {
    let store = store();
    let r = Resolver::new(&store);
    let opts = ResolveOptions::default();
    let record = json!({"type": "Shot", "%bad": 1});
    assert_eq!(
        r.resolve_structure(&record, None, &opts),
        Err(ResolveError::InvalidSpec {
            spec: "%bad".into()
        })
    );
}

// ── Nesting ──────────────────────────────────────────────────────

#[test]
fn nested_records_declare_their_own_type() {
    let store = store();
    let r = Resolver::new(&store);
    let opts = ResolveOptions::default();
    let record = json!({
        "type": "Shot",
        "status": "ip",
        "latest": {"type": "Version", "path_to_movie": "/v1.mov"},
    });
    assert_eq!(
        r.resolve_structure(&record, None, &opts).unwrap(),
        json!({
            "type": "Shot",
            "sg_status_list": "ip",
            "latest": {"type": "Version", "sg_path_to_movie": "/v1.mov"},
        })
    );
}

#[test]
fn nested_mapping_without_type_keeps_its_keys() {
    let store = store();
    let r = Resolver::new(&store);
    let opts = ResolveOptions::default();
    let record = json!({
        "type": "Shot",
        "meta": {"status": "untouched"},
    });
    assert_eq!(
        r.resolve_structure(&record, None, &opts).unwrap(),
        json!({
            "type": "Shot",
            "meta": {"status": "untouched"},
        })
    );
}

#[test]
fn arrays_rewrite_element_wise() {
    let store = store();
    let r = Resolver::new(&store);
    let opts = ResolveOptions::default();
    let records = json!([
        {"type": "Shot", "status": "ip"},
        {"type": "Version", "path_to_movie": "/v2.mov"},
        "just a string",
    ]);
    assert_eq!(
        r.resolve_structure(&records, None, &opts).unwrap(),
        json!([
            {"type": "Shot", "sg_status_list": "ip"},
            {"type": "Version", "sg_path_to_movie": "/v2.mov"},
            "just a string",
        ])
    );
}

#[test]
fn mapping_without_type_is_rewritten_value_wise() {
    let store = store();
    let r = Resolver::new(&store);
    let opts = ResolveOptions::default();
    let value = json!({
        "filters": {"status": "ip"},
        "shots": [{"type": "Shot", "status": "fin"}],
    });
    assert_eq!(
        r.resolve_structure(&value, None, &opts).unwrap(),
        json!({
            "filters": {"status": "ip"},
            "shots": [{"type": "Shot", "sg_status_list": "fin"}],
        })
    );
}

// ── Scalars & idempotence ────────────────────────────────────────

#[test]
fn scalars_come_back_unchanged() {
    let store = store();
    let r = Resolver::new(&store);
    let opts = ResolveOptions::default();
    for value in [json!(null), json!(true), json!(42), json!("ip")] {
        assert_eq!(r.resolve_structure(&value, None, &opts).unwrap(), value);
    }
}

#[test]
fn rewriting_a_physical_record_is_a_no_op() {
    let store = store();
    let r = Resolver::new(&store);
    let opts = ResolveOptions::default();
    let record = json!({"type": "Shot", "code": "AB_010", "sg_status_list": "ip"});
    let once = r.resolve_structure(&record, None, &opts).unwrap();
    let twice = r.resolve_structure(&once, None, &opts).unwrap();
    assert_eq!(once, record);
    assert_eq!(twice, once);
}
