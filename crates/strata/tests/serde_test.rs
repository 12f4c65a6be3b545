use strata::{
    DependencyRecord, Layering, LayoutOptions, Orientation, PositionScope, UnresolvedPolicy,
    layout,
};

#[test]
fn records_deserialize_from_the_flat_shape() {
    let records: Vec<DependencyRecord> = serde_json::from_str(
        r#"[
            {"component_name": "B", "dependency_name": "D"},
            {"component_name": "R", "dependency_name": null},
            {"component_name": "S", "dependency_name": ""},
            {"component_name": "T"}
        ]"#,
    )
    .unwrap();

    assert_eq!(
        records,
        vec![
            DependencyRecord::new("B", "D"),
            DependencyRecord::root("R"),
            DependencyRecord::root("S"),
            DependencyRecord::root("T"),
        ]
    );
}

#[test]
fn records_deserialize_from_the_grouped_shape() {
    let records: Vec<DependencyRecord> = serde_json::from_str(
        r#"[
            {"component": "api", "group": "backend", "dependency": "db"},
            {"component": "db", "group": "backend", "dependency": ""},
            {"component": "cache", "group": "", "dependency": null}
        ]"#,
    )
    .unwrap();

    assert_eq!(
        records,
        vec![
            DependencyRecord::new("api", "db").with_group("backend"),
            DependencyRecord::root("db").with_group("backend"),
            DependencyRecord::root("cache"),
        ]
    );
}

#[test]
fn records_require_a_component_name() {
    let err = serde_json::from_str::<Vec<DependencyRecord>>(r#"[{"dependency_name": "x"}]"#);
    assert!(err.is_err());
}

#[test]
fn layout_serializes_to_node_and_edge_records() {
    let records = vec![DependencyRecord::new("B", "D"), DependencyRecord::new("A", "B")];
    let out = layout(&records, &LayoutOptions::default()).unwrap();

    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        serde_json::json!({
            "nodes": [
                {"component_name": "D", "id": 2, "x": 1, "y": 1},
                {"component_name": "B", "id": 1, "x": 2, "y": 1},
                {"component_name": "A", "id": 0, "x": 3, "y": 1}
            ],
            "edges": [
                {"source": 1, "target": 2},
                {"source": 0, "target": 1}
            ]
        })
    );
}

#[test]
fn grouped_layout_serializes_the_group() {
    let records = vec![DependencyRecord::new("api", "db").with_group("backend")];
    let out = layout(&records, &LayoutOptions::forward_fixed_point()).unwrap();

    assert_eq!(
        serde_json::to_value(&out.nodes).unwrap(),
        serde_json::json!([
            {"component_name": "db", "id": 1, "x": 0, "y": 0},
            {"component_name": "api", "id": 0, "x": 1, "y": 0, "group": "backend"}
        ])
    );
}

#[test]
fn options_default_missing_keys() {
    let options: LayoutOptions =
        serde_json::from_str(r#"{"layering": "forward-fixed-point", "layerBase": 0}"#).unwrap();

    assert_eq!(
        options,
        LayoutOptions {
            layering: Layering::ForwardFixedPoint,
            layer_base: 0,
            ..LayoutOptions::dependent_depth()
        }
    );
}

#[test]
fn options_deserialize_every_key() {
    let options: LayoutOptions = serde_json::from_str(
        r#"{
            "layering": "dependent-depth",
            "orientation": "roots-first",
            "positions": "group",
            "layerBase": 5,
            "positionBase": 0,
            "unresolved": "append-levels"
        }"#,
    )
    .unwrap();

    assert_eq!(
        options,
        LayoutOptions {
            layering: Layering::DependentDepth,
            orientation: Orientation::RootsFirst,
            positions: PositionScope::Group,
            layer_base: 5,
            position_base: 0,
            unresolved: UnresolvedPolicy::AppendLevels,
        }
    );
}

#[test]
fn options_round_trip_through_json() {
    let options = LayoutOptions::forward_fixed_point();
    let text = serde_json::to_string(&options).unwrap();
    assert!(text.contains("\"positionBase\":0"));
    assert_eq!(serde_json::from_str::<LayoutOptions>(&text).unwrap(), options);
}

#[test]
fn option_enums_parse_cli_spellings() {
    assert_eq!("depth".parse::<Layering>(), Ok(Layering::DependentDepth));
    assert_eq!("Fixed-Point".parse::<Layering>(), Ok(Layering::ForwardFixedPoint));
    assert_eq!("roots".parse::<Orientation>(), Ok(Orientation::RootsFirst));
    assert_eq!("leaves-first".parse::<Orientation>(), Ok(Orientation::LeavesFirst));
    assert_eq!(" group ".parse::<PositionScope>(), Ok(PositionScope::Group));
    assert!("sideways".parse::<Orientation>().is_err());
}
