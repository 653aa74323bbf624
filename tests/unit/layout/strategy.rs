use super::*;

#[test]
fn strategies_dispatch_to_their_layouts() {
    let images = vec![
        Image::solid(1, 1, [1, 1, 1]),
        Image::solid(1, 1, [2, 2, 2]),
        Image::solid(1, 1, [3, 3, 3]),
    ];
    assert_eq!(
        LayoutStrategy::Grid.compose(&images).unwrap().dimensions(),
        (2, 2)
    );
    assert_eq!(
        LayoutStrategy::Strip.compose(&images).unwrap().dimensions(),
        (3, 1)
    );
}

#[test]
fn both_strategies_reject_empty_input() {
    for s in [LayoutStrategy::Grid, LayoutStrategy::Strip] {
        assert!(matches!(s.compose(&[]), Err(TilefadeError::EmptyInput)));
    }
}

#[test]
fn parses_names_and_aliases() {
    assert_eq!("grid".parse::<LayoutStrategy>().unwrap(), LayoutStrategy::Grid);
    assert_eq!(" Strip ".parse::<LayoutStrategy>().unwrap(), LayoutStrategy::Strip);
    assert_eq!(
        "side_by_side".parse::<LayoutStrategy>().unwrap(),
        LayoutStrategy::Strip
    );
    assert!("".parse::<LayoutStrategy>().is_err());
    assert!("spiral".parse::<LayoutStrategy>().is_err());
}

#[test]
fn serde_uses_snake_case_names() {
    assert_eq!(
        serde_json::to_string(&LayoutStrategy::Strip).unwrap(),
        "\"strip\""
    );
    let parsed: LayoutStrategy = serde_json::from_str("\"grid\"").unwrap();
    assert_eq!(parsed, LayoutStrategy::Grid);
}
