#![cfg(feature = "serde")]

use serverxml::{build, render, Element, Kind};

#[test]
fn test_tree_serializes_through_json() -> Result<(), Box<dyn std::error::Error>> {
    let registry = build(include_str!("fixtures/valid/basic_registry.xml"))?;

    let json = serde_json::to_string(&registry)?;
    let restored: Element = serde_json::from_str(&json)?;

    assert_eq!(restored, registry);
    assert_eq!(render(&restored), render(&registry));
    Ok(())
}

#[test]
fn test_kind_serializes_by_variant_name() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(serde_json::to_string(&Kind::Db2JccProperties)?, "\"Db2JccProperties\"");
    Ok(())
}
