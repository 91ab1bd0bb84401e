use vrpt_model::{AttributeOrder, PropertyDecode, SchemaMap};

fn sample_map() -> SchemaMap {
    let mut map = SchemaMap::new();
    map.insert_category("Entry", "pdbx_vrpt_summary");
    map.insert_attribute("Entry", "pdbid", "entry_id");
    map.insert_attribute("Entry", "PDB-resolution", "PDB_resolution");
    map.insert_attribute("clash", "atom", "atom");
    map
}

#[test]
fn unmapped_names_fall_back_to_identity() {
    let map = sample_map();
    assert_eq!(map.category_name("Entry"), "pdbx_vrpt_summary");
    assert_eq!(map.category_name("ModelledSubgroup"), "ModelledSubgroup");
    assert_eq!(map.attribute_name("Entry", "pdbid"), "entry_id");
    assert_eq!(map.attribute_name("Entry", "unknown"), "unknown");
    // Attribute lookups are keyed by category: same attribute, other category.
    assert_eq!(map.attribute_name("clash", "pdbid"), "pdbid");
}

#[test]
fn registered_attributes_keep_schema_order() {
    let map = sample_map();
    assert_eq!(
        map.registered_attributes("Entry").unwrap().to_vec(),
        vec!["pdbid".to_string(), "PDB-resolution".to_string()]
    );
    assert!(map.registered_attributes("programs").is_none());
    assert!(map.is_registered("clash", "atom"));
    assert_eq!(map.attribute_count(), 3);
    assert_eq!(
        map.registered_categories().collect::<Vec<_>>(),
        vec!["Entry", "clash"]
    );
}

#[test]
fn duplicate_attribute_is_rejected() {
    let mut map = sample_map();
    assert!(!map.insert_attribute("Entry", "pdbid", "other"));
    assert_eq!(map.attribute_name("Entry", "pdbid"), "entry_id");
}

#[test]
fn attribute_order_lookup() {
    let order: AttributeOrder = [("ordinal", 0), ("chain", 3)].into_iter().collect();
    assert_eq!(order.rank("chain"), Some(3));
    assert_eq!(order.rank("resnum"), None);
    assert_eq!(order.len(), 2);
}

#[test]
fn property_decode_identity_fallback() {
    let decode: PropertyDecode = [("clashscore", "MolProbity clashscore")]
        .into_iter()
        .collect();
    assert_eq!(decode.decode("clashscore"), "MolProbity clashscore");
    assert_eq!(decode.decode("RNAsuiteness"), "RNAsuiteness");
    assert_eq!(decode.decode(""), "");
}
