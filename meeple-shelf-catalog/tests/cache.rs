use std::fs;
use std::sync::Arc;

use meeple_shelf_catalog::{CatalogCache, CatalogError, PipelineConfig};
use tempfile::TempDir;

const HEADER: &str = "objectid,objectname,maxplayers\n";

#[test]
fn second_lookup_reuses_catalog() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("collection.csv");
    fs::write(&path, format!("{HEADER}1,Azul,4\n")).unwrap();

    let mut cache = CatalogCache::new(PipelineConfig::default());
    let first = cache.get_or_build(&path).unwrap();
    let second = cache.get_or_build(&path).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
}

#[test]
fn changed_source_rebuilds() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("collection.csv");
    fs::write(&path, format!("{HEADER}1,Azul,4\n")).unwrap();

    let mut cache = CatalogCache::new(PipelineConfig::default());
    let before = cache.get_or_build(&path).unwrap();
    assert_eq!(before.len(), 1);

    fs::write(&path, format!("{HEADER}1,Azul,4\n2,Hive,2\n")).unwrap();
    let after = cache.get_or_build(&path).unwrap();
    assert_eq!(after.len(), 2);
    assert!(!Arc::ptr_eq(&before, &after));
    // The old list is untouched.
    assert_eq!(before.len(), 1);
}

#[test]
fn invalidate_forces_rebuild() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("collection.csv");
    fs::write(&path, format!("{HEADER}1,Azul,4\n")).unwrap();

    let mut cache = CatalogCache::new(PipelineConfig::default());
    let first = cache.get_or_build(&path).unwrap();
    assert!(cache.contains(&path));

    assert!(cache.invalidate(&path));
    assert!(!cache.contains(&path));
    assert!(!cache.invalidate(&path));

    let second = cache.get_or_build(&path).unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.as_ref(), second.as_ref());
}

#[test]
fn sources_are_cached_independently() {
    let tmp = TempDir::new().unwrap();
    let a = tmp.path().join("a.csv");
    let b = tmp.path().join("b.csv");
    fs::write(&a, format!("{HEADER}1,Azul,4\n")).unwrap();
    fs::write(&b, format!("{HEADER}2,Hive,2\n3,Go,2\n")).unwrap();

    let mut cache = CatalogCache::new(PipelineConfig::default());
    assert_eq!(cache.get_or_build(&a).unwrap().len(), 1);
    assert_eq!(cache.get_or_build(&b).unwrap().len(), 2);
    assert_eq!(cache.len(), 2);

    cache.invalidate(&a);
    assert!(cache.contains(&b));

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn missing_source_is_not_cached() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("collection.csv");

    let mut cache = CatalogCache::new(PipelineConfig::default());
    let err = cache.get_or_build(&path).unwrap_err();
    assert!(matches!(err, CatalogError::SourceUnavailable(_)));
    assert!(cache.is_empty());
}
