//! Namespaces backed by dictionary files in subdirectories.

use crate::common::DataDir;

#[test]
fn subdirectory_namespace_expands() {
    let data = DataDir::new();
    data.write_namespace("outfits/winter", "coat: warm coat, scarf\n");

    let out = data.expander().expand("@outfits/winter:coat, snow", 1);
    assert_eq!(out, "warm coat, scarf, snow");
}

#[test]
fn deeply_nested_namespaces_expand() {
    let data = DataDir::new();
    data.write_namespace("styles/artists/modern", "bold: bold lines, flat colors\n");

    let out = data
        .expander()
        .expand("@styles/artists/modern:bold", 1);
    assert_eq!(out, "bold lines, flat colors");
}

#[test]
fn random_works_in_subdirectory_namespaces() {
    let data = DataDir::new();
    data.write_namespace("outfits/summer", "sundress: white sundress\nswimsuit: blue swimsuit\n");

    let expander = data.expander();
    let out = expander.expand("@outfits/summer:random", 5);
    assert!(out == "white sundress" || out == "blue swimsuit");
    assert_eq!(out, expander.expand("@outfits/summer:random", 5));
}

#[test]
fn subdirectory_and_top_level_namespaces_mix() {
    let data = DataDir::new();
    data.write_namespace("characters", "alice:\n  base: 1girl\n");
    data.write_namespace("outfits/winter", "coat: warm coat\n");

    let out = data
        .expander()
        .expand("@characters:alice, @outfits/winter:coat", 1);
    assert_eq!(out, "1girl, warm coat");
}
