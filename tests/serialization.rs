#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use test_log::test;

use opt::Opt;

#[test]
fn serialize() {
    assert_eq!(serde_json::to_string(&Opt::some(7)).unwrap(), "7");
    assert_eq!(serde_json::to_string(&Opt::<i32>::none()).unwrap(), "null");
    assert_eq!(
        serde_json::to_string(&vec![Opt::some("a"), Opt::none()]).unwrap(),
        r#"["a",null]"#
    );
}

#[test]
fn deserialize() {
    assert_eq!(serde_json::from_str::<Opt<i32>>("7").unwrap(), Opt::some(7));
    assert_eq!(serde_json::from_str::<Opt<i32>>("null").unwrap(), Opt::none());
    assert!(serde_json::from_str::<Opt<i32>>("\"x\"").is_err());
}
