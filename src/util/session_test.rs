#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_token_is_none_in_non_hydrate_tests() {
    assert!(read_token().is_none());
}

#[test]
fn write_and_clear_are_noops_but_callable() {
    write_token("t1");
    clear_token();
    assert!(read_token().is_none());
}
