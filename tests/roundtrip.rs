//! Round-trip tests: parsing the serializer's output must reconstruct a
//! structurally identical tree, and serialization must be idempotent
//! across the loop.

use elogic_core::dsl::parse;
use elogic_core::{Instruction, Module, Scheme};
use proptest::collection::vec;
use proptest::prelude::*;

#[test]
fn test_roundtrip_adder() {
    let source = "SCHEME adder a b -> s c\nXOR a b -> s\nAND a b -> c\nEND\n";

    let module = parse(source).unwrap();
    let canonical = module.to_string();
    let reparsed = parse(&canonical).unwrap();

    assert_eq!(reparsed, module);
    assert_eq!(reparsed.to_string(), canonical);
}

#[test]
fn test_roundtrip_drops_comments_only() {
    let source = "; gate library\nSCHEME not a -> x ; inverter\nnand a a -> x\nEND\n";
    let stripped = "SCHEME not a -> x\nnand a a -> x\nEND\n";

    assert_eq!(parse(source).unwrap(), parse(stripped).unwrap());
}

#[test]
fn test_canonical_form_is_fixed_point() {
    let source = "\n\nSCHEME s \t a   b->x\n\n\nf a b -> x\nEND";
    let module = parse(source).unwrap();

    let once = module.to_string();
    let twice = parse(&once).unwrap().to_string();
    assert_eq!(once, twice);
    assert_eq!(once, "SCHEME s a b -> x\n  f a b -> x\nEND\n\n");
}

// Generated modules use a lowercase alphabet, which can never collide
// with the reserved spellings SCHEME and END.
fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,5}"
}

prop_compose! {
    fn arb_instruction()(
        name in ident(),
        inputs in vec(ident(), 0..4),
        outputs in vec(ident(), 0..4),
    ) -> Instruction {
        Instruction::new(name, inputs, outputs)
    }
}

prop_compose! {
    fn arb_scheme()(
        name in ident(),
        inputs in vec(ident(), 0..4),
        outputs in vec(ident(), 0..4),
        body in vec(arb_instruction(), 0..4),
    ) -> Scheme {
        let mut scheme = Scheme::new(name, inputs, outputs);
        scheme.body = body;
        scheme
    }
}

fn arb_module() -> impl Strategy<Value = Module> {
    vec(arb_scheme(), 0..4).prop_map(|schemes| Module { schemes })
}

proptest! {
    #[test]
    fn roundtrip_preserves_structure(module in arb_module()) {
        let text = module.to_string();
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(&reparsed, &module);
    }

    #[test]
    fn serialization_is_idempotent(module in arb_module()) {
        let once = module.to_string();
        let twice = parse(&once).unwrap().to_string();
        prop_assert_eq!(once, twice);
    }
}
