use super::*;
use lox_ir::SharedInterner;
use pretty_assertions::assert_eq;

fn num(n: f64) -> Value {
    Value::Number(n)
}

#[test]
fn define_then_get() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let env = Environment::global();
    env.define(x, num(1.0));
    assert_eq!(env.get(x), Ok(num(1.0)));
}

#[test]
fn define_overwrites_in_same_frame() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let env = Environment::global();
    env.define(x, num(1.0));
    env.define(x, Value::string("again"));
    assert_eq!(env.get(x), Ok(Value::string("again")));
}

#[test]
fn child_shadows_without_touching_parent() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let global = Environment::global();
    global.define(x, Value::string("global"));
    let block = global.child();
    block.define(x, Value::string("local"));

    assert_eq!(block.get(x), Ok(Value::string("local")));
    assert_eq!(global.get(x), Ok(Value::string("global")));
}

#[test]
fn get_walks_the_chain() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let global = Environment::global();
    global.define(x, num(7.0));
    let inner = global.child().child().child();
    assert_eq!(inner.get(x), Ok(num(7.0)));
    assert_eq!(inner.depth(), 4);
}

#[test]
fn missing_name_is_undefined() {
    let interner = SharedInterner::default();
    let env = Environment::global().child();
    assert_eq!(env.get(interner.intern("nope")), Err(LookupError::Undefined));
}

#[test]
fn declared_slot_is_uninitialized_but_nil_is_a_value() {
    let interner = SharedInterner::default();
    let a = interner.intern("a");
    let b = interner.intern("b");

    let env = Environment::global();
    env.declare(a);
    env.define(b, Value::Nil);

    assert_eq!(env.get(a), Err(LookupError::Uninitialized));
    assert_eq!(env.get(b), Ok(Value::Nil));
}

#[test]
fn assigning_a_declared_slot_initializes_it() {
    let interner = SharedInterner::default();
    let a = interner.intern("a");

    let env = Environment::global();
    env.declare(a);
    assert_eq!(env.assign(a, Value::Nil), Ok(()));
    assert_eq!(env.get(a), Ok(Value::Nil));
}

#[test]
fn assign_updates_nearest_binding() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let global = Environment::global();
    global.define(x, num(1.0));
    let block = global.child();
    assert_eq!(block.assign(x, num(2.0)), Ok(()));

    assert_eq!(global.get(x), Ok(num(2.0)));
    assert!(!block.contains_local(x));
}

#[test]
fn assign_never_declares() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let env = Environment::global().child();
    assert_eq!(env.assign(x, num(1.0)), Err(AssignError::Undefined));
    assert_eq!(env.get(x), Err(LookupError::Undefined));
}

#[test]
fn resolved_access_skips_shadowing_frames() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let global = Environment::global();
    global.define(x, Value::string("outer"));
    let block = global.child();
    block.define(x, Value::string("inner"));

    assert_eq!(block.get_at(0, x), Ok(Value::string("inner")));
    assert_eq!(block.get_at(1, x), Ok(Value::string("outer")));

    assert_eq!(block.assign_at(1, x, Value::string("changed")), Ok(()));
    assert_eq!(global.get(x), Ok(Value::string("changed")));
    assert_eq!(block.get(x), Ok(Value::string("inner")));
}

#[test]
fn resolved_access_does_not_search() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let global = Environment::global();
    global.define(x, num(1.0));
    let block = global.child();

    assert_eq!(block.get_at(0, x), Err(LookupError::Undefined));
    assert_eq!(block.assign_at(0, x, num(2.0)), Err(AssignError::Undefined));
    assert_eq!(block.get_at(5, x), Err(LookupError::Undefined));
}

#[test]
fn clones_share_the_frame() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let env = Environment::global();
    let alias = env.clone();
    alias.define(x, num(3.0));
    assert_eq!(env.get(x), Ok(num(3.0)));
    assert!(env.ptr_eq(&alias));
    assert!(!env.ptr_eq(&env.child()));
}

#[test]
fn ancestor_and_enclosing() {
    let global = Environment::global();
    let block = global.child();
    assert!(block.enclosing().is_some_and(|e| e.ptr_eq(&global)));
    assert!(block.ancestor(1).is_some_and(|e| e.ptr_eq(&global)));
    assert!(block.ancestor(0).is_some_and(|e| e.ptr_eq(&block)));
    assert!(block.ancestor(2).is_none());
    assert!(global.enclosing().is_none());
}

#[test]
fn long_chains_do_not_recurse() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let global = Environment::global();
    global.define(x, num(1.0));
    let mut env = global.clone();
    for _ in 0..100_000 {
        env = env.child();
    }
    assert_eq!(env.get(x), Ok(num(1.0)));
    assert_eq!(env.assign(x, num(2.0)), Ok(()));
    assert_eq!(global.get(x), Ok(num(2.0)));
    drop(env);
    assert_eq!(global.get(x), Ok(num(2.0)));
}
