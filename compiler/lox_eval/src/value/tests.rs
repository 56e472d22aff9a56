use super::*;
use crate::{Environment, InstanceValue};
use lox_ir::{FunctionDecl, Token, TokenKind};
use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;

fn render(value: &Value, interner: &StringInterner) -> String {
    value.display(interner).to_string()
}

fn empty_function(interner: &StringInterner, name: &str) -> FunctionValue {
    let decl = FunctionDecl {
        name: Token::new(TokenKind::Identifier, interner.intern(name), 1),
        params: Vec::new(),
        body: Vec::new(),
    };
    FunctionValue::new(Rc::new(decl), Environment::global())
}

fn empty_class(interner: &StringInterner, name: &str) -> ClassValue {
    ClassValue::new(
        interner.intern(name),
        None,
        FxHashMap::default(),
        interner.intern("init"),
    )
}

#[test]
fn truthiness() {
    assert!(!Value::Nil.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(Value::Number(0.0).is_truthy());
    assert!(Value::string("").is_truthy());
}

#[test]
fn numbers_drop_integral_fraction() {
    let interner = StringInterner::new();
    assert_eq!(render(&Value::Number(3.0), &interner), "3");
    assert_eq!(render(&Value::Number(-12.0), &interner), "-12");
    assert_eq!(render(&Value::Number(2.5), &interner), "2.5");
    assert_eq!(render(&Value::Number(0.1 + 0.2), &interner), "0.30000000000000004");
}

#[test]
fn extreme_magnitudes_print_positionally() {
    let interner = StringInterner::new();
    assert_eq!(render(&Value::Number(1e21), &interner), "1000000000000000000000");
    assert_eq!(render(&Value::Number(1e-7), &interner), "0.0000001");
}

#[test]
fn non_finite_numbers() {
    let interner = StringInterner::new();
    assert_eq!(render(&Value::Number(f64::INFINITY), &interner), "Infinity");
    assert_eq!(render(&Value::Number(f64::NEG_INFINITY), &interner), "-Infinity");
    assert_eq!(render(&Value::Number(f64::NAN), &interner), "NaN");
}

#[test]
fn scalars_render_plainly() {
    let interner = StringInterner::new();
    assert_eq!(render(&Value::Nil, &interner), "nil");
    assert_eq!(render(&Value::Bool(true), &interner), "true");
    assert_eq!(render(&Value::Bool(false), &interner), "false");
    assert_eq!(render(&Value::string("a \"b\""), &interner), "a \"b\"");
}

#[test]
fn objects_render_by_name() {
    let interner = StringInterner::new();
    let function = empty_function(&interner, "greet");
    let class = empty_class(&interner, "Point");
    let instance = InstanceValue::new(class.clone());

    assert_eq!(render(&Value::Function(function), &interner), "<fn greet>");
    assert_eq!(render(&Value::Class(class), &interner), "Point");
    assert_eq!(render(&Value::Instance(instance), &interner), "Point instance");
}

#[test]
fn equality_within_and_across_kinds() {
    assert_eq!(Value::Nil, Value::Nil);
    assert_ne!(Value::Nil, Value::Bool(false));
    assert_ne!(Value::Number(0.0), Value::Bool(false));
    assert_ne!(Value::string("1"), Value::Number(1.0));
    assert_eq!(Value::string("ab"), Value::string(String::from("a") + "b"));
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
}

#[test]
fn objects_compare_by_identity() {
    let interner = StringInterner::new();
    let class = empty_class(&interner, "A");
    let same = class.clone();
    let twin = empty_class(&interner, "A");
    assert_eq!(Value::Class(class.clone()), Value::Class(same));
    assert_ne!(Value::Class(class.clone()), Value::Class(twin));

    let a = InstanceValue::new(class.clone());
    let b = InstanceValue::new(class);
    assert_eq!(Value::Instance(a.clone()), Value::Instance(a.clone()));
    assert_ne!(Value::Instance(a), Value::Instance(b));

    let f = empty_function(&interner, "f");
    let g = empty_function(&interner, "f");
    assert_eq!(Value::Function(f.clone()), Value::Function(f.clone()));
    assert_ne!(Value::Function(f), Value::Function(g));
}

#[test]
fn only_functions_and_classes_are_callable() {
    let interner = StringInterner::new();
    assert!(Value::Function(empty_function(&interner, "f"))
        .as_callable()
        .is_some());
    assert!(Value::Class(empty_class(&interner, "C")).as_callable().is_some());
    assert!(Value::Nil.as_callable().is_none());
    assert!(Value::string("f").as_callable().is_none());
    let instance = InstanceValue::new(empty_class(&interner, "C"));
    assert!(Value::Instance(instance).as_callable().is_none());
}

#[test]
fn type_names() {
    let interner = StringInterner::new();
    let class = empty_class(&interner, "C");
    let names: Vec<&str> = [
        Value::Nil,
        Value::Bool(true),
        Value::Number(1.0),
        Value::string("s"),
        Value::Function(empty_function(&interner, "f")),
        Value::Class(class.clone()),
        Value::Instance(InstanceValue::new(class)),
    ]
    .iter()
    .map(Value::type_name)
    .collect();
    assert_eq!(
        names,
        ["nil", "boolean", "number", "string", "function", "class", "instance"]
    );
}

#[test]
fn fields_are_created_once_per_name() {
    let interner = StringInterner::new();
    let instance = InstanceValue::new(empty_class(&interner, "C"));
    let x = interner.intern("x");
    assert_eq!(instance.field_count(), 0);

    instance.set_field(x, Value::Number(1.0));
    instance.set_field(x, Value::Number(2.0));
    assert_eq!(instance.field_count(), 1);
    assert_eq!(instance.get_field(x), Some(Value::Number(2.0)));

    instance.set_field(interner.intern("y"), Value::Nil);
    assert_eq!(instance.field_count(), 2);
}

#[test]
fn function_keeps_declaration_and_closure() {
    let interner = StringInterner::new();
    let env = Environment::global().child();
    let decl = Rc::new(FunctionDecl {
        name: Token::new(TokenKind::Identifier, interner.intern("f"), 1),
        params: vec![Token::new(TokenKind::Identifier, interner.intern("a"), 1)],
        body: Vec::new(),
    });
    let function = FunctionValue::new(Rc::clone(&decl), env.clone());

    assert!(Rc::ptr_eq(function.decl(), &decl));
    assert!(function.closure().ptr_eq(&env));
    assert_eq!(interner.lookup(function.name()), "f");
}

#[test]
fn subclass_links_to_superclass() {
    let interner = StringInterner::new();
    let base = empty_class(&interner, "Base");
    let derived = ClassValue::new(
        interner.intern("Derived"),
        Some(base.clone()),
        FxHashMap::default(),
        interner.intern("init"),
    );

    assert!(derived.superclass().is_some_and(|s| s.ptr_eq(&base)));
    assert!(base.superclass().is_none());
}
